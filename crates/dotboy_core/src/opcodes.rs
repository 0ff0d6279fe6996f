//! Opcode dispatch table.
//!
//! Every opcode byte maps to an optional [`OpcodeInfo`] descriptor. Adding
//! an instruction means adding a descriptor here and, for a new kind of
//! operation, a branch in `Cpu::exec_opcode`. The table currently covers
//! NOP, the 8-bit load group and the 8-bit ALU group. Bytes without a descriptor
//! surface as `CpuError::UnimplementedOpcode`.

use std::fmt;

use lazy_static::lazy_static;

use crate::regs::Reg8;

/// 8-bit accumulator operations (`A <- A op value`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    /// Decode bits 3-5 of an ALU opcode (0x80-0xBF and the d8 forms).
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbc => "SBC",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Or => "OR",
            AluOp::Cp => "CP",
        }
    }

    /// ADD, ADC and SBC name the accumulator explicitly in assembly.
    const fn names_accumulator(self) -> bool {
        matches!(self, AluOp::Add | AluOp::Adc | AluOp::Sbc)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Reg(Reg8),
    /// Byte following the opcode.
    Imm8,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(reg) => f.write_str(reg.name()),
            Operand::Imm8 => f.write_str("d8"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Nop,
    /// `A <- A op src`
    Alu(AluOp, Operand),
    /// `dst <- src`
    Ld(Reg8, Operand),
}

/// Descriptor for one opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub opcode: u8,
    pub operation: Operation,
    /// Length in bytes, opcode included.
    pub length: u8,
    /// T-cycles consumed.
    pub cycles: u32,
}

impl OpcodeInfo {
    pub const fn mnemonic(&self) -> &'static str {
        match self.operation {
            Operation::Nop => "NOP",
            Operation::Alu(op, _) => op.mnemonic(),
            Operation::Ld(..) => "LD",
        }
    }
}

impl fmt::Display for OpcodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Operation::Nop => f.write_str("NOP"),
            Operation::Alu(op, src) if op.names_accumulator() => {
                write!(f, "{} A,{}", op.mnemonic(), src)
            }
            Operation::Alu(op, src) => write!(f, "{} {}", op.mnemonic(), src),
            Operation::Ld(dst, src) => write!(f, "LD {},{}", dst.name(), src),
        }
    }
}

lazy_static! {
    /// Descriptor table indexed by opcode byte.
    pub static ref OPCODE_TABLE: [Option<OpcodeInfo>; 256] = build_table();
}

/// Look up the descriptor for `opcode`, if one is registered.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static OpcodeInfo> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

fn build_table() -> [Option<OpcodeInfo>; 256] {
    let mut table = [None; 256];

    table[0x00] = Some(OpcodeInfo {
        opcode: 0x00,
        operation: Operation::Nop,
        length: 1,
        cycles: 4,
    });

    // LD r, d8 (and LD (HL), d8)
    for index in 0..8u8 {
        let opcode = 0x06 | (index << 3);
        let dst = Reg8::from_index(index);
        table[opcode as usize] = Some(OpcodeInfo {
            opcode,
            operation: Operation::Ld(dst, Operand::Imm8),
            length: 2,
            cycles: if dst == Reg8::HlInd { 12 } else { 8 },
        });
    }

    // 8-bit register/memory transfers: LD r1, r2.
    // 0x76 would be LD (HL),(HL); on hardware it is HALT, which is not
    // implemented, so it stays empty.
    for opcode in (0x40..=0x7Fu8).filter(|&op| op != 0x76) {
        let dst = Reg8::from_index(opcode >> 3);
        let src = Reg8::from_index(opcode);
        let touches_memory = dst == Reg8::HlInd || src == Reg8::HlInd;
        table[opcode as usize] = Some(OpcodeInfo {
            opcode,
            operation: Operation::Ld(dst, Operand::Reg(src)),
            length: 1,
            cycles: if touches_memory { 8 } else { 4 },
        });
    }

    // 8-bit ALU operations on A: ADD/ADC/SUB/SBC/AND/XOR/OR/CP r,(HL)
    for opcode in 0x80..=0xBFu8 {
        let op = AluOp::from_index(opcode >> 3);
        let src = Reg8::from_index(opcode);
        table[opcode as usize] = Some(OpcodeInfo {
            opcode,
            operation: Operation::Alu(op, Operand::Reg(src)),
            length: 1,
            cycles: if src == Reg8::HlInd { 8 } else { 4 },
        });
    }

    // 8-bit ALU immediate operations on A: 0xC6, 0xCE, ..., 0xFE
    for index in 0..8u8 {
        let opcode = 0xC6 | (index << 3);
        table[opcode as usize] = Some(OpcodeInfo {
            opcode,
            operation: Operation::Alu(AluOp::from_index(index), Operand::Imm8),
            length: 2,
            cycles: 8,
        });
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_sit_at_their_own_opcode() {
        for (index, entry) in OPCODE_TABLE.iter().enumerate() {
            if let Some(info) = entry {
                assert_eq!(info.opcode as usize, index);
            }
        }
    }

    #[test]
    fn implemented_set() {
        let implemented = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        // NOP + 8 LD r,d8 + 63 LD r,r + 64 register ALU ops + 8 immediate ALU ops.
        assert_eq!(implemented, 144);
        assert!(lookup(0xFF).is_none());
        assert!(lookup(0x76).is_none());
        assert!(lookup(0x01).is_none());
        assert!(lookup(0xCB).is_none());
    }

    #[test]
    fn add_a_b_descriptor() {
        let info = lookup(0x80).unwrap();
        assert_eq!(
            info.operation,
            Operation::Alu(AluOp::Add, Operand::Reg(Reg8::B))
        );
        assert_eq!(info.length, 1);
        assert_eq!(info.cycles, 4);
        assert_eq!(info.to_string(), "ADD A,B");
    }

    #[test]
    fn disassembly_names() {
        assert_eq!(lookup(0x00).unwrap().to_string(), "NOP");
        assert_eq!(lookup(0x86).unwrap().to_string(), "ADD A,(HL)");
        assert_eq!(lookup(0x8F).unwrap().to_string(), "ADC A,A");
        assert_eq!(lookup(0x91).unwrap().to_string(), "SUB C");
        assert_eq!(lookup(0x9A).unwrap().to_string(), "SBC A,D");
        assert_eq!(lookup(0xA3).unwrap().to_string(), "AND E");
        assert_eq!(lookup(0xAC).unwrap().to_string(), "XOR H");
        assert_eq!(lookup(0xB5).unwrap().to_string(), "OR L");
        assert_eq!(lookup(0xBE).unwrap().to_string(), "CP (HL)");
        assert_eq!(lookup(0xC6).unwrap().to_string(), "ADD A,d8");
        assert_eq!(lookup(0xFE).unwrap().to_string(), "CP d8");
        assert_eq!(lookup(0xFE).unwrap().mnemonic(), "CP");
        assert_eq!(lookup(0x41).unwrap().to_string(), "LD B,C");
        assert_eq!(lookup(0x77).unwrap().to_string(), "LD (HL),A");
        assert_eq!(lookup(0x7E).unwrap().to_string(), "LD A,(HL)");
        assert_eq!(lookup(0x36).unwrap().to_string(), "LD (HL),d8");
        assert_eq!(lookup(0x3E).unwrap().mnemonic(), "LD");
    }

    #[test]
    fn memory_and_immediate_forms_cost_extra() {
        assert_eq!(lookup(0x86).unwrap().cycles, 8);
        assert_eq!(lookup(0xD6).unwrap().cycles, 8);
        assert_eq!(lookup(0xD6).unwrap().length, 2);
        assert_eq!(lookup(0x87).unwrap().cycles, 4);
        assert_eq!(lookup(0x40).unwrap().cycles, 4);
        assert_eq!(lookup(0x70).unwrap().cycles, 8);
        assert_eq!(lookup(0x06).unwrap().cycles, 8);
        assert_eq!(lookup(0x36).unwrap().cycles, 12);
    }
}

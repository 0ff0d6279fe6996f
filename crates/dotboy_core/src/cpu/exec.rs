use crate::error::Result;
use crate::memory::Bus;
use crate::opcodes::{OpcodeInfo, Operation};

use super::Cpu;

impl Cpu {
    /// Execute a decoded instruction and return the number of T-cycles.
    ///
    /// PC already points past the opcode byte. Operands that live in the
    /// instruction stream are fetched here. Instructions that write memory
    /// must do so as their last fallible action, so a failed step never
    /// leaves a partial store behind.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, info: &OpcodeInfo) -> Result<u32> {
        match info.operation {
            // 0x00: NOP
            Operation::Nop => {}

            // 0x80-0xBF, 0xC6/0xCE/.../0xFE: ALU ops on A
            Operation::Alu(op, src) => {
                let value = self.read_operand(bus, src)?;
                self.alu(op, value);
            }

            // 0x40-0x7F (except 0x76), 0x06/0x0E/.../0x3E: 8-bit loads
            Operation::Ld(dst, src) => {
                let value = self.read_operand(bus, src)?;
                self.write_reg8(bus, dst, value)?;
            }
        }

        Ok(info.cycles)
    }
}

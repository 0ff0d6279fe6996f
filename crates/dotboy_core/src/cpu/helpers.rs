use crate::error::Result;
use crate::memory::Bus;
use crate::opcodes::Operand;
use crate::regs::Reg8;

use super::Cpu;

impl Cpu {
    /// Read an 8-bit register, or the byte at HL for `Reg8::HlInd`.
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) -> Result<u8> {
        Ok(match reg {
            Reg8::B => self.regs.b(),
            Reg8::C => self.regs.c(),
            Reg8::D => self.regs.d(),
            Reg8::E => self.regs.e(),
            Reg8::H => self.regs.h(),
            Reg8::L => self.regs.l(),
            Reg8::HlInd => bus.read8(self.regs.hl())?,
            Reg8::A => self.regs.a(),
        })
    }

    /// Write an 8-bit register, or the byte at HL for `Reg8::HlInd`.
    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8, value: u8) -> Result<()> {
        match reg {
            Reg8::B => self.regs.set_b(value),
            Reg8::C => self.regs.set_c(value),
            Reg8::D => self.regs.set_d(value),
            Reg8::E => self.regs.set_e(value),
            Reg8::H => self.regs.set_h(value),
            Reg8::L => self.regs.set_l(value),
            Reg8::HlInd => bus.write8(self.regs.hl(), value)?,
            Reg8::A => self.regs.set_a(value),
        }
        Ok(())
    }

    #[inline]
    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<u8> {
        match operand {
            Operand::Reg(reg) => self.read_reg8(bus, reg),
            Operand::Imm8 => self.fetch8(bus),
        }
    }

    /// Read the byte at PC and advance PC.
    ///
    /// PC only moves once the read succeeded.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> Result<u8> {
        let value = bus.read8(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }
}

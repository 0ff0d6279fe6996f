use crate::flags::{Flag, Flags};
use crate::regs::Registers;

use super::Cpu;

impl Cpu {
    #[inline]
    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    /// Set one flag and write the result through to F.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.flags.set(flag, value);
        self.sync_flags_to_register();
    }

    /// Replace all four flags and write them through to F.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
        self.sync_flags_to_register();
    }

    /// Pack the boolean flags into the low half of AF. A is untouched.
    #[inline]
    pub fn sync_flags_to_register(&mut self) {
        self.regs.set_f(self.flags.to_byte());
    }

    /// Reload the boolean flags from the low half of AF.
    #[inline]
    pub fn sync_flags_from_register(&mut self) {
        self.flags = Flags::from_byte(self.regs.f());
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.regs.a()
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.regs.set_a(value);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        self.regs.f()
    }

    /// Write F directly. The low nibble is forced to zero and the boolean
    /// view is refreshed.
    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.regs.set_f(value);
        self.sync_flags_from_register();
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.regs.b()
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.regs.set_b(value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        self.regs.c()
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.regs.set_c(value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        self.regs.d()
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.regs.set_d(value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        self.regs.e()
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.regs.set_e(value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        self.regs.h()
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.regs.set_h(value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.regs.l()
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.regs.set_l(value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.regs.af()
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.regs.set_af(value);
        self.sync_flags_from_register();
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.regs.bc()
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.regs.set_bc(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.regs.de()
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.regs.set_de(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.regs.hl()
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.regs.set_hl(value);
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[inline]
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    #[inline]
    pub fn set_sp(&mut self, value: u16) {
        self.regs.sp = value;
    }

    /// Total T-cycles executed since construction or the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub(super) fn add_cycles(&mut self, cycles: u32) {
        self.cycles += u64::from(cycles);
    }
}

use typed_builder::TypedBuilder;

use crate::flags::Flags;
use crate::regs::Registers;

use super::Cpu;

/// Initial register values for a new CPU.
///
/// Every field defaults to zero, so callers only name what they need:
///
/// ```
/// use dotboy_core::{Cpu, CpuInit};
///
/// let cpu = Cpu::with_init(CpuInit::builder().pc(0x0100).bc(0x2000).build());
/// assert_eq!(cpu.pc(), 0x0100);
/// assert_eq!(cpu.b(), 0x20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct CpuInit {
    #[builder(default)]
    pub pc: u16,
    #[builder(default)]
    pub sp: u16,
    /// The low nibble of F is dropped.
    #[builder(default)]
    pub af: u16,
    #[builder(default)]
    pub bc: u16,
    #[builder(default)]
    pub de: u16,
    #[builder(default)]
    pub hl: u16,
}

impl CpuInit {
    /// Register state the DMG boot ROM leaves behind when it hands control
    /// to cartridge code at 0x0100 (per Pan Docs).
    pub const DMG_BOOT: CpuInit = CpuInit {
        pc: 0x0100,
        sp: 0xFFFE,
        // Z, N, H, C = 1,0,1,1
        af: 0x01B0,
        bc: 0x0013,
        de: 0x00D8,
        hl: 0x014D,
    };

    fn registers(&self) -> Registers {
        let mut regs = Registers::default();
        regs.set_af(self.af);
        regs.set_bc(self.bc);
        regs.set_de(self.de);
        regs.set_hl(self.hl);
        regs.sp = self.sp;
        regs.pc = self.pc;
        regs
    }
}

impl Cpu {
    /// CPU with every register and flag cleared and PC at 0x0000.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_init(init: CpuInit) -> Self {
        let mut cpu = Self::new();
        cpu.apply_init(init);
        cpu
    }

    /// Clear all registers, flags, the cycle counter and any fault.
    pub fn reset(&mut self) {
        self.reset_to(CpuInit::default());
    }

    /// Reset, then load `init` into the register file.
    pub fn reset_to(&mut self, init: CpuInit) {
        *self = Self::default();
        self.apply_init(init);
        log::debug!("CPU reset: PC=0x{:04X} SP=0x{:04X}", init.pc, init.sp);
    }

    fn apply_init(&mut self, init: CpuInit) {
        self.regs = init.registers();
        self.flags = Flags::default();
        self.sync_flags_from_register();
    }
}

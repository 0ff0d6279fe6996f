use crate::error::{CpuError, Result};
use crate::memory::Bus;
use crate::opcodes;

use super::Cpu;

/// Outcome of [`Cpu::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions that completed.
    pub steps: usize,
    /// T-cycles spent by those instructions.
    pub cycles: u64,
    /// The error that stopped the run, if the budget was not exhausted.
    pub error: Option<CpuError>,
}

impl RunSummary {
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// A failed step is atomic: registers and flags are rolled back to
    /// their values before the fetch (PC included), the CPU becomes
    /// faulted, and every later call returns the same error until
    /// [`Cpu::reset`] or [`Cpu::clear_fault`].
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        let saved_regs = self.regs;
        let saved_flags = self.flags;

        match self.fetch_and_execute(bus) {
            Ok(cycles) => {
                self.add_cycles(cycles);
                Ok(cycles)
            }
            Err(err) => {
                self.regs = saved_regs;
                self.flags = saved_flags;
                self.fault = Some(err);
                log::error!(
                    "CPU faulted: {err} (PC=0x{pc:04X} SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    err = err,
                    pc = self.regs.pc,
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                Err(err)
            }
        }
    }

    /// Step until `max_steps` instructions have run or one fails.
    pub fn run<B: Bus>(&mut self, bus: &mut B, max_steps: usize) -> RunSummary {
        let mut summary = RunSummary::default();
        while summary.steps < max_steps {
            match self.step(bus) {
                Ok(cycles) => {
                    summary.steps += 1;
                    summary.cycles += u64::from(cycles);
                }
                Err(err) => {
                    summary.error = Some(err);
                    break;
                }
            }
        }
        summary
    }

    /// The error that stopped this CPU, if any.
    #[inline]
    pub fn fault(&self) -> Option<CpuError> {
        self.fault
    }

    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Allow stepping again after a fault without touching registers.
    ///
    /// Stepping resumes at the faulting address, so this is only useful
    /// after the caller changed PC or the opcode table grew.
    pub fn clear_fault(&mut self) {
        self.fault = None;
    }

    fn fetch_and_execute<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        let addr = self.regs.pc;
        let opcode = self.fetch8(bus)?;
        let info = opcodes::lookup(opcode)
            .ok_or(CpuError::UnimplementedOpcode { opcode, addr })?;
        log::trace!("0x{addr:04X}: {info}");
        self.exec_opcode(bus, info)
    }
}

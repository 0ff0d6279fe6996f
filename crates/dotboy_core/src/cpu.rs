mod access;
mod alu;
mod exec;
mod helpers;
mod init;
mod step;


pub use init::CpuInit;
pub use step::RunSummary;

use crate::error::CpuError;
use crate::flags::Flags;
use crate::regs::Registers;

/// SM83-style CPU core.
///
/// Holds the register file and the boolean flag view. Memory lives outside
/// the CPU and is passed to each `step` through the [`Bus`](crate::Bus)
/// trait, so one CPU type can drive a flat test memory or a full machine
/// bus.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    pub(crate) regs: Registers,
    /// Boolean view of F. Instruction logic works on this and then
    /// synchronizes it into AF.
    pub(crate) flags: Flags,
    /// Total T-cycles executed since construction or the last reset.
    cycles: u64,
    /// Set when an instruction fails. A faulted CPU refuses to step until
    /// it is reset.
    fault: Option<CpuError>,
}

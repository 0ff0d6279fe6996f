pub mod cpu;
pub mod error;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod regs;

pub use cpu::{Cpu, CpuInit, RunSummary};
pub use error::{CpuError, Result};
pub use flags::{Flag, FlagBits, Flags};
pub use memory::{Bus, Memory};
pub use opcodes::{lookup, AluOp, OpcodeInfo, Operand, Operation, OPCODE_TABLE};
pub use regs::{Reg8, Registers};

/// Size of the flat address space reachable through a 16-bit address.
pub const ADDRESS_SPACE: usize = 0x10000;

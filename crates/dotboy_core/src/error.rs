use thiserror::Error;

pub type Result<T> = std::result::Result<T, CpuError>;

/// Terminal conditions raised by the CPU core.
///
/// None of these are recovered internally: a failed `Cpu::step` leaves the
/// CPU faulted until it is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The fetched byte has no entry in the opcode table.
    ///
    /// `addr` is the address the opcode was fetched from.
    #[error("unimplemented opcode 0x{opcode:02X} at 0x{addr:04X}")]
    UnimplementedOpcode { opcode: u8, addr: u16 },

    /// A bus access landed outside the backing store.
    #[error("address 0x{addr:04X} is outside a {size}-byte memory")]
    OutOfRangeAddress { addr: u16, size: usize },

    /// A program image does not fit in memory at the requested offset.
    #[error("image of {len} bytes at 0x{offset:04X} does not fit in a {size}-byte memory")]
    ImageTooLarge { offset: u16, len: usize, size: usize },
}

use std::fmt;

use crate::error::{CpuError, Result};
use crate::ADDRESS_SPACE;

/// Abstraction over the memory bus seen by the CPU.
///
/// Accesses are fallible: a bus that cannot serve an address reports
/// `CpuError::OutOfRangeAddress` instead of wrapping or returning garbage.
/// Machines with memory-mapped IO or banking implement this trait
/// themselves; `Memory` is the plain flat store.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> Result<u8>;
    fn write8(&mut self, addr: u16, value: u8) -> Result<()>;
}

/// Flat byte-addressable store.
///
/// The size is fixed at construction. Every access is bounds-checked.
#[derive(Clone)]
pub struct Memory {
    ram: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory").field("size", &self.ram.len()).finish()
    }
}

impl Memory {
    /// Full 64 KiB address space, zero-filled.
    pub fn new() -> Self {
        Self::with_size(ADDRESS_SPACE)
    }

    /// Zero-filled store of `size` bytes.
    ///
    /// Sizes above the 16-bit address space are clamped to it, since no
    /// address could reach the excess.
    pub fn with_size(size: usize) -> Self {
        let size = size.min(ADDRESS_SPACE);
        Self {
            ram: vec![0; size].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ram.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ram.is_empty()
    }

    /// Copy a program image into memory starting at `offset`.
    pub fn load(&mut self, offset: u16, image: &[u8]) -> Result<()> {
        let start = offset as usize;
        let end = start + image.len();
        if end > self.ram.len() {
            return Err(CpuError::ImageTooLarge {
                offset,
                len: image.len(),
                size: self.ram.len(),
            });
        }
        self.ram[start..end].copy_from_slice(image);
        log::debug!(
            "loaded {} bytes at 0x{:04X}..0x{:04X}",
            image.len(),
            start,
            end
        );
        Ok(())
    }

    /// Raw view of the backing store.
    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }

    #[inline]
    fn index(&self, addr: u16) -> Result<usize> {
        let index = addr as usize;
        if index < self.ram.len() {
            Ok(index)
        } else {
            Err(CpuError::OutOfRangeAddress {
                addr,
                size: self.ram.len(),
            })
        }
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&mut self, addr: u16) -> Result<u8> {
        let index = self.index(addr)?;
        Ok(self.ram[index])
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) -> Result<()> {
        let index = self.index(addr)?;
        self.ram[index] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_memory_covers_every_address() {
        let mut mem = Memory::new();
        assert_eq!(mem.len(), 0x10000);
        mem.write8(0xFFFF, 0xAB).unwrap();
        assert_eq!(mem.read8(0xFFFF).unwrap(), 0xAB);
        mem.write8(0x0000, 0xCD).unwrap();
        assert_eq!(mem.read8(0x0000).unwrap(), 0xCD);
    }

    #[test]
    fn access_past_the_end_is_rejected() {
        let mut mem = Memory::with_size(0x8000);
        assert_eq!(
            mem.read8(0x8000),
            Err(CpuError::OutOfRangeAddress {
                addr: 0x8000,
                size: 0x8000
            })
        );
        assert_eq!(
            mem.write8(0xFFFF, 1),
            Err(CpuError::OutOfRangeAddress {
                addr: 0xFFFF,
                size: 0x8000
            })
        );
        // The failed write must not have landed anywhere.
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn load_places_image_at_offset() {
        let mut mem = Memory::with_size(0x200);
        mem.load(0x100, &[0x80, 0x00, 0xC6]).unwrap();
        assert_eq!(&mem.as_slice()[0x100..0x103], &[0x80, 0x00, 0xC6]);
        assert_eq!(mem.read8(0x0FF).unwrap(), 0);
    }

    #[test]
    fn load_rejects_image_that_overflows() {
        let mut mem = Memory::with_size(0x10);
        assert_eq!(
            mem.load(0x0E, &[1, 2, 3]),
            Err(CpuError::ImageTooLarge {
                offset: 0x0E,
                len: 3,
                size: 0x10
            })
        );
        assert!(mem.as_slice().iter().all(|&b| b == 0));

        let mut full = Memory::new();
        assert!(full.load(0xFFFF, &[1, 2]).is_err());
        assert!(full.load(0xFFFF, &[1]).is_ok());
    }

    #[test]
    fn oversized_request_is_clamped_to_address_space() {
        assert_eq!(Memory::with_size(0x20000).len(), 0x10000);
    }
}

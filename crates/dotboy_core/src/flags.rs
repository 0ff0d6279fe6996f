//! Condition flags and the arithmetic policies that produce them.
//!
//! Flags exist in two forms: the boolean [`Flags`] struct used by
//! instruction logic, and the packed byte kept in the low half of AF.
//! `Cpu::sync_flags_to_register` and `Cpu::sync_flags_from_register`
//! move state between them.

use bitflags::bitflags;

bitflags! {
    /// Packed layout of the F register. Bits 0-3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FlagBits: u8 {
        const Z = 0b1000_0000;
        const N = 0b0100_0000;
        const H = 0b0010_0000;
        const C = 0b0001_0000;
    }
}

/// Flag selector used by the public accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Zero
    Z,
    /// Subtract
    N,
    /// Half carry (carry out of bit 3)
    H,
    /// Carry (carry out of bit 7)
    C,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,
    pub n: bool,
    pub h: bool,
    pub c: bool,
}

impl Flags {
    #[inline]
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Z => self.z,
            Flag::N => self.n,
            Flag::H => self.h,
            Flag::C => self.c,
        }
    }

    #[inline]
    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Z => self.z = value,
            Flag::N => self.n = value,
            Flag::H => self.h = value,
            Flag::C => self.c = value,
        }
    }

    pub fn to_byte(self) -> u8 {
        let mut bits = FlagBits::empty();
        bits.set(FlagBits::Z, self.z);
        bits.set(FlagBits::N, self.n);
        bits.set(FlagBits::H, self.h);
        bits.set(FlagBits::C, self.c);
        bits.bits()
    }

    /// Unpack an F register value. The unused low nibble is ignored.
    pub fn from_byte(value: u8) -> Self {
        let bits = FlagBits::from_bits_truncate(value);
        Self {
            z: bits.contains(FlagBits::Z),
            n: bits.contains(FlagBits::N),
            h: bits.contains(FlagBits::H),
            c: bits.contains(FlagBits::C),
        }
    }
}

/// 8-bit addition with optional carry-in (ADD/ADC).
///
/// - Z: low 8 bits of the result are zero
/// - N: cleared
/// - H: carry out of bit 3
/// - C: carry out of bit 7
pub fn add8(dst: u8, src: u8, carry_in: bool) -> (u8, Flags) {
    let carry = carry_in as u16;
    let half = (dst & 0x0F) as u16 + (src & 0x0F) as u16 + carry;
    let full = dst as u16 + src as u16 + carry;
    let result = (full & 0xFF) as u8;
    let flags = Flags {
        z: result == 0,
        n: false,
        h: half > 0x0F,
        c: full > 0xFF,
    };
    (result, flags)
}

/// 8-bit subtraction with optional borrow-in (SUB/SBC/CP).
///
/// Mirrors [`add8`]: N is set, and H/C report a borrow from bit 4 and
/// bit 8 respectively.
pub fn sub8(dst: u8, src: u8, borrow_in: bool) -> (u8, Flags) {
    let borrow = borrow_in as u16;
    let result = dst.wrapping_sub(src).wrapping_sub(borrow as u8);
    let flags = Flags {
        z: result == 0,
        n: true,
        h: ((dst & 0x0F) as u16) < (src & 0x0F) as u16 + borrow,
        c: (dst as u16) < src as u16 + borrow,
    };
    (result, flags)
}

/// Bitwise AND: Z from the result, H set, N and C cleared.
pub fn and8(dst: u8, src: u8) -> (u8, Flags) {
    let result = dst & src;
    let flags = Flags {
        z: result == 0,
        h: true,
        ..Flags::default()
    };
    (result, flags)
}

/// Bitwise OR: Z from the result, everything else cleared.
pub fn or8(dst: u8, src: u8) -> (u8, Flags) {
    let result = dst | src;
    let flags = Flags {
        z: result == 0,
        ..Flags::default()
    };
    (result, flags)
}

/// Bitwise XOR: Z from the result, everything else cleared.
pub fn xor8(dst: u8, src: u8) -> (u8, Flags) {
    let result = dst ^ src;
    let flags = Flags {
        z: result == 0,
        ..Flags::default()
    };
    (result, flags)
}

//! Property-based tests for register aliasing and flag arithmetic.
//!
//! These run the real fetch-decode-execute path over the whole 8-bit
//! operand domain rather than calling the flag helpers directly.

use dotboy_core::{Cpu, CpuError, CpuInit, Flags, Memory};
use proptest::prelude::*;

fn cpu_with_program(program: &[u8]) -> (Cpu, Memory) {
    let mut memory = Memory::new();
    memory.load(0x0000, program).unwrap();
    (Cpu::new(), memory)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn add_a_b_matches_reference(a in any::<u8>(), b in any::<u8>()) {
        let (mut cpu, mut memory) = cpu_with_program(&[0x80]);
        cpu.set_a(a);
        cpu.set_b(b);

        cpu.step(&mut memory).unwrap();

        let sum = a as u16 + b as u16;
        let result = (sum & 0xFF) as u8;
        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(
            cpu.flags(),
            Flags {
                z: result == 0,
                n: false,
                h: (a & 0x0F) + (b & 0x0F) > 0x0F,
                c: sum > 0xFF,
            }
        );
        prop_assert_eq!(cpu.f(), cpu.flags().to_byte());
        prop_assert_eq!(cpu.pc(), 1);
        prop_assert_eq!(cpu.b(), b);
    }

    #[test]
    fn sub_a_b_matches_reference(a in any::<u8>(), b in any::<u8>(), carry in any::<bool>()) {
        // SBC A,B
        let (mut cpu, mut memory) = cpu_with_program(&[0x98]);
        cpu.set_a(a);
        cpu.set_b(b);
        cpu.set_flags(Flags { c: carry, ..Flags::default() });

        cpu.step(&mut memory).unwrap();

        let borrow = carry as i16;
        let diff = a as i16 - b as i16 - borrow;
        let result = diff as u8;
        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(
            cpu.flags(),
            Flags {
                z: result == 0,
                n: true,
                h: ((a & 0x0F) as i16 - (b & 0x0F) as i16 - borrow) < 0,
                c: diff < 0,
            }
        );
    }

    #[test]
    fn cp_never_changes_a(a in any::<u8>(), value in any::<u8>()) {
        let (mut cpu, mut memory) = cpu_with_program(&[0xFE, value]);
        cpu.set_a(a);

        cpu.step(&mut memory).unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag(dotboy_core::Flag::Z), a == value);
        prop_assert_eq!(cpu.flag(dotboy_core::Flag::C), a < value);
        prop_assert_eq!(cpu.pc(), 2);
    }

    #[test]
    fn high_half_setters_preserve_low_half(
        pair in any::<u16>(),
        value in any::<u8>(),
    ) {
        let mut cpu = Cpu::with_init(CpuInit::builder().bc(pair).de(pair).hl(pair).build());
        cpu.set_b(value);
        cpu.set_d(value);
        cpu.set_h(value);
        let expected = (value as u16) << 8 | (pair & 0x00FF);
        prop_assert_eq!(cpu.bc(), expected);
        prop_assert_eq!(cpu.de(), expected);
        prop_assert_eq!(cpu.hl(), expected);
        prop_assert_eq!(cpu.b(), value);
        prop_assert_eq!(cpu.c(), pair as u8);
    }

    #[test]
    fn low_half_setters_preserve_high_half(
        pair in any::<u16>(),
        value in any::<u8>(),
    ) {
        let mut cpu = Cpu::with_init(CpuInit::builder().bc(pair).de(pair).hl(pair).build());
        cpu.set_c(value);
        cpu.set_e(value);
        cpu.set_l(value);
        let expected = (pair & 0xFF00) | value as u16;
        prop_assert_eq!(cpu.bc(), expected);
        prop_assert_eq!(cpu.de(), expected);
        prop_assert_eq!(cpu.hl(), expected);
        prop_assert_eq!(cpu.l(), value);
        prop_assert_eq!(cpu.h(), (pair >> 8) as u8);
    }

    #[test]
    fn accumulator_and_flags_do_not_alias(a in any::<u8>(), f in any::<u8>()) {
        let mut cpu = Cpu::new();
        cpu.set_f(f);
        let f_before = cpu.f();
        cpu.set_a(a);
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.f(), f_before);

        cpu.set_f(f.rotate_left(4));
        prop_assert_eq!(cpu.a(), a);
    }

    #[test]
    fn flag_round_trip(z in any::<bool>(), n in any::<bool>(), h in any::<bool>(), c in any::<bool>()) {
        let original = Flags { z, n, h, c };
        let mut cpu = Cpu::new();
        cpu.set_flags(original);
        prop_assert_eq!(cpu.f() & 0x0F, 0);

        cpu.sync_flags_from_register();
        prop_assert_eq!(cpu.flags(), original);
    }

    #[test]
    fn bytes_without_descriptor_fail_without_side_effects(
        opcode in any::<u8>(),
        pc in 0u16..0xFF00,
        af in any::<u16>(),
    ) {
        prop_assume!(dotboy_core::lookup(opcode).is_none());
        let mut memory = Memory::new();
        memory.load(pc, &[opcode]).unwrap();
        let mut cpu = Cpu::with_init(CpuInit::builder().pc(pc).af(af).build());
        let before = *cpu.regs();

        let err = cpu.step(&mut memory).unwrap_err();

        prop_assert_eq!(err, CpuError::UnimplementedOpcode { opcode, addr: pc });
        prop_assert_eq!(*cpu.regs(), before);
    }
}

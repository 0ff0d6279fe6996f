use crate::flags::{self, Flags};
use crate::opcodes::AluOp;

use super::Cpu;

impl Cpu {
    /// Apply an 8-bit ALU operation to A.
    ///
    /// The flag policy for each operation lives in [`crate::flags`]; this
    /// only routes operands and results. CP computes `A - value` for the
    /// flags and discards the difference.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a();
        let carry = self.flags.c;

        let (result, flags) = match op {
            AluOp::Add => flags::add8(a, value, false),
            AluOp::Adc => flags::add8(a, value, carry),
            AluOp::Sub => flags::sub8(a, value, false),
            AluOp::Sbc => flags::sub8(a, value, carry),
            AluOp::And => flags::and8(a, value),
            AluOp::Xor => flags::xor8(a, value),
            AluOp::Or => flags::or8(a, value),
            AluOp::Cp => {
                let (_, flags) = flags::sub8(a, value, false);
                (a, flags)
            }
        };

        self.regs.set_a(result);
        self.commit_flags(flags);
    }

    #[inline]
    fn commit_flags(&mut self, flags: Flags) {
        self.flags = flags;
        self.sync_flags_to_register();
    }
}

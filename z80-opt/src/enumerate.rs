//! Sequence enumeration over a configured opcode alphabet, per spec §4.5.
//!
//! The walk is opcode-major, immediate-minor: for a fixed prefix, every
//! opcode in the alphabet is tried before any of its immediate values are
//! varied, and every immediate value is tried before the next opcode. A
//! single buffer is reused across the whole walk; only the caller's
//! `callback` is responsible for copying a sequence out if it needs to
//! outlive the call.

use std::ops::ControlFlow;

use strum::IntoEnumIterator;
use z80_isa::{Instruction, Opcode};

/// Walks every instruction sequence of exactly `length` drawn from
/// `alphabet`, calling `callback` on each. `callback` returning
/// [`ControlFlow::Break`] stops the walk promptly; the unit-valued Break
/// payload propagates out of `enumerate` itself.
pub fn enumerate(
    alphabet: &[Opcode],
    length: usize,
    mut callback: impl FnMut(&[Instruction]) -> ControlFlow<()>,
) -> ControlFlow<()> {
    let mut buf = vec![Instruction::bare(Opcode::NOP); length];
    enumerate_at(alphabet, &mut buf, 0, &mut callback)
}

fn enumerate_at(
    alphabet: &[Opcode],
    buf: &mut [Instruction],
    pos: usize,
    callback: &mut impl FnMut(&[Instruction]) -> ControlFlow<()>,
) -> ControlFlow<()> {
    if pos == buf.len() {
        return callback(buf);
    }
    for &op in alphabet {
        let meta = op.meta();
        if meta.has_imm16 {
            for imm in 0..=u16::MAX {
                buf[pos] = Instruction::with_imm16(op, imm);
                if enumerate_at(alphabet, buf, pos + 1, callback).is_break() {
                    return ControlFlow::Break(());
                }
                if imm == u16::MAX {
                    break;
                }
            }
        } else if meta.has_immediate {
            for imm in 0..=u8::MAX {
                buf[pos] = Instruction::with_imm8(op, imm);
                if enumerate_at(alphabet, buf, pos + 1, callback).is_break() {
                    return ControlFlow::Break(());
                }
                if imm == u8::MAX {
                    break;
                }
            }
        } else {
            buf[pos] = Instruction::bare(op);
            if enumerate_at(alphabet, buf, pos + 1, callback).is_break() {
                return ControlFlow::Break(());
            }
        }
    }
    ControlFlow::Continue(())
}

/// Every instruction the full `Opcode` set contains, immediate operands
/// defaulted to zero — the one-shot upload list an external backend (e.g. a
/// GPU driver) needs, per spec §6.
#[must_use]
pub fn enumerate_firstop() -> Vec<Instruction> {
    Opcode::iter().map(Instruction::bare).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerate_firstop_covers_every_opcode() {
        let ops: Vec<Opcode> = Opcode::iter().collect();
        assert_eq!(enumerate_firstop().len(), ops.len());
    }

    #[test]
    fn length_one_yields_one_sequence_per_no_immediate_opcode() {
        let alphabet = [Opcode::NOP, Opcode::CPL];
        let mut count = 0;
        let flow = enumerate(&alphabet, 1, |_seq| {
            count += 1;
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        assert_eq!(count, 2);
    }

    #[test]
    fn length_one_with_an_8_bit_immediate_opcode_yields_256_sequences() {
        let alphabet = [Opcode::LD_A_N];
        let mut count = 0;
        enumerate(&alphabet, 1, |_seq| {
            count += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(count, 256);
    }

    #[test]
    fn stop_request_halts_the_walk_promptly() {
        let alphabet = [Opcode::NOP, Opcode::CPL, Opcode::SCF];
        let mut count = 0;
        let flow = enumerate(&alphabet, 2, |_seq| {
            count += 1;
            if count == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(count, 3);
    }

    #[test]
    fn walk_order_is_opcode_major_immediate_minor() {
        let alphabet = [Opcode::NOP, Opcode::CPL];
        let mut seen = Vec::new();
        enumerate(&alphabet, 1, |seq| {
            seen.push(seq[0].opcode);
            ControlFlow::Continue(())
        });
        assert_eq!(seen, vec![Opcode::NOP, Opcode::CPL]);
    }
}

//! The fingerprint oracle: [`quick_check`] and [`mid_check`], the first two
//! tiers of the three-tier equivalence pipeline from spec §4.3.
//!
//! Both are one-sided: `true` means "indistinguishable on these seeds",
//! which may be a false positive on candidates the reduced seed set happens
//! to agree on; `false` is always a true negative. Only
//! [`crate::exhaustive::exhaustive_check`] can assert equivalence.
//!
//! No heap allocation anywhere in this module: fingerprints are fixed-size
//! byte arrays sized at compile time from the seed counts.

use z80_isa::{execute_one, Instruction, Z80State};

use crate::seeds::{MID_SEEDS, QC_SEEDS};

/// Observable bytes contributed per seed: the 10 always-present bytes
/// `{A,F,B,C,D,E,H,L,SP_hi,SP_lo}`, plus `M` when `mem-ops` widens the
/// comparable state to 11 bytes.
#[cfg(feature = "mem-ops")]
pub const SEED_WIDTH: usize = 11;
#[cfg(not(feature = "mem-ops"))]
pub const SEED_WIDTH: usize = 10;

/// Byte width of a QuickCheck fingerprint (8 seeds).
pub const QC_FP_LEN: usize = 8 * SEED_WIDTH;

/// Byte width of a MidCheck fingerprint (24 seeds).
pub const MID_FP_LEN: usize = 24 * SEED_WIDTH;

/// Offset of the `F` byte within one seed's window; the only byte a
/// dead-flag mask ever touches.
const F_OFFSET: usize = 1;

/// Runs `seq` from `seed` to completion, cloning the seed so the caller's
/// copy is untouched. Shared with [`crate::exhaustive`], the oracle's third
/// tier, which needs the same "run from a given state" primitive over an
/// input space wider than the fixed seed tables.
pub(crate) fn run(seq: &[Instruction], seed: &Z80State) -> Z80State {
    let mut state = *seed;
    for &instr in seq {
        execute_one(&mut state, instr);
    }
    state
}

/// Whether two end states agree on every observable byte, with the `F` byte
/// masked by `dead_mask` on both sides. Shared with [`crate::exhaustive`].
pub(crate) fn states_match(a: &Z80State, b: &Z80State, dead_mask: u8) -> bool {
    let (ba, bb) = (a.observable_bytes(), b.observable_bytes());
    for i in 0..10 {
        if i == F_OFFSET {
            if (ba[i] & !dead_mask) != (bb[i] & !dead_mask) {
                return false;
            }
        } else if ba[i] != bb[i] {
            return false;
        }
    }
    #[cfg(feature = "mem-ops")]
    if a.m != b.m {
        return false;
    }
    true
}

fn write_seed_window(buf: &mut [u8], offset: usize, state: &Z80State) {
    buf[offset..offset + 10].copy_from_slice(&state.observable_bytes());
    #[cfg(feature = "mem-ops")]
    {
        buf[offset + 10] = state.m;
    }
}

/// Runs `seq` from each of the 8 QC seeds and records the 10 (or 11)
/// observable bytes of each resulting state, concatenated in seed order.
#[must_use]
pub fn fingerprint_qc(seq: &[Instruction]) -> [u8; QC_FP_LEN] {
    let mut out = [0u8; QC_FP_LEN];
    for (i, seed) in QC_SEEDS.iter().enumerate() {
        write_seed_window(&mut out, i * SEED_WIDTH, &run(seq, seed));
    }
    out
}

/// As [`fingerprint_qc`], over the 24 MidCheck seeds.
#[must_use]
pub fn fingerprint_mid(seq: &[Instruction]) -> [u8; MID_FP_LEN] {
    let mut out = [0u8; MID_FP_LEN];
    for (i, seed) in MID_SEEDS.iter().enumerate() {
        write_seed_window(&mut out, i * SEED_WIDTH, &run(seq, seed));
    }
    out
}

/// Byte-for-byte comparison with the `F` byte of every seed window masked
/// by `dead_mask` on both sides before comparing.
fn fingerprints_match(a: &[u8], b: &[u8], dead_mask: u8) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).enumerate().all(|(i, (&x, &y))| {
        if i % SEED_WIDTH == F_OFFSET {
            (x & !dead_mask) == (y & !dead_mask)
        } else {
            x == y
        }
    })
}

/// Tier 1 of the oracle: compares the 80-byte (or 88-byte) QC fingerprints.
#[must_use]
pub fn quick_check(target: &[Instruction], candidate: &[Instruction], dead_mask: u8) -> bool {
    fingerprints_match(
        &fingerprint_qc(target),
        &fingerprint_qc(candidate),
        dead_mask,
    )
}

/// Tier 2 of the oracle: compares the 240-byte (or 264-byte) Mid fingerprints.
/// Targeted at `BIT`/`RES`/`SET` false positives the 8 QC seeds miss.
#[must_use]
pub fn mid_check(target: &[Instruction], candidate: &[Instruction], dead_mask: u8) -> bool {
    fingerprints_match(
        &fingerprint_mid(target),
        &fingerprint_mid(candidate),
        dead_mask,
    )
}

/// The minimal set of flag bits that actually differ between `target` and
/// `candidate` across the QC seeds, or `0` if any non-`F` byte differs on
/// any seed (a "not a flag-only difference" signal, per spec §4.4).
#[must_use]
pub fn flag_diff(target: &[Instruction], candidate: &[Instruction]) -> u8 {
    let t = fingerprint_qc(target);
    let c = fingerprint_qc(candidate);
    let mut diff = 0u8;
    for window in 0..8 {
        let base = window * SEED_WIDTH;
        for j in 0..SEED_WIDTH {
            if j == F_OFFSET {
                continue;
            }
            if t[base + j] != c[base + j] {
                return 0;
            }
        }
        diff |= t[base + F_OFFSET] ^ c[base + F_OFFSET];
    }
    diff
}

/// Number of QC seeds on which `target` and `candidate` disagree under
/// `dead_mask` — the `mismatches` term of the MCMC cost function (spec
/// §4.8). Unlike [`quick_check`], which only needs a yes/no answer, the
/// stochastic search cost needs the actual count to grade near-misses.
#[must_use]
pub fn quick_check_mismatch_count(
    target: &[Instruction],
    candidate: &[Instruction],
    dead_mask: u8,
) -> u32 {
    QC_SEEDS
        .iter()
        .filter(|seed| !states_match(&run(target, seed), &run(candidate, seed), dead_mask))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use z80_isa::Opcode;

    fn bare(op: Opcode) -> Instruction {
        Instruction::bare(op)
    }

    #[test]
    fn identical_sequences_always_agree() {
        let seq = [bare(Opcode::ADD_A_B)];
        assert!(quick_check(&seq, &seq, 0));
        assert!(mid_check(&seq, &seq, 0));
        assert_eq!(flag_diff(&seq, &seq), 0);
    }

    #[test]
    fn and_0ffh_and_and_a_agree_under_quick_check() {
        let target = [Instruction::with_imm8(Opcode::AND_A_N, 0xFF)];
        let candidate = [bare(Opcode::AND_A_A)];
        assert!(quick_check(&target, &candidate, 0));
    }

    #[test]
    fn add_a_1_and_inc_a_disagree_on_carry() {
        let target = [Instruction::with_imm8(Opcode::ADD_A_N, 1)];
        let candidate = [bare(Opcode::INC_A)];
        assert!(!quick_check(&target, &candidate, 0));
        // They diverge only on the C flag, not on any register.
        assert_ne!(flag_diff(&target, &candidate), 0);
    }

    #[test]
    fn ld_a_0_and_xor_a_are_flag_only_under_the_all_mask() {
        let target = [Instruction::with_imm8(Opcode::LD_A_N, 0)];
        let candidate = [bare(Opcode::XOR_A_A)];
        assert!(!quick_check(&target, &candidate, 0x00));
        assert!(quick_check(&target, &candidate, 0xFF));
    }

    #[test]
    fn dead_mask_ignores_only_the_f_byte() {
        // A mismatch on a non-F byte must never be hidden by any mask.
        let target = [bare(Opcode::INC_B)];
        let candidate = [bare(Opcode::NOP)];
        assert!(!quick_check(&target, &candidate, 0xFF));
    }

    #[quickcheck_macros::quickcheck]
    fn quick_check_is_reflexive_under_any_mask(dead_mask: u8) -> bool {
        let seq = [bare(Opcode::ADD_A_B), bare(Opcode::DAA)];
        quick_check(&seq, &seq, dead_mask) && mid_check(&seq, &seq, dead_mask)
    }

    #[quickcheck_macros::quickcheck]
    fn flag_diff_of_a_sequence_against_itself_is_zero(imm: u8) -> bool {
        let seq = [Instruction::with_imm8(Opcode::ADD_A_N, imm)];
        flag_diff(&seq, &seq) == 0
    }
}

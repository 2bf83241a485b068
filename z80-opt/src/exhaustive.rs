//! Tier 3 of the oracle: [`exhaustive_check`] proves or disproves
//! equivalence by sweeping every input dimension either sequence actually
//! reads, per spec §4.4.
//!
//! Unlike [`crate::fingerprint`], this tier is not allocation-free — it
//! builds a handful of small per-call value-domain vectors — but it only
//! ever runs on the few candidates that already passed QuickCheck and
//! MidCheck, so it is not the throughput-critical path §5 is about.

use z80_isa::{Instruction, RegMask, Z80State};

use crate::fingerprint::{run, states_match};

/// How thoroughly [`exhaustive_check`] actually covered the input space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Every value of every swept dimension was tried: a true proof.
    Full,
    /// At least one dimension used the 32-value (or 16-value, for `SP`)
    /// reduced sweep because the full Cartesian product was infeasible.
    /// Sound for rejection; only statistically strong for confirmation.
    ReducedSweep,
}

/// The result of one [`exhaustive_check`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveResult {
    /// Whether every state pair evaluated agreed under the dead-flag mask.
    pub equivalent: bool,
    /// How completely the input space was covered.
    pub confidence: Confidence,
    /// Number of state-pairs actually evaluated, for throughput reporting.
    pub evaluations: u64,
}

const REDUCED_BYTE_VALUES: [u8; 32] = [
    0x00, 0x01, 0x02, 0x0F, 0x10, 0x1F, 0x20, 0x3F, 0x40, 0x55, 0x7E, 0x7F, 0x80, 0x81, 0xAA, 0xBF,
    0xC0, 0xD5, 0xE0, 0xEF, 0xF0, 0xF7, 0xFE, 0xFF, 0x03, 0x07, 0x11, 0x33, 0x77, 0xBB, 0xDD, 0xEE,
];

const REDUCED_SP_VALUES: [u16; 16] = [
    0x0000, 0x0001, 0x00FF, 0x0100, 0x7FFE, 0x7FFF, 0x8000, 0x8001, 0xFFFE, 0xFFFF, 0x1234, 0x5678,
    0xABCD, 0xDEAD, 0xBEEF, 0xCAFE,
];

type Setter = fn(&mut Z80State, u16);

fn reads_union(seq: &[Instruction]) -> RegMask {
    seq.iter()
        .fold(RegMask::empty(), |acc, i| acc | i.opcode.meta().reads)
}

fn full_byte_domain() -> Vec<u16> {
    (0..=u8::MAX as u16).collect()
}

fn reduced_byte_domain() -> Vec<u16> {
    REDUCED_BYTE_VALUES.iter().map(|&v| u16::from(v)).collect()
}

/// Visits every combination of `axes`' value domains, mutating `state` in
/// place (no per-combination allocation), calling `f` at each leaf. Stops
/// and returns `false` the first time `f` does.
fn for_each_combo(
    axes: &[(Setter, Vec<u16>)],
    state: &mut Z80State,
    idx: usize,
    f: &mut impl FnMut(&Z80State) -> bool,
) -> bool {
    if idx == axes.len() {
        return f(state);
    }
    let (setter, values) = &axes[idx];
    for &v in values {
        setter(state, v);
        if !for_each_combo(axes, state, idx + 1, f) {
            return false;
        }
    }
    true
}

/// Proves (or disproves) that `target` and `candidate` agree, under
/// `dead_mask`, on every input state either sequence may actually observe.
///
/// Always sweeps `A` over all 256 values and the `C` flag over `{0, 1}`.
/// Beyond that, the swept dimensions are derived from the union of both
/// sequences' `reads` masks: up to two extra 8-bit registers get a full
/// 256-value sweep; three or more, or `SP` being read, switch every extra
/// dimension (including `SP`) to a 32-value (16 for `SP`) reduced sweep.
/// `M`, when read and the `mem-ops` feature is enabled, always gets the
/// 32-value reduced sweep regardless of the other dimensions' case.
#[must_use]
pub fn exhaustive_check(target: &[Instruction], candidate: &[Instruction], dead_mask: u8) -> ExhaustiveResult {
    let reads = reads_union(target) | reads_union(candidate);

    let extra_regs: [(RegMask, Setter); 6] = [
        (RegMask::B, |s, v| s.b = v as u8),
        (RegMask::C, |s, v| s.c = v as u8),
        (RegMask::D, |s, v| s.d = v as u8),
        (RegMask::E, |s, v| s.e = v as u8),
        (RegMask::H, |s, v| s.h = v as u8),
        (RegMask::L, |s, v| s.l = v as u8),
    ];
    let present_extras: Vec<Setter> = extra_regs
        .iter()
        .filter(|(mask, _)| reads.contains(*mask))
        .map(|(_, setter)| *setter)
        .collect();
    let sweep_sp = reads.contains(RegMask::SP);
    #[cfg(feature = "mem-ops")]
    let sweep_m = reads.contains(RegMask::M);
    #[cfg(not(feature = "mem-ops"))]
    let sweep_m = false;

    let reduced = present_extras.len() >= 3 || sweep_sp;
    let confidence = if reduced || sweep_m {
        Confidence::ReducedSweep
    } else {
        Confidence::Full
    };

    let mut axes: Vec<(Setter, Vec<u16>)> = present_extras
        .into_iter()
        .map(|setter| {
            let domain = if reduced {
                reduced_byte_domain()
            } else {
                full_byte_domain()
            };
            (setter, domain)
        })
        .collect();
    if sweep_sp {
        axes.push((
            |s, v| s.sp = v,
            REDUCED_SP_VALUES.to_vec(),
        ));
    }
    if sweep_m {
        axes.push((set_m, reduced_byte_domain()));
    }

    let mut evaluations = 0u64;
    let mut equivalent = true;
    'outer: for a in 0..=u8::MAX {
        for c in [0u8, 1u8] {
            let mut base = Z80State {
                a,
                f: c,
                ..Z80State::default()
            };
            let ok = for_each_combo(&axes, &mut base, 0, &mut |state| {
                evaluations += 1;
                let t = run(target, state);
                let u = run(candidate, state);
                states_match(&t, &u, dead_mask)
            });
            if !ok {
                equivalent = false;
                break 'outer;
            }
        }
    }

    ExhaustiveResult {
        equivalent,
        confidence,
        evaluations,
    }
}

#[cfg(not(feature = "mem-ops"))]
#[allow(dead_code)]
fn set_m(_state: &mut Z80State, _v: u16) {}

#[cfg(feature = "mem-ops")]
fn set_m(state: &mut Z80State, v: u16) {
    state.m = v as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use z80_isa::Opcode;

    #[test]
    fn identical_sequences_are_exhaustively_equivalent() {
        let seq = [Instruction::bare(Opcode::INC_A)];
        let result = exhaustive_check(&seq, &seq, 0);
        assert!(result.equivalent);
        assert_eq!(result.confidence, Confidence::Full);
    }

    #[test]
    fn sla_a_rr_a_is_equivalent_to_or_a() {
        let target = [Instruction::bare(Opcode::SLA_A), Instruction::bare(Opcode::RR_A)];
        let candidate = [Instruction::bare(Opcode::OR_A_A)];
        let result = exhaustive_check(&target, &candidate, 0);
        assert!(result.equivalent);
        assert_eq!(result.evaluations, 512);
    }

    #[test]
    fn add_a_1_and_inc_a_are_not_exhaustively_equivalent() {
        let target = [Instruction::with_imm8(Opcode::ADD_A_N, 1)];
        let candidate = [Instruction::bare(Opcode::INC_A)];
        assert!(!exhaustive_check(&target, &candidate, 0).equivalent);
    }

    #[test]
    fn one_extra_register_sweeps_all_256_values() {
        let target = [Instruction::bare(Opcode::ADD_A_B)];
        let candidate = [Instruction::bare(Opcode::ADD_A_B)];
        let result = exhaustive_check(&target, &candidate, 0);
        assert_eq!(result.confidence, Confidence::Full);
        assert_eq!(result.evaluations, 256 * 2 * 256);
    }

    #[test]
    fn four_extra_registers_use_the_reduced_sweep() {
        // ADC HL,BC reads H, L, B, and C: four extra registers.
        let target = [Instruction::bare(Opcode::ADC_HL_BC)];
        let candidate = [Instruction::bare(Opcode::ADC_HL_BC)];
        let result = exhaustive_check(&target, &candidate, 0);
        assert_eq!(result.confidence, Confidence::ReducedSweep);
    }
}

//! Pruning: reject provably redundant candidate sequences before they ever
//! reach the oracle, per spec §4.5.

use z80_isa::{Instruction, Opcode, RegMask};

/// Is `seq[i]` a self-load — `LD r, r` with the same register on both sides?
/// Mechanically this is any opcode whose `reads` and `writes` masks are both
/// exactly the same single register and whose mnemonic is an `LD`.
fn is_self_load(instr: Instruction) -> bool {
    let meta = instr.opcode.meta();
    meta.asm_template.starts_with("ld ") && {
        let (dst, src) = meta
            .asm_template
            .trim_start_matches("ld ")
            .split_once(',')
            .unwrap_or(("", ""));
        dst == src && meta.reads == meta.writes && meta.reads.bits().count_ones() == 1
    }
}

/// Rejects `seq` if it contains a provably redundant step, per the four
/// rules in spec §4.5. `is_target` suppresses rule 1 (bare `NOP`) when the
/// sequence under test is itself the degenerate one-instruction `NOP`
/// target — otherwise no sequence containing a `NOP` is ever reachable.
#[must_use]
pub fn should_prune(seq: &[Instruction], is_target: bool) -> bool {
    let is_bare_nop_target = is_target && seq.len() == 1 && seq[0].opcode == Opcode::NOP;
    if !is_bare_nop_target && seq.iter().any(|i| i.opcode == Opcode::NOP) {
        return true;
    }
    if seq.iter().any(|&i| is_self_load(i)) {
        return true;
    }
    for pair in seq.windows(2) {
        let (m1, m2) = (pair[0].opcode.meta(), pair[1].opcode.meta());
        let (w1, r2, w2) = (m1.writes, m2.reads, m2.writes);
        if !((w1 & w2) & !RegMask::F & !r2).is_empty() {
            return true;
        }
        let r1 = m1.reads;
        let independent = (r1 & w2).is_empty() && (r2 & w1).is_empty() && (w1 & w2).is_empty();
        if independent && !is_canonically_ordered(pair[0], pair[1]) {
            return true;
        }
    }
    false
}

/// Total order used to break permutation ties among independent adjacent
/// instructions: opcode discriminant first, then immediate operand.
fn is_canonically_ordered(a: Instruction, b: Instruction) -> bool {
    let key = |i: Instruction| (i.opcode as u16, i.imm16);
    key(a) <= key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_nop_sequence_is_pruned_unless_it_is_the_target() {
        let seq = [Instruction::bare(Opcode::NOP)];
        assert!(should_prune(&seq, false));
        assert!(!should_prune(&seq, true));
    }

    #[test]
    fn nop_inside_a_longer_sequence_is_always_pruned() {
        let seq = [
            Instruction::bare(Opcode::INC_A),
            Instruction::bare(Opcode::NOP),
        ];
        assert!(should_prune(&seq, true));
    }

    #[test]
    fn self_load_is_pruned() {
        let seq = [Instruction::bare(Opcode::LD_A_A)];
        assert!(should_prune(&seq, false));
    }

    #[test]
    fn dead_write_is_pruned() {
        // LD B,n followed by LD B,n' overwrites B without ever reading it.
        let seq = [
            Instruction::with_imm8(Opcode::LD_B_N, 1),
            Instruction::with_imm8(Opcode::LD_B_N, 2),
        ];
        assert!(should_prune(&seq, false));
    }

    #[test]
    fn live_write_is_not_pruned_as_dead() {
        // LD B,n then INC B reads B, so the write is not dead.
        let seq = [
            Instruction::with_imm8(Opcode::LD_B_N, 1),
            Instruction::bare(Opcode::INC_B),
        ];
        assert!(!should_prune(&seq, false));
    }

    #[test]
    fn independent_instructions_out_of_canonical_order_are_pruned() {
        let hi = Instruction::bare(Opcode::INC_L);
        let lo = Instruction::bare(Opcode::INC_B);
        assert!(hi.opcode as u16 > lo.opcode as u16);
        let seq = [hi, lo];
        assert!(should_prune(&seq, false));
        let seq_sorted = [lo, hi];
        assert!(!should_prune(&seq_sorted, false));
    }

    #[quickcheck_macros::quickcheck]
    fn self_load_never_changes_the_accumulator(a: u8) -> bool {
        use z80_isa::{execute_one, Z80State};
        let mut s = Z80State {
            a,
            ..Default::default()
        };
        let before = s.a;
        execute_one(&mut s, Instruction::bare(Opcode::LD_A_A));
        is_self_load(Instruction::bare(Opcode::LD_A_A)) && s.a == before
    }
}

//! End-to-end integration tests wiring the enumerator, pruner, oracle, and
//! batch search driver together, the way a real superoptimizer run would.

use z80_isa::{Instruction, Opcode};
use z80_opt::dead_flags::{DEAD_ALL, DEAD_NONE};
use z80_opt::{search_all, search_single, SearchConfig, WorkerPool};

fn peephole_alphabet() -> Vec<Opcode> {
    vec![
        Opcode::NOP,
        Opcode::AND_A_A,
        Opcode::AND_A_N,
        Opcode::OR_A_A,
        Opcode::OR_A_N,
        Opcode::XOR_A_A,
        Opcode::SLA_A,
        Opcode::RR_A,
        Opcode::INC_A,
        Opcode::LD_A_N,
    ]
}

#[test]
fn batch_search_over_a_small_alphabet_rediscovers_known_peepholes() {
    let alphabet = peephole_alphabet();
    let config = SearchConfig {
        target_alphabet: vec![Opcode::AND_A_N, Opcode::SLA_A, Opcode::RR_A],
        candidate_alphabet: alphabet,
        max_target_len: 2,
        max_candidate_len: 1,
        dead_mask: DEAD_NONE,
    };
    let pool = WorkerPool::new(Some(2)).expect("pool construction");
    let table = search_all(&config, &pool);
    drop(pool);

    let rules = table.dedup_into_vec();
    assert!(
        rules
            .iter()
            .any(|r| r.replacement == vec![Instruction::bare(Opcode::OR_A_A)]),
        "expected to rediscover SLA A; RR A -> OR A,A among {rules:?}"
    );
}

#[test]
fn relaxed_pass_only_fires_when_the_strict_pass_fails() {
    let alphabet = vec![Opcode::XOR_A_A, Opcode::NOP];
    let target = [Instruction::with_imm8(Opcode::LD_A_N, 0)];

    // Strict pass: no rule, since LD A,0 and XOR A disagree on F outside
    // the dead-flag relaxation.
    assert!(search_single(&target, &alphabet, 1, DEAD_NONE).is_none());

    // Relaxed pass with DEAD_ALL finds it and records a nonzero dead_flags.
    let rule = search_single(&target, &alphabet, 1, DEAD_ALL).expect("a relaxed rule");
    assert_eq!(rule.replacement, vec![Instruction::bare(Opcode::XOR_A_A)]);
    assert_ne!(rule.dead_flags, 0);
}

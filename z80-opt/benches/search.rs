use criterion::{black_box, criterion_group, criterion_main, Criterion};
use z80_isa::{Instruction, Opcode};
use z80_opt::dead_flags::DEAD_NONE;
use z80_opt::fingerprint::{mid_check, quick_check};
use z80_opt::{enumerate, exhaustive_check, should_prune};

fn small_alphabet() -> Vec<Opcode> {
    vec![
        Opcode::NOP,
        Opcode::AND_A_A,
        Opcode::AND_A_N,
        Opcode::OR_A_A,
        Opcode::OR_A_N,
        Opcode::SLA_A,
        Opcode::RR_A,
        Opcode::INC_A,
        Opcode::DEC_A,
        Opcode::CPL,
    ]
}

fn oracle_tiers(c: &mut Criterion) {
    let target = [Instruction::with_imm8(Opcode::AND_A_N, 0xFF)];
    let candidate = [Instruction::bare(Opcode::AND_A_A)];

    let mut group = c.benchmark_group("oracle");
    group.bench_function("quick_check", |b| {
        b.iter(|| black_box(quick_check(&target, &candidate, DEAD_NONE)));
    });
    group.bench_function("mid_check", |b| {
        b.iter(|| black_box(mid_check(&target, &candidate, DEAD_NONE)));
    });
    group.bench_function("exhaustive_check (0 extra registers)", |b| {
        b.iter(|| black_box(exhaustive_check(&target, &candidate, DEAD_NONE)));
    });
    group.finish();
}

fn enumerate_and_prune(c: &mut Criterion) {
    let alphabet = small_alphabet();
    c.bench_function("enumerate length-2 candidates, pruned", |b| {
        b.iter(|| {
            let mut kept = 0usize;
            enumerate(&alphabet, 2, |seq| {
                if !should_prune(seq, false) {
                    kept += 1;
                }
                std::ops::ControlFlow::Continue(())
            });
            black_box(kept)
        });
    });
}

criterion_group!(benches, oracle_tiers, enumerate_and_prune);
criterion_main!(benches);

//! The search driver: per-target `QuickCheck -> MidCheck -> ExhaustiveCheck`
//! (spec §4.6), and the batch driver that distributes `search_single` tasks
//! across a [`WorkerPool`] with periodic progress reporting.

use std::ops::ControlFlow;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use z80_isa::{Instruction, Opcode};

use crate::dead_flags::DEAD_NONE;
use crate::enumerate::enumerate;
use crate::exhaustive::exhaustive_check;
use crate::fingerprint::{flag_diff, mid_check, quick_check};
use crate::pool::{Progress, WorkerPool};
use crate::prune::should_prune;
use crate::rule::{bytes_of, cycles_of, Rule, RuleTable};

/// Alphabets and length bounds a batch run enumerates with, plus the mask
/// governing the relaxed-equivalence second pass. No environment variables
/// or config files per spec §6 — callers build this by hand.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Opcode alphabet target sequences are drawn from.
    pub target_alphabet: Vec<Opcode>,
    /// Opcode alphabet candidate replacements are drawn from.
    pub candidate_alphabet: Vec<Opcode>,
    /// Longest target sequence length to enumerate.
    pub max_target_len: usize,
    /// Longest candidate replacement length to try before giving up on a
    /// given target.
    pub max_candidate_len: usize,
    /// Dead-flag mask for the relaxed second pass; `DEAD_NONE` disables it.
    pub dead_mask: u8,
}

/// One gated oracle pass: enumerates non-pruned, strictly-shorter candidates
/// of increasing length, stopping at the first that survives all three
/// oracle tiers under `dead_mask`.
fn search_single_pass(
    target: &[Instruction],
    candidate_alphabet: &[Opcode],
    max_candidate_len: usize,
    dead_mask: u8,
) -> Option<Rule> {
    let target_bytes = bytes_of(target);
    let target_cycles = cycles_of(target);

    for clen in 1..=max_candidate_len {
        let mut found = None;
        enumerate(candidate_alphabet, clen, |candidate| {
            if should_prune(candidate, false) {
                return ControlFlow::Continue(());
            }
            let candidate_bytes = bytes_of(candidate);
            if candidate_bytes >= target_bytes {
                return ControlFlow::Continue(());
            }
            if !quick_check(target, candidate, dead_mask) {
                return ControlFlow::Continue(());
            }
            if !mid_check(target, candidate, dead_mask) {
                return ControlFlow::Continue(());
            }
            if !exhaustive_check(target, candidate, dead_mask).equivalent {
                return ControlFlow::Continue(());
            }
            found = Some(Rule {
                source: target.to_vec(),
                replacement: candidate.to_vec(),
                bytes_saved: target_bytes - candidate_bytes,
                cycles_saved: target_cycles - cycles_of(candidate),
                dead_flags: 0,
            });
            ControlFlow::Break(())
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Finds the shortest valid replacement for `target`, per spec §4.6.
///
/// Always tries a strict (`DEAD_NONE`) pass first. If that fails and
/// `dead_mask` is nonzero, a second pass repeats the search under the
/// relaxed oracle; a rule found this way has its `dead_flags` set to
/// [`flag_diff`]`(target, replacement)` — the minimal bit set the relaxation
/// actually needed — not to `dead_mask` itself.
#[must_use]
pub fn search_single(
    target: &[Instruction],
    candidate_alphabet: &[Opcode],
    max_candidate_len: usize,
    dead_mask: u8,
) -> Option<Rule> {
    if let Some(rule) = search_single_pass(target, candidate_alphabet, max_candidate_len, DEAD_NONE) {
        return Some(rule);
    }
    if dead_mask == DEAD_NONE {
        return None;
    }
    let rule = search_single_pass(target, candidate_alphabet, max_candidate_len, dead_mask)?;
    let dead_flags = flag_diff(target, &rule.replacement);
    Some(Rule { dead_flags, ..rule })
}

fn count_non_pruned_targets(alphabet: &[Opcode], length: usize) -> u64 {
    let mut count = 0u64;
    enumerate(alphabet, length, |seq| {
        if !should_prune(seq, true) {
            count += 1;
        }
        ControlFlow::Continue(())
    });
    count
}

/// Spawns a background thread that logs `checked`/`found`/`completed`,
/// observed throughput, and a projected ETA every `interval`, per spec
/// §4.6's batch-mode progress contract. The thread exits once `total` tasks
/// have completed.
fn spawn_progress_ticker(progress: Arc<Progress>, total: u64, interval: Duration) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let start = Instant::now();
        loop {
            std::thread::sleep(interval);
            let completed = progress.completed.load(Ordering::Relaxed);
            let checked = progress.checked.load(Ordering::Relaxed);
            let found = progress.found.load(Ordering::Relaxed);
            let elapsed = start.elapsed().as_secs_f64();
            let throughput = if elapsed > 0.0 {
                completed as f64 / elapsed
            } else {
                0.0
            };
            let eta = if completed > 0 {
                let remaining = total.saturating_sub(completed);
                Some(Duration::from_secs_f64(
                    elapsed * remaining as f64 / completed as f64,
                ))
            } else {
                None
            };
            tracing::info!(
                checked,
                found,
                completed,
                total,
                throughput_per_sec = throughput,
                eta_secs = eta.map(|d| d.as_secs_f64()),
                "search_all progress"
            );
            if completed >= total {
                break;
            }
        }
    })
}

/// Batch mode: for each target length from 2 to `config.max_target_len`,
/// enumerates every non-pruned target and distributes a `search_single`
/// task across `pool`. Returns the shared rule table; callers should join
/// on the pool (or simply drop it) to know every task has finished.
#[must_use]
pub fn search_all(config: &SearchConfig, pool: &WorkerPool) -> Arc<RuleTable> {
    let table = Arc::new(RuleTable::new());
    let progress = pool.progress();

    let total: u64 = (2..=config.max_target_len)
        .map(|len| count_non_pruned_targets(&config.target_alphabet, len))
        .sum();
    let ticker = spawn_progress_ticker(Arc::clone(&progress), total, Duration::from_secs(10));

    for length in 2..=config.max_target_len {
        enumerate(&config.target_alphabet, length, |target| {
            if should_prune(target, true) {
                return ControlFlow::Continue(());
            }
            let target = target.to_vec();
            let candidate_alphabet = config.candidate_alphabet.clone();
            let max_candidate_len = config.max_candidate_len;
            let dead_mask = config.dead_mask;
            let table = Arc::clone(&table);
            let progress = Arc::clone(&progress);
            progress.checked.fetch_add(1, Ordering::Relaxed);
            pool.submit(Box::new(move || {
                if let Some(rule) = search_single(&target, &candidate_alphabet, max_candidate_len, dead_mask)
                {
                    progress.found.fetch_add(1, Ordering::Relaxed);
                    table.add(rule);
                }
            }));
            ControlFlow::Continue(())
        });
    }

    let _ = ticker.join();
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Vec<Opcode> {
        vec![
            Opcode::NOP,
            Opcode::AND_A_A,
            Opcode::AND_A_N,
            Opcode::OR_A_A,
            Opcode::OR_A_N,
            Opcode::SLA_A,
            Opcode::RR_A,
        ]
    }

    #[test]
    fn and_0ffh_finds_and_a() {
        let target = [Instruction::with_imm8(Opcode::AND_A_N, 0xFF)];
        let rule = search_single(&target, &alphabet(), 2, DEAD_NONE).expect("a rule");
        assert_eq!(rule.replacement, vec![Instruction::bare(Opcode::AND_A_A)]);
        assert_eq!(rule.bytes_saved, 1);
        assert_eq!(rule.dead_flags, 0);
    }

    #[test]
    fn sla_a_rr_a_finds_or_a() {
        let target = [
            Instruction::bare(Opcode::SLA_A),
            Instruction::bare(Opcode::RR_A),
        ];
        let rule = search_single(&target, &alphabet(), 1, DEAD_NONE).expect("a rule");
        assert_eq!(rule.replacement, vec![Instruction::bare(Opcode::OR_A_A)]);
    }

    #[test]
    fn add_a_1_never_yields_inc_a() {
        let target = [Instruction::with_imm8(Opcode::ADD_A_N, 1)];
        let alphabet = vec![Opcode::INC_A, Opcode::NOP];
        assert!(search_single(&target, &alphabet, 1, DEAD_NONE).is_none());
    }

    #[test]
    fn ld_a_0_needs_dead_all_to_become_xor_a() {
        let target = [Instruction::with_imm8(Opcode::LD_A_N, 0)];
        let alphabet = vec![Opcode::XOR_A_A, Opcode::NOP];
        assert!(search_single(&target, &alphabet, 1, DEAD_NONE).is_none());
        let rule = search_single(&target, &alphabet, 1, crate::dead_flags::DEAD_ALL).expect("a rule");
        assert_eq!(rule.replacement, vec![Instruction::bare(Opcode::XOR_A_A)]);
        assert_ne!(rule.dead_flags, 0);
    }
}

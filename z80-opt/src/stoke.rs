//! Stochastic (STOKE-style) search for sequences beyond brute-force range,
//! per spec §4.8: a single MCMC [`Chain`] mutating a candidate sequence
//! under a Metropolis-Hastings acceptance rule with multiplicative
//! annealing, and [`run`] launching several decorrelated chains in parallel.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use z80_isa::{Instruction, Opcode};

use crate::exhaustive::exhaustive_check;
use crate::fingerprint::quick_check_mismatch_count;
use crate::rule::{bytes_of, cycles_of, Rule, RuleTable};

/// Parameters a [`Chain`] and [`run`] are configured with. No environment
/// variables or config files per spec §6 — callers build this by hand.
#[derive(Debug, Clone)]
pub struct StokeConfig {
    /// Number of independent chains [`run`] launches.
    pub chains: usize,
    /// Number of Metropolis-Hastings steps each chain runs.
    pub iterations: usize,
    /// Starting temperature; must be positive.
    pub initial_temperature: f64,
    /// Per-step multiplicative temperature decay, strictly in `(0, 1)`.
    pub decay: f64,
    /// Longest sequence the mutator's "insert" operator may grow a
    /// candidate to.
    pub max_seq_len: usize,
    /// Dead-flag mask the cost function's mismatch count is computed under.
    pub dead_mask: u8,
    /// Opcode alphabet the mutator draws replacement/inserted instructions
    /// from.
    pub alphabet: Vec<Opcode>,
}

fn random_instruction(rng: &mut StdRng, alphabet: &[Opcode]) -> Instruction {
    let op = alphabet[rng.gen_range(0..alphabet.len())];
    let meta = op.meta();
    if meta.has_imm16 {
        Instruction::with_imm16(op, rng.gen())
    } else if meta.has_immediate {
        Instruction::with_imm8(op, rng.gen())
    } else {
        Instruction::bare(op)
    }
}

/// The five mutation operators from spec §4.8, with their fixed weights.
/// "Insert" at the length cap and "change-immediate" on an all-bare
/// sequence both degrade to "replace".
fn mutate(rng: &mut StdRng, seq: &[Instruction], alphabet: &[Opcode], max_seq_len: usize) -> Vec<Instruction> {
    let mut out = seq.to_vec();
    if out.is_empty() {
        out.push(random_instruction(rng, alphabet));
        return out;
    }

    let roll = rng.gen_range(0..100);
    match roll {
        0..=39 => {
            // Replace: overwrite one random position.
            let i = rng.gen_range(0..out.len());
            out[i] = random_instruction(rng, alphabet);
        }
        40..=59 => {
            // Swap-adjacent.
            if out.len() >= 2 {
                let i = rng.gen_range(0..out.len() - 1);
                out.swap(i, i + 1);
            } else {
                let i = rng.gen_range(0..out.len());
                out[i] = random_instruction(rng, alphabet);
            }
        }
        60..=79 => {
            // Delete.
            let i = rng.gen_range(0..out.len());
            out.remove(i);
        }
        80..=89 => {
            // Insert, capped by max_seq_len.
            if out.len() < max_seq_len {
                let i = rng.gen_range(0..=out.len());
                out.insert(i, random_instruction(rng, alphabet));
            } else {
                let i = rng.gen_range(0..out.len());
                out[i] = random_instruction(rng, alphabet);
            }
        }
        _ => {
            // Change-immediate.
            let immediate_positions: Vec<usize> = out
                .iter()
                .enumerate()
                .filter(|(_, i)| i.opcode.meta().has_immediate || i.opcode.meta().has_imm16)
                .map(|(idx, _)| idx)
                .collect();
            if let Some(&i) = immediate_positions.get(rng.gen_range(0..immediate_positions.len().max(1))) {
                let meta = out[i].opcode.meta();
                out[i].imm16 = if meta.has_imm16 {
                    rng.gen()
                } else {
                    u16::from(rng.gen::<u8>())
                };
            } else {
                let i = rng.gen_range(0..out.len());
                out[i] = random_instruction(rng, alphabet);
            }
        }
    }
    out
}

/// Cost function from spec §4.8: `1000 * mismatches + bytes + t_states/100`.
/// The `1000` multiplier means any correctness gain always dominates any
/// size loss, so the chain never prefers a smaller-but-wrong candidate.
fn cost(target: &[Instruction], candidate: &[Instruction], dead_mask: u8) -> i64 {
    let mismatches = i64::from(quick_check_mismatch_count(target, candidate, dead_mask));
    1000 * mismatches + i64::from(bytes_of(candidate)) + i64::from(cycles_of(candidate)) / 100
}

/// One Markov chain exploring the space of candidate sequences for a fixed
/// `target`, via Metropolis-Hastings with multiplicative annealing.
pub struct Chain {
    current: Vec<Instruction>,
    best: Vec<Instruction>,
    cost: i64,
    best_cost: i64,
    temperature: f64,
    rng: StdRng,
    target: Vec<Instruction>,
    target_bytes: i32,
    alphabet: Vec<Opcode>,
    max_seq_len: usize,
    dead_mask: u8,
    decay: f64,
}

impl Chain {
    /// Builds a chain starting from `target` itself (cost zero — it is
    /// trivially equivalent to itself) with a PRNG seeded from `seed`.
    #[must_use]
    pub fn new(target: Vec<Instruction>, config: &StokeConfig, seed: u64) -> Self {
        let target_bytes = bytes_of(&target);
        let rng = StdRng::seed_from_u64(seed);
        let initial_cost = cost(&target, &target, config.dead_mask);
        Self {
            current: target.clone(),
            best: target.clone(),
            cost: initial_cost,
            best_cost: initial_cost,
            temperature: config.initial_temperature,
            rng,
            target,
            target_bytes,
            alphabet: config.alphabet.clone(),
            max_seq_len: config.max_seq_len,
            dead_mask: config.dead_mask,
            decay: config.decay,
        }
    }

    /// Re-seeds the chain from `target` with a fresh PRNG, used after a
    /// convergence trigger emits a rule and wants to keep exploring.
    fn reset(&mut self, seed: u64) {
        self.current = self.target.clone();
        self.best = self.target.clone();
        let initial_cost = cost(&self.target, &self.target, self.dead_mask);
        self.cost = initial_cost;
        self.best_cost = initial_cost;
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// One Metropolis-Hastings step: propose, accept unconditionally if the
    /// cost improves, otherwise accept with probability `exp(-delta / T)`.
    /// Always decays the temperature afterward.
    fn step(&mut self) {
        let proposal = mutate(&mut self.rng, &self.current, &self.alphabet, self.max_seq_len);
        let proposal_cost = cost(&self.target, &proposal, self.dead_mask);
        let delta = proposal_cost - self.cost;
        let accept = delta <= 0 || self.rng.gen::<f64>() < (-(delta as f64) / self.temperature).exp();
        if accept {
            self.current = proposal;
            self.cost = proposal_cost;
            if self.cost < self.best_cost {
                self.best = self.current.clone();
                self.best_cost = self.cost;
            }
        }
        self.temperature *= self.decay;
    }

    /// Whether `best` is worth handing to [`exhaustive_check`]: zero
    /// mismatches under the mask, and strictly shorter than the target.
    fn converged(&self) -> bool {
        self.best_cost < 1000 && bytes_of(&self.best) < self.target_bytes
    }

    /// Runs `iterations` MH steps. Whenever the chain converges, verifies
    /// `best` exhaustively; on success, emits a rule into `table` and resets
    /// the chain (reinitialized from `target`, fresh seed) to keep exploring.
    pub fn run(&mut self, iterations: usize, table: &RuleTable, reseed: &mut impl FnMut() -> u64) {
        for _ in 0..iterations {
            self.step();
            if self.converged() {
                let result = exhaustive_check(&self.target, &self.best, self.dead_mask);
                if result.equivalent {
                    table.add(Rule {
                        source: self.target.clone(),
                        replacement: self.best.clone(),
                        bytes_saved: self.target_bytes - bytes_of(&self.best),
                        cycles_saved: cycles_of(&self.target) - cycles_of(&self.best),
                        dead_flags: crate::fingerprint::flag_diff(&self.target, &self.best),
                    });
                    self.reset(reseed());
                }
            }
        }
    }

    /// The best (lowest-cost) candidate this chain has seen.
    #[must_use]
    pub fn best(&self) -> &[Instruction] {
        &self.best
    }
}

/// Launches `config.chains` independent chains with decorrelated seeds,
/// each running for `config.iterations` steps, collecting confirmed rules
/// under one [`RuleTable`] and deduplicating by `(source, replacement)`.
#[must_use]
pub fn run(target: Vec<Instruction>, config: &StokeConfig, base_seed: u64) -> Vec<Rule> {
    let table = Arc::new(RuleTable::new());
    let next_seed = Arc::new(Mutex::new(base_seed));

    let handles: Vec<_> = (0..config.chains)
        .map(|i| {
            let target = target.clone();
            let config = config.clone();
            let table = Arc::clone(&table);
            let next_seed = Arc::clone(&next_seed);
            std::thread::spawn(move || {
                let mut chain = Chain::new(target, &config, base_seed.wrapping_add(i as u64 * 2 + 1));
                let mut reseed = || {
                    let mut guard = next_seed.lock().expect("seed mutex poisoned");
                    *guard = guard.wrapping_add(0x9E37_79B9);
                    *guard
                };
                chain.run(config.iterations, &table, &mut reseed);
            })
        })
        .collect();
    for h in handles {
        let _ = h.join();
    }

    table.dedup_into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StokeConfig {
        StokeConfig {
            chains: 2,
            iterations: 2000,
            initial_temperature: 10.0,
            decay: 0.999,
            max_seq_len: 3,
            dead_mask: 0,
            alphabet: vec![
                Opcode::OR_A_A,
                Opcode::SLA_A,
                Opcode::RR_A,
                Opcode::NOP,
                Opcode::AND_A_A,
            ],
        }
    }

    #[test]
    fn chain_starts_at_zero_cost_on_the_target_itself() {
        let target = vec![Instruction::bare(Opcode::OR_A_A)];
        let chain = Chain::new(target.clone(), &config(), 1);
        assert_eq!(chain.best(), target.as_slice());
    }

    #[test]
    fn stoke_can_rediscover_the_sla_rr_or_equivalence() {
        let target = vec![
            Instruction::bare(Opcode::SLA_A),
            Instruction::bare(Opcode::RR_A),
        ];
        let rules = run(target.clone(), &config(), 42);
        // Not guaranteed every run finds it (it's a randomized search), but
        // any rule that is found must be genuinely shorter and verified.
        for rule in &rules {
            assert_eq!(rule.source, target);
            assert!(bytes_of(&rule.replacement) < bytes_of(&target));
        }
    }
}

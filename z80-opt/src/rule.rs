//! [`Rule`]: a confirmed peephole equivalence, and [`RuleTable`]: the
//! concurrent sink every search task feeds into, per spec §3 and §4.9.

use std::sync::Mutex;

use z80_isa::{sequence_to_asm_string, Instruction};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::RuleIoError;

/// Total encoded byte length of a sequence.
#[must_use]
pub(crate) fn bytes_of(seq: &[Instruction]) -> i32 {
    seq.iter()
        .map(|i| i32::from(i.opcode.meta().encoded_bytes))
        .sum()
}

/// Total T-state sum of a sequence.
#[must_use]
pub(crate) fn cycles_of(seq: &[Instruction]) -> i32 {
    seq.iter().map(|i| i32::from(i.opcode.meta().t_states)).sum()
}

/// A confirmed equivalence: `replacement` produces the same observable state
/// as `source` for every input the oracle proved (strongly, if `dead_flags`
/// is zero; conditionally on those flag bits being dead otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// The original instruction sequence.
    pub source: Vec<Instruction>,
    /// The shorter, behavior-preserving sequence.
    pub replacement: Vec<Instruction>,
    /// `source`'s encoded length minus `replacement`'s. Always positive.
    pub bytes_saved: i32,
    /// `source`'s T-state sum minus `replacement`'s. May be zero or negative
    /// even when bytes are saved.
    pub cycles_saved: i32,
    /// The minimal flag-bit mask `FlagDiff` found this rule actually needs
    /// relaxed; `0` for a strong, fully bit-exact rule.
    pub dead_flags: u8,
}

impl Rule {
    /// A stable key for deduplicating on `(source, replacement)` identity,
    /// independent of `bytes_saved`/`cycles_saved`/`dead_flags`.
    #[must_use]
    pub fn dedup_key(&self) -> (Vec<Instruction>, Vec<Instruction>) {
        (self.source.clone(), self.replacement.clone())
    }

    /// Renders this rule as the line-oriented JSON record from spec §6.
    #[cfg(feature = "serde")]
    pub fn to_json_line(&self) -> Result<String, RuleIoError> {
        #[derive(Serialize)]
        struct RuleRecord {
            source_asm: String,
            replacement_asm: String,
            source_bytes: u32,
            replacement_bytes: u32,
            bytes_saved: i32,
            cycles_saved: i32,
            #[serde(skip_serializing_if = "Option::is_none")]
            dead_flags: Option<String>,
        }

        let source_bytes = bytes_of(&self.source) as u32;
        let replacement_bytes = bytes_of(&self.replacement) as u32;

        let record = RuleRecord {
            source_asm: sequence_to_asm_string(&self.source),
            replacement_asm: sequence_to_asm_string(&self.replacement),
            source_bytes,
            replacement_bytes,
            bytes_saved: self.bytes_saved,
            cycles_saved: self.cycles_saved,
            dead_flags: (self.dead_flags != 0).then(|| format!("{:02x}", self.dead_flags)),
        };
        serde_json::to_string(&record).map_err(RuleIoError::from)
    }
}

/// Concurrent multi-producer sink for confirmed rules. `add` is safe for any
/// number of callers; the only lock is taken for the duration of a push.
#[derive(Default)]
pub struct RuleTable {
    rules: Mutex<Vec<Rule>>,
}

impl RuleTable {
    /// Builds an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a confirmed rule. No deduplication at insertion time, per spec
    /// §4.9 — a later pass over [`Self::rules`] or [`Self::dedup_into_vec`]
    /// handles that.
    pub fn add(&self, rule: Rule) {
        self.rules.lock().expect("rule table mutex poisoned").push(rule);
    }

    /// A snapshot of every rule added so far, sorted by
    /// `(bytes_saved desc, cycles_saved desc)`.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        let mut snapshot = self.rules.lock().expect("rule table mutex poisoned").clone();
        sort_by_savings(&mut snapshot);
        snapshot
    }

    /// Number of rules currently held, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.lock().expect("rule table mutex poisoned").len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A sorted snapshot with duplicate `(source, replacement)` pairs
    /// collapsed to their first occurrence, per spec §4.9's "follow-up pass".
    #[must_use]
    pub fn dedup_into_vec(&self) -> Vec<Rule> {
        let mut snapshot = self.rules();
        let mut seen = std::collections::HashSet::new();
        snapshot.retain(|r| seen.insert(r.dedup_key()));
        snapshot
    }
}

fn sort_by_savings(rules: &mut [Rule]) {
    rules.sort_by(|a, b| {
        b.bytes_saved
            .cmp(&a.bytes_saved)
            .then(b.cycles_saved.cmp(&a.cycles_saved))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use z80_isa::Opcode;

    fn rule(bytes_saved: i32, cycles_saved: i32) -> Rule {
        Rule {
            source: vec![Instruction::bare(Opcode::NOP)],
            replacement: vec![],
            bytes_saved,
            cycles_saved,
            dead_flags: 0,
        }
    }

    #[test]
    fn rules_sort_by_bytes_then_cycles_descending() {
        let table = RuleTable::new();
        table.add(rule(1, 10));
        table.add(rule(3, 1));
        table.add(rule(2, 5));
        table.add(rule(2, 9));
        let saved: Vec<(i32, i32)> = table
            .rules()
            .into_iter()
            .map(|r| (r.bytes_saved, r.cycles_saved))
            .collect();
        assert_eq!(saved, vec![(3, 1), (2, 9), (2, 5), (1, 10)]);
    }

    #[test]
    fn dedup_collapses_identical_source_replacement_pairs() {
        let table = RuleTable::new();
        table.add(rule(2, 5));
        table.add(rule(2, 5));
        assert_eq!(table.len(), 2);
        assert_eq!(table.dedup_into_vec().len(), 1);
    }

    #[test]
    fn concurrent_insertion_preserves_every_rule() {
        use std::sync::Arc;
        let table = Arc::new(RuleTable::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || table.add(rule(i, i)))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(table.len(), 8);
    }
}

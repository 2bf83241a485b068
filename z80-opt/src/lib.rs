//! Brute-force and stochastic superoptimizer search engine for the Z80 ISA.
//!
//! Built on [`z80_isa`]'s bit-exact executor: a three-tier equivalence
//! oracle (QuickCheck, MidCheck, ExhaustiveCheck), an enumerator/pruner that
//! drives candidate generation, a fixed-size worker pool, and an optional
//! MCMC stochastic search for sequences beyond brute-force range. Discovered
//! equivalences accumulate in a concurrent [`RuleTable`].
//!
//! This crate has no command-line front-end, no assembly parser, and no
//! persistent checkpoint format of its own (callers that want one serialize
//! [`Rule`] records themselves, e.g. via [`Rule::to_json_line`]) — it is a
//! library other tools are clients of.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod dead_flags;
pub mod enumerate;
pub mod error;
pub mod exhaustive;
pub mod fingerprint;
pub mod pool;
pub mod prune;
pub mod rule;
pub mod search;
mod seeds;
pub mod stoke;

pub use dead_flags::{DEAD_ALL, DEAD_NONE, DEAD_UNDOC};
pub use enumerate::{enumerate, enumerate_firstop};
pub use error::PoolError;
#[cfg(feature = "serde")]
pub use error::RuleIoError;
pub use exhaustive::{exhaustive_check, Confidence, ExhaustiveResult};
pub use fingerprint::{
    fingerprint_mid, fingerprint_qc, flag_diff, mid_check, quick_check, quick_check_mismatch_count,
};
pub use pool::{Progress, WorkerPool};
pub use prune::should_prune;
pub use rule::{Rule, RuleTable};
pub use search::{search_all, search_single, SearchConfig};
pub use seeds::{MID_SEEDS, QC_SEEDS};
pub use stoke::{Chain, StokeConfig};

/// Populates the flag and opcode metadata tables [`z80_isa`] relies on.
///
/// Idempotent and thread-safe: both tables are `const` data computed at
/// compile time, so this is a no-op kept only so callers have an explicit
/// initialization step to call, per spec §6's "`init()` ... must be
/// idempotent and thread-safe" contract.
pub fn init() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}

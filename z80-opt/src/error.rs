//! The narrow set of fallible operations this crate actually has.
//!
//! Per spec §7, the executor, oracle, and enumerator are total — they never
//! return `Result`. The only failure modes live at the edges: turning a rule
//! into its JSON-line text, and standing up a worker pool.

/// Failure serializing a [`crate::rule::Rule`] to its JSON-line text.
#[derive(Debug, derive_more::Display)]
#[cfg(feature = "serde")]
pub enum RuleIoError {
    /// The `serde_json` encoder rejected the record.
    #[display(fmt = "failed to serialize rule: {_0}")]
    Json(serde_json::Error),
}

#[cfg(feature = "serde")]
impl std::error::Error for RuleIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for RuleIoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Failure constructing a [`crate::pool::WorkerPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PoolError {
    /// `worker_count` was zero; a pool needs at least one worker thread.
    #[display(fmt = "worker pool requires at least one worker, got 0")]
    ZeroWorkers,
}

impl std::error::Error for PoolError {}

// Programmer errors (corrupted metadata, an opcode index outside the closed
// set) are not a variant here: spec §7 requires them to abort rather than be
// caught, so they surface as `unreachable!()`/`panic!()` at the call site,
// not as a `Result` value.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_error_message_names_the_problem() {
        assert_eq!(
            PoolError::ZeroWorkers.to_string(),
            "worker pool requires at least one worker, got 0"
        );
    }
}

use crate::model::{DeadLink, RunOutcome};

/// Partition dead-link records on the flag computed at scan time.
///
/// Stable: each output sequence keeps the relative order of the input, and
/// every input record lands in exactly one of the two.
pub fn classify(records: Vec<DeadLink>) -> RunOutcome {
    let (whitelisted, flagged) = records.into_iter().partition(|record| record.whitelisted);

    RunOutcome {
        whitelisted,
        flagged,
    }
}

// ── Progress events ──
//
// Emitted synchronously, in run order, to whoever drives a `Cleanup`.
// The CLI turns them into progress lines; tests can record them.

use crate::model::{DeletionOutcome, Family, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupEvent {
    Authenticated,
    /// Listing of a family has started.
    Listing { family: Family },
    /// A family was listed and planned.
    Planned { family: Family, count: usize },
    /// A deletion group is about to be processed.
    GroupStarted { kind: ResourceKind, count: usize },
    Outcome(DeletionOutcome),
    FamilyAborted { family: Family, reason: String },
    FamilySkipped { family: Family },
}

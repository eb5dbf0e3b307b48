// ── Run reports ──

use serde::Serialize;

use crate::config::Mode;
use crate::executor::Execution;
use crate::model::{DeletionOutcome, Family};

/// How far a family's cleanup got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FamilyStatus {
    /// Every planned resource was attempted.
    Completed,
    /// Listing or a delete hit a transport/API error.
    Aborted { reason: String },
    /// Nothing was attempted (dry run).
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyReport {
    pub family: Family,
    #[serde(flatten)]
    pub status: FamilyStatus,
    /// Resources in the plan (zero if listing failed).
    pub planned: usize,
    pub outcomes: Vec<DeletionOutcome>,
}

impl FamilyReport {
    pub fn skipped(family: Family) -> Self {
        Self {
            family,
            status: FamilyStatus::Skipped,
            planned: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn aborted(family: Family, reason: impl Into<String>) -> Self {
        Self {
            family,
            status: FamilyStatus::Aborted {
                reason: reason.into(),
            },
            planned: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn from_execution(family: Family, planned: usize, execution: Execution) -> Self {
        let status = match execution.aborted {
            Some(reason) => FamilyStatus::Aborted { reason },
            None => FamilyStatus::Completed,
        };
        Self {
            family,
            status,
            planned,
            outcomes: execution.outcomes,
        }
    }

    pub fn deleted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_deleted()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.deleted()
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.status, FamilyStatus::Aborted { .. })
    }
}

/// Consolidated result of one `lab1` run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub controller: String,
    pub families: Vec<FamilyReport>,
}

impl RunReport {
    pub fn new(mode: Mode, controller: impl Into<String>) -> Self {
        Self {
            mode,
            controller: controller.into(),
            families: Vec::new(),
        }
    }

    pub fn family(&self, family: Family) -> Option<&FamilyReport> {
        self.families.iter().find(|f| f.family == family)
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &DeletionOutcome> {
        self.families.iter().flat_map(|f| f.outcomes.iter())
    }

    pub fn total_deleted(&self) -> usize {
        self.families.iter().map(FamilyReport::deleted).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.families.iter().map(FamilyReport::failed).sum()
    }

    /// Any failed delete or aborted family.
    pub fn has_failures(&self) -> bool {
        self.total_failed() > 0 || self.families.iter().any(FamilyReport::is_aborted)
    }
}

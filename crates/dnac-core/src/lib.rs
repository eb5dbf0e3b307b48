//! Lab reset for DNA Center: deletes IP pools and the site hierarchy in
//! an order the controller accepts.
//!
//! [`plan::plan`] is the pure ordering step; [`Cleanup`] wires it to the
//! API client for a full run.

pub mod cleanup;
pub mod config;
mod convert;
pub mod error;
pub mod event;
pub mod executor;
pub mod lister;
pub mod model;
pub mod plan;
pub mod report;

pub use cleanup::Cleanup;
pub use config::{CleanupConfig, Mode, TlsVerification};
pub use error::CoreError;
pub use event::CleanupEvent;
pub use model::{
    DeletionGroup, DeletionOutcome, DeletionPlan, DeletionStatus, Family, Resource, ResourceKind,
};
pub use report::{FamilyReport, FamilyStatus, RunReport};

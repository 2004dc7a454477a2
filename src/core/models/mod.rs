//! Domain models for skillpulse
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`User`] - a candidate assignee with skills and current load
//! - [`Task`] - work that needs a set of skills
//! - [`BehaviorRecord`] - raw activity counters for one user
//! - [`Metrics`] - what the scorer derives from a record
//! - [`Alert`] - a flagged mismatch between activity and task state

mod alert;
mod behavior;
mod task;
mod user;

pub use alert::{Alert, AlertKind, AlertSeverity, TaskContext};
pub use behavior::{
    BehaviorRecord, BehaviorUpdate, FileEdits, LeaderboardEntry, Metrics, Mismatch, RecordTable,
    Timestamp,
};
pub use task::{Task, TaskStatus};
pub use user::User;

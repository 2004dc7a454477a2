//! Behavior store port
//!
//! Defines the key-value interface the scorer's host uses to load and save
//! behavior records.

use crate::core::models::BehaviorRecord;

/// Storage for per-user behavior records
///
/// Implementations must return records from [`all`](Self::all) in insertion
/// order; leaderboard ties depend on it.
pub trait BehaviorStore: std::fmt::Debug + Send {
    /// Load the record for a user
    fn load(&self, user_id: &str) -> anyhow::Result<Option<BehaviorRecord>>;

    /// Insert or replace the record for a user
    fn save(&mut self, user_id: &str, record: BehaviorRecord) -> anyhow::Result<()>;

    /// All records, in insertion order
    fn all(&self) -> anyhow::Result<Vec<(String, BehaviorRecord)>>;
}

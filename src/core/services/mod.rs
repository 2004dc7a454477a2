//! Business logic services
//!
//! Pure decision logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Pick the best assignee for a task
//! - [`scorer`] - Derive behavior metrics and leaderboard rankings
//! - [`alerts`] - Flag risky activity/task-state combinations

pub mod alerts;
pub mod matcher;
pub mod scorer;

pub use alerts::generate_alerts;
pub use matcher::{
    Assignment, DEFAULT_THRESHOLD, RankedCandidate, assign, best_candidate, match_score,
    ranked_candidates,
};
pub use scorer::{
    DEFAULT_LEADERBOARD_SIZE, apply_update, compute_metrics, hours_inactive, leaderboard,
    leaderboard_score, risk_level,
};

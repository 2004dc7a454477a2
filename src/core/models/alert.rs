//! Alert model
//!
//! Alerts flag contributors whose activity does not match their task state.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A raised alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// User the alert is about
    pub user: String,
    /// Alert kind
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// How urgent the alert is
    pub severity: AlertSeverity,
    /// Human-readable explanation
    pub reason: String,
}

/// Alert kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    /// No commits for a long time
    Inactivity,
    /// Deadline close while activity is low
    DeadlineRisk,
    /// Task in progress but commits have stopped
    ProgressMismatch,
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    /// Worth a look
    Medium,
    /// Needs attention now
    High,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Task state an alert is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskContext {
    /// Current task status
    #[serde(default)]
    pub status: TaskStatus,
    /// Hours until the deadline, if there is one
    #[serde(default)]
    pub deadline_hours: Option<f64>,
}

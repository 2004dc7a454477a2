//! Alert service - flags risky combinations of activity and task state

use crate::core::models::{Alert, AlertKind, AlertSeverity, Metrics, Mismatch, TaskContext, TaskStatus};

/// Staleness (hours) above which a user is considered inactive
const INACTIVITY_HOURS: f64 = 12.0;

/// Deadline distance (hours) under which low activity is a risk
const DEADLINE_WINDOW_HOURS: f64 = 24.0;

/// Activity below which progress toward a deadline is considered low
const LOW_ACTIVITY: f64 = 1.0;

/// Generate alerts for one user
///
/// Alerts are returned in a fixed order: inactivity, deadline risk,
/// progress mismatch.
#[must_use]
pub fn generate_alerts(user: &str, metrics: &Metrics, context: &TaskContext) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if metrics.staleness > INACTIVITY_HOURS {
        alerts.push(Alert {
            user: user.to_string(),
            kind: AlertKind::Inactivity,
            severity: AlertSeverity::High,
            reason: format!("No Git activity in last {:.1} hours", metrics.staleness),
        });
    }

    if context.deadline_hours.is_some_and(|h| h < DEADLINE_WINDOW_HOURS)
        && metrics.activity < LOW_ACTIVITY
    {
        alerts.push(Alert {
            user: user.to_string(),
            kind: AlertKind::DeadlineRisk,
            severity: AlertSeverity::High,
            reason: "Deadline approaching with low activity".to_string(),
        });
    }

    if context.status == TaskStatus::InProgress && metrics.mismatch == Mismatch::HighRisk {
        alerts.push(Alert {
            user: user.to_string(),
            kind: AlertKind::ProgressMismatch,
            severity: AlertSeverity::Medium,
            reason: "Task marked in-progress but Git shows inactivity".to_string(),
        });
    }

    alerts
}

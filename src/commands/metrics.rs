//! Metrics command - show derived metrics for one user

use skillpulse::api::{self, AppState};
use skillpulse::config::Config;
use skillpulse::core::models::TaskStatus;
use skillpulse::output::{MetricsReport, OutputMode};

/// Print metrics for `user_id` from the configured data file
pub fn metrics(
    config: &Config,
    user_id: &str,
    task_status: Option<&str>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let status: TaskStatus = task_status.map_or(Ok(TaskStatus::default()), str::parse)?;
    let state = AppState::from_config(config)?;
    let metrics = api::get_metrics(&state, user_id, task_status)?;

    MetricsReport {
        user_id: user_id.to_string(),
        task_status: status,
        metrics,
    }
    .render(output_mode);
    Ok(())
}

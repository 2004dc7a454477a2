//! Leaderboard command

use skillpulse::api::{self, AppState};
use skillpulse::config::Config;
use skillpulse::output::{LeaderboardReport, OutputMode};

/// Print the top users from the configured data file
pub fn leaderboard(config: &Config, output_mode: OutputMode) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let entries = api::get_leaderboard(&state)?;
    LeaderboardReport { entries }.render(output_mode);
    Ok(())
}

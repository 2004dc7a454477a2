//! Serve command - run the HTTP API

use std::path::PathBuf;

use skillpulse::api::AppState;
use skillpulse::config::Config;
use skillpulse::server;

/// Command-line values that win over the config file
#[derive(Debug, Default)]
pub struct ServeOverrides {
    /// `--host`
    pub host: Option<String>,
    /// `--port`
    pub port: Option<u16>,
    /// `--data-file`
    pub data_file: Option<PathBuf>,
}

/// Start the API server and block until it stops
pub fn serve(mut config: Config, overrides: ServeOverrides) -> anyhow::Result<()> {
    if let Some(host) = overrides.host {
        config.server.host = host;
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }
    if overrides.data_file.is_some() {
        config.storage.data_file = overrides.data_file;
    }

    let state = AppState::from_config(&config)?;
    log::info!(
        "Loaded {} user(s); threshold {}, leaderboard size {}",
        state.board.users().len(),
        state.matching.threshold,
        state.leaderboard.size
    );

    server::serve(state, &config.server.addr())
}

//! Application state shared by all handlers
//!
//! One [`AppState`] is owned by whoever drives the handlers (the HTTP server
//! or a CLI command). Handlers borrow it; nothing here is global.

use crate::adapters::{InMemoryBehaviorStore, JsonFileBehaviorStore};
use crate::board::TaskBoard;
use crate::config::{Config, LeaderboardConfig, MatchingConfig};
use crate::core::ports::{BehaviorStore, Clock, SystemClock};

/// Roster, tasks, behavior records and settings for one running service
#[derive(Debug)]
pub struct AppState {
    /// Users and tasks
    pub board: TaskBoard,
    /// Behavior record persistence
    pub behavior: Box<dyn BehaviorStore>,
    /// Source of "now"
    pub clock: Box<dyn Clock>,
    /// Matcher settings
    pub matching: MatchingConfig,
    /// Leaderboard settings
    pub leaderboard: LeaderboardConfig,
}

impl AppState {
    /// Build state from explicit parts, using the system clock and default settings
    #[must_use]
    pub fn new(board: TaskBoard, behavior: Box<dyn BehaviorStore>) -> Self {
        Self {
            board,
            behavior,
            clock: Box::new(SystemClock),
            matching: MatchingConfig::default(),
            leaderboard: LeaderboardConfig::default(),
        }
    }

    /// Build state from configuration
    ///
    /// Behavior records come from `storage.data_file` when set, otherwise
    /// they live in memory for the life of the process.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let board = config.seed_board()?;
        let behavior: Box<dyn BehaviorStore> = match &config.storage.data_file {
            Some(path) => Box::new(JsonFileBehaviorStore::open(path)?),
            None => {
                log::debug!("No data file configured, keeping behavior records in memory");
                Box::new(InMemoryBehaviorStore::new())
            },
        };

        Ok(Self {
            matching: config.matching,
            leaderboard: config.leaderboard,
            ..Self::new(board, behavior)
        })
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Current time in epoch millis
    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }
}

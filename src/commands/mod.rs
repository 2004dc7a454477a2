//! Command implementations

mod leaderboard;
mod metrics;
mod serve;
mod suggest;

pub use leaderboard::leaderboard;
pub use metrics::metrics;
pub use serve::{ServeOverrides, serve};
pub use suggest::suggest;

//! skillpulse - Skill-based task assignment and contributor behavior scoring
//!
//! This library matches tasks to users by skill overlap, turns raw activity
//! counters into behavior metrics, alerts and a leaderboard, and exposes all of
//! it through an HTTP-agnostic API plus a `tiny_http` server.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod board;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod server;

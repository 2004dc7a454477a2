//! Core domain logic for skillpulse
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (User, Task, BehaviorRecord, Metrics, Alert)
//! - `services/` - Matching, scoring and alerting
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - The error taxonomy shared by all of the above

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::CoreError;

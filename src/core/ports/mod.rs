//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (persistence, time).
//!
//! Implementations live in the `adapters` module.

mod behavior_store;
mod clock;

pub use behavior_store::BehaviorStore;
pub use clock::{Clock, FixedClock, SystemClock};

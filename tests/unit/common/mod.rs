//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing skillpulse components.


pub use fixtures::*;

//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory` - process-lifetime behavior store
//! - `json_file` - behavior store persisted as a JSON document

mod json_file;
mod memory;

pub use json_file::JsonFileBehaviorStore;
pub use memory::InMemoryBehaviorStore;

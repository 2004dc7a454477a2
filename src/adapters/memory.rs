//! In-memory behavior store
//!
//! Holds records for the life of the process. Used when no data file is
//! configured, and as the backing table of the JSON file store.

use crate::core::models::{BehaviorRecord, RecordTable};
use crate::core::ports::BehaviorStore;

/// Behavior store that never touches the filesystem
#[derive(Debug, Clone, Default)]
pub struct InMemoryBehaviorStore {
    table: RecordTable,
}

impl InMemoryBehaviorStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: RecordTable::new(),
        }
    }

    /// Create a store pre-populated with records
    #[must_use]
    pub const fn with_records(table: RecordTable) -> Self {
        Self { table }
    }
}

impl BehaviorStore for InMemoryBehaviorStore {
    fn load(&self, user_id: &str) -> anyhow::Result<Option<BehaviorRecord>> {
        Ok(self.table.get(user_id).copied())
    }

    fn save(&mut self, user_id: &str, record: BehaviorRecord) -> anyhow::Result<()> {
        self.table.insert(user_id, record);
        Ok(())
    }

    fn all(&self) -> anyhow::Result<Vec<(String, BehaviorRecord)>> {
        Ok(self.table.iter().map(|(id, r)| (id.to_string(), *r)).collect())
    }
}

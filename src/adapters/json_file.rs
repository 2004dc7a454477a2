//! JSON file behavior store
//!
//! Records live in a single file shaped as `{"users": {"<id>": {...}}}`.
//! The file is read once on open and rewritten after every save.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{BehaviorRecord, RecordTable};
use crate::core::ports::BehaviorStore;

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct BehaviorFile {
    #[serde(default)]
    users: RecordTable,
}

/// Behavior store persisted to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileBehaviorStore {
    path: PathBuf,
    table: RecordTable,
}

impl JsonFileBehaviorStore {
    /// Open a store, loading the file if it exists
    ///
    /// A missing file is not an error; it is created on the first save.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let table = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading behavior data from {}", path.display()))?;
            let file: BehaviorFile = serde_json::from_str(&content)
                .with_context(|| format!("parsing behavior data in {}", path.display()))?;
            log::info!("Loaded {} behavior record(s) from {}", file.users.len(), path.display());
            file.users
        } else {
            log::debug!("No behavior data at {}, starting empty", path.display());
            RecordTable::new()
        };

        Ok(Self { path, table })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `table`, replacing the file via a sibling temp file
    fn persist(&self, table: &RecordTable) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let file = BehaviorFile {
            users: table.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

impl BehaviorStore for JsonFileBehaviorStore {
    fn load(&self, user_id: &str) -> anyhow::Result<Option<BehaviorRecord>> {
        Ok(self.table.get(user_id).copied())
    }

    fn save(&mut self, user_id: &str, record: BehaviorRecord) -> anyhow::Result<()> {
        let mut table = self.table.clone();
        table.insert(user_id, record);
        self.persist(&table)?;
        self.table = table;
        log::debug!("Saved behavior record for {user_id} to {}", self.path.display());
        Ok(())
    }

    fn all(&self) -> anyhow::Result<Vec<(String, BehaviorRecord)>> {
        Ok(self.table.iter().map(|(id, r)| (id.to_string(), *r)).collect())
    }
}

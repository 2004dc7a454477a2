//! Behavior records and derived metrics
//!
//! A [`BehaviorRecord`] holds the raw activity counters for one user. The
//! scorer turns records into [`Metrics`] and [`LeaderboardEntry`] rankings.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw activity counters for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorRecord {
    /// Number of commits
    #[serde(default)]
    pub commits: u64,

    /// Time of the last commit (epoch millis)
    #[serde(
        default,
        rename = "lastCommit",
        alias = "lastCommitAt",
        deserialize_with = "deserialize_commit_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_commit_at: Option<i64>,

    /// File edit counters, if any edits were recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_edits: Option<FileEdits>,
}

impl BehaviorRecord {
    /// Create a record with commits, last commit time and edit counters
    #[must_use]
    pub const fn new(commits: u64, last_commit_at: i64, total: u64, reverts: u64) -> Self {
        Self {
            commits,
            last_commit_at: Some(last_commit_at),
            file_edits: Some(FileEdits { total, reverts }),
        }
    }
}

/// File edit counters
///
/// `reverts <= total` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileEdits {
    /// Total edits
    #[serde(default)]
    pub total: u64,
    /// Edits that were later reverted
    #[serde(default)]
    pub reverts: u64,
}

/// Partial update to a behavior record
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorUpdate {
    /// New commit count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commits: Option<u64>,

    /// Explicit last commit time (epoch millis)
    #[serde(
        default,
        rename = "lastCommit",
        alias = "lastCommitAt",
        deserialize_with = "deserialize_commit_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_commit_at: Option<i64>,

    /// Commit timestamps, newest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<Timestamp>>,

    /// Replacement edit counters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_edits: Option<FileEdits>,
}

/// A commit timestamp as sent by activity collectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Epoch milliseconds
    Millis(i64),
    /// RFC 3339 date-time (e.g. `2024-05-01T10:00:00Z`) or a numeric string
    Text(String),
}

impl Timestamp {
    /// Convert to epoch millis, `None` if the text form does not parse
    #[must_use]
    pub fn to_millis(&self) -> Option<i64> {
        match self {
            Self::Millis(ms) => Some(*ms),
            Self::Text(text) => chrono::DateTime::parse_from_rfc3339(text.trim())
                .map(|dt| dt.timestamp_millis())
                .ok()
                .or_else(|| text.trim().parse::<i64>().ok()),
        }
    }
}

/// Read a commit time in any [`Timestamp`] form, stored as epoch millis
fn deserialize_commit_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let Some(stamp) = Option::<Timestamp>::deserialize(deserializer)? else {
        return Ok(None);
    };
    stamp
        .to_millis()
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid commit time: {stamp:?}")))
}

/// Metrics derived from a behavior record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Commits per day proxy (`commits / 24`)
    pub activity: f64,
    /// Hours since the last commit
    pub staleness: f64,
    /// Commits per inactive hour
    pub speed: f64,
    /// `1 - reverts / max(1, total)`, may be negative
    pub accuracy: f64,
    /// Progress mismatch flag
    pub mismatch: Mismatch,
    /// Staleness tier times `1 - accuracy`
    pub risk_score: f64,
}

/// Whether task status and commit activity disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mismatch {
    /// Consistent
    #[default]
    Ok,
    /// In progress but inactive
    HighRisk,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::HighRisk => write!(f, "HIGH_RISK"),
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// User id
    pub user_id: String,
    /// Composite score
    pub score: f64,
}

/// Behavior records keyed by user id, in insertion order
///
/// Serializes as a JSON object whose key order is the insertion order, so
/// leaderboard ties resolve the same way before and after a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    entries: Vec<(String, BehaviorRecord)>,
}

impl RecordTable {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look up a record
    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<&BehaviorRecord> {
        self.entries.iter().find(|(id, _)| id == user_id).map(|(_, r)| r)
    }

    /// Insert or replace a record, keeping the original position on replace
    pub fn insert(&mut self, user_id: &str, record: BehaviorRecord) {
        match self.entries.iter_mut().find(|(id, _)| id == user_id) {
            Some((_, slot)) => *slot = record,
            None => self.entries.push((user_id.to_string(), record)),
        }
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BehaviorRecord)> {
        self.entries.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, BehaviorRecord)> for RecordTable {
    fn from_iter<T: IntoIterator<Item = (String, BehaviorRecord)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (id, record) in iter {
            table.insert(&id, record);
        }
        table
    }
}

impl Serialize for RecordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, record) in &self.entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RecordTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = RecordTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of user ids to behavior records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = RecordTable::new();
                while let Some((id, record)) = access.next_entry::<String, BehaviorRecord>()? {
                    table.insert(&id, record);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

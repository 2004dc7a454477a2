//! User model
//!
//! A user is a candidate for task assignment. Skills are a set; the number of
//! tasks currently held is the load used for tie-breaking.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A candidate assignee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Skill tags
    pub skills: BTreeSet<String>,

    /// Ids of tasks assigned to this user, in assignment order
    #[serde(default)]
    pub current_tasks: Vec<String>,
}

impl User {
    /// Create a user with no current tasks
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            skills: skills.into_iter().map(Into::into).collect(),
            current_tasks: Vec::new(),
        }
    }

    /// Number of tasks currently held
    #[must_use]
    pub fn load(&self) -> usize {
        self.current_tasks.len()
    }
}

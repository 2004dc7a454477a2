//! Task model
//!
//! A task declares the skills it needs. It is assigned at most once, by the
//! skill matcher.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

/// A unit of work to be assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (`t1`, `t2`, ...)
    pub id: String,

    /// What needs to be done
    pub title: String,

    /// Skills a candidate should have
    pub required_skills: BTreeSet<String>,

    /// Opaque deadline value, passed through untouched
    #[serde(default)]
    pub deadline: Option<serde_json::Value>,

    /// Lifecycle status
    #[serde(default)]
    pub status: TaskStatus,

    /// Assignee user id, set once by a successful match
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Task {
    /// Create an unassigned `todo` task
    #[must_use]
    pub fn new<I, S>(
        id: impl Into<String>,
        title: impl Into<String>,
        required_skills: I,
        deadline: Option<serde_json::Value>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            required_skills: required_skills.into_iter().map(Into::into).collect(),
            deadline,
            status: TaskStatus::default(),
            assigned_to: None,
        }
    }

    /// Whether the task has an assignee
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Todo,
    /// Currently being worked on
    InProgress,
    /// Completed
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "todo" | "pending" => Ok(Self::Todo),
            "in_progress" | "inprogress" | "started" => Ok(Self::InProgress),
            "done" | "complete" | "completed" => Ok(Self::Done),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

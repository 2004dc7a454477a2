//! Core error taxonomy
//!
//! Every rejected request carries a machine-checkable reason code
//! (see [`CoreError::reason`]) so callers never have to parse messages.

use thiserror::Error;

/// Errors produced by the matcher, scorer and task board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Task cannot be matched because it has no required skills
    #[error("task '{0}' has no required skills")]
    InvalidTask(String),

    /// One or more required request fields were absent or empty
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A task status string was not recognised
    #[error("invalid task status: {0}. Use: todo, in_progress, done")]
    InvalidStatus(String),

    /// No task with this id exists
    #[error("task '{0}' not found")]
    TaskNotFound(String),

    /// No user (roster entry or behavior record) with this id exists
    #[error("user '{0}' not found")]
    UserNotFound(String),

    /// Task already has an assignee
    #[error("task '{task_id}' is already assigned to '{user_id}'")]
    AlreadyAssigned {
        /// The task being assigned
        task_id: String,
        /// Its current assignee
        user_id: String,
    },

    /// A user with this id is already on the roster
    #[error("user '{0}' already exists")]
    DuplicateUser(String),
}

impl CoreError {
    /// Stable reason code for this error
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidTask(_) => "INVALID_TASK",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::TaskNotFound(_) => "TASK_NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::AlreadyAssigned { .. } => "ALREADY_ASSIGNED",
            Self::DuplicateUser(_) => "USER_EXISTS",
        }
    }

    /// Whether this error means the referenced entity does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_) | Self::UserNotFound(_))
    }

    /// Whether this error means the request conflicts with current state
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyAssigned { .. } | Self::DuplicateUser(_))
    }
}

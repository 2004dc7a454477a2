//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::core::models::{Alert, BehaviorRecord, Task, User};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub const fn error(error: ApiErrorData) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a task
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title
    #[serde(default)]
    pub title: String,
    /// Skills the assignee should have
    #[serde(default, alias = "required_skills")]
    pub required_skills: Vec<String>,
    /// Opaque deadline value
    #[serde(default)]
    pub deadline: Option<serde_json::Value>,
}

/// Request body for assigning a task
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskRequest {
    /// Id of the task to assign
    #[serde(default, alias = "task_id")]
    pub task_id: String,
}

/// Request body for adding a user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    /// User id
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Skill tags
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Query for the alerts endpoint
#[derive(Debug, Clone, Default)]
pub struct AlertsQuery {
    /// Task status string (`todo`, `in_progress`, `done`)
    pub task_status: Option<String>,
    /// Hours until the task deadline
    pub deadline_hours: Option<f64>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Health endpoint response data
#[derive(Debug, Serialize)]
pub struct HealthData {
    /// Always `ok` when the server answers
    pub status: String,
    /// Crate version
    pub version: String,
    /// Users on the roster
    pub users: usize,
    /// Tasks on the board
    pub tasks: usize,
}

/// Task assignment response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskData {
    /// The task after the attempt
    pub task: Task,
    /// Best score seen, `null` when the roster was empty
    pub match_score: Option<f64>,
    /// Whether the task was assigned by this call
    pub assigned: bool,
}

/// Tasks list response
#[derive(Debug, Serialize)]
pub struct TasksData {
    /// All tasks in creation order
    pub tasks: Vec<Task>,
}

/// User creation response
#[derive(Debug, Serialize)]
pub struct UserCreateData {
    /// Confirmation message
    pub message: String,
    /// The stored user
    pub user: User,
}

/// Users list response
#[derive(Debug, Serialize)]
pub struct UsersData {
    /// All users in roster order
    pub users: Vec<User>,
}

/// Behavior update response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorUpdateData {
    /// Always true on success
    pub updated: bool,
    /// User whose record changed
    pub user_id: String,
    /// The merged record as stored
    pub record: BehaviorRecord,
}

/// Alerts response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsData {
    /// User the alerts are about
    pub user_id: String,
    /// Raised alerts, possibly empty
    pub alerts: Vec<Alert>,
}

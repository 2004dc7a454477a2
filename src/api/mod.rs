//! HTTP-agnostic API layer
//!
//! This module provides pure handlers that can be used by any HTTP framework.
//! Handlers take typed input and return `Result<T, ApiError>`.
//!
//! ## Architecture
//!
//! - `types` - Request/response types (serde-serializable)
//! - `error` - API error types with HTTP status code mapping
//! - `state` - The state handlers operate on
//! - `handlers` - Pure business logic handlers

mod error;
mod handlers;
mod state;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    assign_task, create_task, create_user, get_alerts, get_leaderboard, get_metrics, get_task,
    health, list_tasks, list_users, update_behavior,
};
pub use state::AppState;
pub use types::{
    AlertsData, AlertsQuery, ApiResponse, AssignTaskData, AssignTaskRequest, BehaviorUpdateData,
    CreateTaskRequest, CreateUserRequest, HealthData, TasksData, UserCreateData, UsersData,
};

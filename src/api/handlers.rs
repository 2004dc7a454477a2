//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input plus the [`AppState`] and return `Result<T, ApiError>`.

use crate::core::CoreError;
use crate::core::models::{
    BehaviorRecord, BehaviorUpdate, LeaderboardEntry, Metrics, Task, TaskContext, TaskStatus,
};
use crate::core::services::{apply_update, compute_metrics, generate_alerts, leaderboard};

use super::error::ApiError;
use super::state::AppState;
use super::types::{
    AlertsData, AlertsQuery, AssignTaskData, AssignTaskRequest, BehaviorUpdateData,
    CreateTaskRequest, CreateUserRequest, HealthData, TasksData, UserCreateData, UsersData,
};

// =============================================================================
// HEALTH
// =============================================================================

/// Liveness and a summary of what the service holds
pub fn health(state: &AppState) -> Result<HealthData, ApiError> {
    Ok(HealthData {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        users: state.board.users().len(),
        tasks: state.board.tasks().len(),
    })
}

// =============================================================================
// TASKS
// =============================================================================

/// Create a task
pub fn create_task(state: &mut AppState, req: &CreateTaskRequest) -> Result<Task, ApiError> {
    let task = state
        .board
        .create_task(&req.title, &req.required_skills, req.deadline.clone())?;
    Ok(task.clone())
}

/// Run the matcher for a stored task
pub fn assign_task(state: &mut AppState, req: &AssignTaskRequest) -> Result<AssignTaskData, ApiError> {
    let task_id = req.task_id.trim();
    if task_id.is_empty() {
        return Err(CoreError::MissingFields(vec!["taskId"]).into());
    }

    let assignment = state.board.assign_task(task_id, state.matching.threshold)?;
    let task = state
        .board
        .task(task_id)
        .cloned()
        .ok_or_else(|| CoreError::TaskNotFound(task_id.to_string()))?;

    Ok(AssignTaskData {
        task,
        match_score: assignment.match_score,
        assigned: assignment.assignee.is_some(),
    })
}

/// List all tasks
pub fn list_tasks(state: &AppState) -> Result<TasksData, ApiError> {
    Ok(TasksData {
        tasks: state.board.tasks().to_vec(),
    })
}

/// Get a single task by id
pub fn get_task(state: &AppState, id: &str) -> Result<Task, ApiError> {
    state
        .board
        .task(id)
        .cloned()
        .ok_or_else(|| CoreError::TaskNotFound(id.to_string()).into())
}

// =============================================================================
// USERS
// =============================================================================

/// Add a user to the roster
pub fn create_user(state: &mut AppState, req: &CreateUserRequest) -> Result<UserCreateData, ApiError> {
    let user = state.board.create_user(&req.id, &req.name, &req.skills)?;
    Ok(UserCreateData {
        message: "User created".to_string(),
        user: user.clone(),
    })
}

/// List the roster
pub fn list_users(state: &AppState) -> Result<UsersData, ApiError> {
    Ok(UsersData {
        users: state.board.users().to_vec(),
    })
}

// =============================================================================
// BEHAVIOR
// =============================================================================

/// Derive metrics for a user's behavior record
///
/// `task_status` defaults to `todo` when absent.
pub fn get_metrics(
    state: &AppState,
    user_id: &str,
    task_status: Option<&str>,
) -> Result<Metrics, ApiError> {
    let status = parse_status(task_status)?;
    let record = load_record(state, user_id)?;
    Ok(compute_metrics(&record, status, state.now_ms()))
}

/// Merge a partial update into a user's behavior record and persist it
pub fn update_behavior(
    state: &mut AppState,
    user_id: &str,
    update: &BehaviorUpdate,
) -> Result<BehaviorUpdateData, ApiError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(CoreError::MissingFields(vec!["userId"]).into());
    }

    let prior = state.behavior.load(user_id)?;
    let record = apply_update(prior.as_ref(), update, state.now_ms());
    state.behavior.save(user_id, record)?;
    log::debug!("Updated behavior record for {user_id}: {} commit(s)", record.commits);

    Ok(BehaviorUpdateData {
        updated: true,
        user_id: user_id.to_string(),
        record,
    })
}

/// Top users by leaderboard score
pub fn get_leaderboard(state: &AppState) -> Result<Vec<LeaderboardEntry>, ApiError> {
    let records = state.behavior.all()?;
    Ok(leaderboard(
        records.iter().map(|(id, record)| (id.as_str(), record)),
        state.now_ms(),
        state.leaderboard.size,
    ))
}

/// Alerts for a user given their task context
pub fn get_alerts(state: &AppState, user_id: &str, query: &AlertsQuery) -> Result<AlertsData, ApiError> {
    let context = TaskContext {
        status: parse_status(query.task_status.as_deref())?,
        deadline_hours: query.deadline_hours,
    };
    let record = load_record(state, user_id)?;
    let metrics = compute_metrics(&record, context.status, state.now_ms());

    Ok(AlertsData {
        user_id: user_id.to_string(),
        alerts: generate_alerts(user_id, &metrics, &context),
    })
}

fn load_record(state: &AppState, user_id: &str) -> Result<BehaviorRecord, ApiError> {
    state
        .behavior
        .load(user_id)?
        .ok_or_else(|| CoreError::UserNotFound(user_id.to_string()).into())
}

fn parse_status(value: Option<&str>) -> Result<TaskStatus, CoreError> {
    value.map_or(Ok(TaskStatus::default()), str::parse)
}

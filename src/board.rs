//! Task board - the roster and task list the matcher works on
//!
//! The board is the single owner of users and tasks. Hosts hold one board and
//! serialize access to it; nothing in here is shared or global.

use crate::core::CoreError;
use crate::core::models::{Task, User};
use crate::core::services::{Assignment, assign};

/// Users and tasks for one running service
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    users: Vec<User>,
    tasks: Vec<Task>,
    next_seq: u64,
}

impl TaskBoard {
    /// Create an empty board
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            tasks: Vec::new(),
            next_seq: 0,
        }
    }

    /// Create a board with a seed roster
    #[must_use]
    pub const fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            tasks: Vec::new(),
            next_seq: 0,
        }
    }

    /// All users, in roster order
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All tasks, in creation order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a user
    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a task
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a `todo` task with the next id (`t1`, `t2`, ...)
    ///
    /// Blank skill tags are dropped before validation.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingFields`] if no required skill remains.
    pub fn create_task(
        &mut self,
        title: &str,
        required_skills: &[String],
        deadline: Option<serde_json::Value>,
    ) -> Result<&Task, CoreError> {
        let skills: Vec<&str> = non_blank(required_skills);
        if skills.is_empty() {
            return Err(CoreError::MissingFields(vec!["requiredSkills"]));
        }

        self.next_seq += 1;
        let task = Task::new(format!("t{}", self.next_seq), title, skills, deadline);
        log::info!("Created task {} ({})", task.id, task.title);

        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Add a user to the roster
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingFields`] naming every absent field
    /// - [`CoreError::DuplicateUser`] if the id is taken
    pub fn create_user(&mut self, id: &str, name: &str, skills: &[String]) -> Result<&User, CoreError> {
        let id = id.trim();
        let name = name.trim();
        let skills = non_blank(skills);

        let mut missing = Vec::new();
        if id.is_empty() {
            missing.push("id");
        }
        if name.is_empty() {
            missing.push("name");
        }
        if skills.is_empty() {
            missing.push("skills");
        }
        if !missing.is_empty() {
            return Err(CoreError::MissingFields(missing));
        }

        if self.user(id).is_some() {
            return Err(CoreError::DuplicateUser(id.to_string()));
        }

        log::info!("Added user {id} with {} skill(s)", skills.len());
        self.users.push(User::new(id, name, skills));
        Ok(&self.users[self.users.len() - 1])
    }

    /// Run the matcher for a stored task against the whole roster
    ///
    /// # Errors
    ///
    /// - [`CoreError::TaskNotFound`] for an unknown id
    /// - any error from [`assign`]
    pub fn assign_task(&mut self, task_id: &str, threshold: f64) -> Result<Assignment, CoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| CoreError::TaskNotFound(task_id.to_string()))?;

        let assignment = assign(task, &mut self.users, threshold)?;
        match &assignment.assignee {
            Some(user) => log::info!("Assigned {task_id} to {user}"),
            None => log::info!("Left {task_id} unassigned (best score {:?})", assignment.match_score),
        }
        Ok(assignment)
    }
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect()
}

//! Skill matcher service - picks the best assignee for a task
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Candidates are ranked by a total order:
//! 1. match score, descending
//! 2. current load (`current_tasks.len()`), ascending
//! 3. position in the candidate list, ascending

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::error::CoreError;
use crate::core::models::{Task, User};

/// Minimum match score for a task to be assigned
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Outcome of an assignment attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Id of the user the task was assigned to, if any
    pub assignee: Option<String>,
    /// Best score seen; `None` when there were no candidates
    pub match_score: Option<f64>,
}

impl Assignment {
    const fn no_candidates() -> Self {
        Self {
            assignee: None,
            match_score: None,
        }
    }
}

/// The top-ranked candidate for a task
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    /// Position in the candidate slice
    pub index: usize,
    /// Fraction of required skills covered
    pub score: f64,
}

/// Fraction of `required` covered by `skills`
///
/// Returns `None` when `required` is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn match_score(skills: &BTreeSet<String>, required: &BTreeSet<String>) -> Option<f64> {
    if required.is_empty() {
        return None;
    }
    let matched = required.intersection(skills).count();
    Some(matched as f64 / required.len() as f64)
}

/// Find the best candidate for a task without changing anything
///
/// Returns `Ok(None)` for an empty roster.
pub fn best_candidate(task: &Task, candidates: &[User]) -> Result<Option<RankedCandidate>, CoreError> {
    if task.required_skills.is_empty() {
        return Err(CoreError::InvalidTask(task.id.clone()));
    }

    let best = candidates
        .iter()
        .enumerate()
        .map(|(index, user)| {
            let score = match_score(&user.skills, &task.required_skills).unwrap_or(0.0);
            (RankedCandidate { index, score }, user.load())
        })
        .min_by(|(a, a_load), (b, b_load)| rank(a, *a_load, b, *b_load))
        .map(|(candidate, _)| candidate);

    Ok(best)
}

/// Every candidate, best first, in the same order [`best_candidate`] uses
pub fn ranked_candidates(task: &Task, candidates: &[User]) -> Result<Vec<RankedCandidate>, CoreError> {
    if task.required_skills.is_empty() {
        return Err(CoreError::InvalidTask(task.id.clone()));
    }

    let mut ranked: Vec<(RankedCandidate, usize)> = candidates
        .iter()
        .enumerate()
        .map(|(index, user)| {
            let score = match_score(&user.skills, &task.required_skills).unwrap_or(0.0);
            (RankedCandidate { index, score }, user.load())
        })
        .collect();
    ranked.sort_by(|(a, a_load), (b, b_load)| rank(a, *a_load, b, *b_load));

    Ok(ranked.into_iter().map(|(candidate, _)| candidate).collect())
}

fn rank(a: &RankedCandidate, a_load: usize, b: &RankedCandidate, b_load: usize) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(a_load.cmp(&b_load))
        .then(a.index.cmp(&b.index))
}

/// Assign a task to the best candidate if the match clears `threshold`
///
/// On success the task's `assigned_to` is set and the task id is appended to
/// the winner's `current_tasks`. A score below the threshold leaves both
/// untouched but is still reported.
///
/// # Errors
///
/// - [`CoreError::InvalidTask`] if the task has no required skills
/// - [`CoreError::AlreadyAssigned`] if the task already has an assignee
pub fn assign(task: &mut Task, candidates: &mut [User], threshold: f64) -> Result<Assignment, CoreError> {
    if let Some(user_id) = &task.assigned_to {
        return Err(CoreError::AlreadyAssigned {
            task_id: task.id.clone(),
            user_id: user_id.clone(),
        });
    }

    let Some(best) = best_candidate(task, candidates)? else {
        return Ok(Assignment::no_candidates());
    };

    if best.score < threshold {
        return Ok(Assignment {
            assignee: None,
            match_score: Some(best.score),
        });
    }

    let user = &mut candidates[best.index];
    task.assigned_to = Some(user.id.clone());
    user.current_tasks.push(task.id.clone());

    Ok(Assignment {
        assignee: Some(user.id.clone()),
        match_score: Some(best.score),
    })
}

//! Property-based tests for the matcher module
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::BTreeSet;

use proptest::prelude::*;
use skillpulse::core::models::{Task, User};
use skillpulse::core::services::{
    DEFAULT_THRESHOLD, assign, best_candidate, match_score, ranked_candidates,
};

const SKILLS: [&str; 6] = ["frontend", "react", "backend", "node", "ml", "python"];

fn skill_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(SKILLS.to_vec(), 0..=SKILLS.len())
        .prop_map(|s| s.into_iter().map(str::to_string).collect())
}

fn required_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(SKILLS.to_vec(), 1..=SKILLS.len())
        .prop_map(|s| s.into_iter().map(str::to_string).collect())
}

fn roster(skills: Vec<BTreeSet<String>>) -> Vec<User> {
    skills
        .into_iter()
        .enumerate()
        .map(|(i, s)| User::new(format!("u{i}"), format!("User {i}"), s))
        .collect()
}

proptest! {
    /// Score is the covered fraction of the required skills
    #[test]
    fn score_is_covered_fraction(skills in skill_set(), required in required_set()) {
        let covered = required.intersection(&skills).count();
        let score = match_score(&skills, &required).unwrap();
        prop_assert!((score - covered as f64 / required.len() as f64).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Assignment happens exactly when the best score clears the threshold
    #[test]
    fn assigned_iff_best_score_clears_threshold(
        users in prop::collection::vec(skill_set(), 1..6),
        required in required_set(),
    ) {
        let mut users = roster(users);
        let mut task = Task::new("t1", "Task", required, None);
        let best = best_candidate(&task, &users).unwrap().unwrap();

        let outcome = assign(&mut task, &mut users, DEFAULT_THRESHOLD).unwrap();
        prop_assert_eq!(outcome.match_score, Some(best.score));
        prop_assert_eq!(outcome.assignee.is_some(), best.score >= DEFAULT_THRESHOLD);
        prop_assert_eq!(task.assigned_to.clone(), outcome.assignee.clone());

        let holders: Vec<&User> = users.iter().filter(|u| !u.current_tasks.is_empty()).collect();
        if let Some(assignee) = outcome.assignee {
            prop_assert_eq!(holders.len(), 1);
            prop_assert_eq!(&holders[0].id, &assignee);
        } else {
            prop_assert!(holders.is_empty());
        }
    }

    /// No candidate scores higher than the chosen one
    #[test]
    fn best_candidate_has_max_score(
        users in prop::collection::vec(skill_set(), 1..6),
        required in required_set(),
    ) {
        let users = roster(users);
        let task = Task::new("t1", "Task", required.clone(), None);
        let best = best_candidate(&task, &users).unwrap().unwrap();

        for user in &users {
            prop_assert!(match_score(&user.skills, &required).unwrap() <= best.score);
        }
    }

    /// The ranked list leads with the matcher's pick and never increases in score
    #[test]
    fn ranked_list_agrees_with_best_candidate(
        users in prop::collection::vec(skill_set(), 1..6),
        loads in prop::collection::vec(0usize..3, 6),
        required in required_set(),
    ) {
        let mut users = roster(users);
        for (user, load) in users.iter_mut().zip(&loads) {
            user.current_tasks = (0..*load).map(|i| format!("x{i}")).collect();
        }
        let task = Task::new("t1", "Task", required, None);

        let ranked = ranked_candidates(&task, &users).unwrap();
        let best = best_candidate(&task, &users).unwrap().unwrap();
        prop_assert_eq!(ranked.len(), users.len());
        prop_assert_eq!(ranked[0], best);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(users[pair[0].index].load() <= users[pair[1].index].load());
            }
        }
    }

    /// Identical candidates resolve to the earliest listed
    #[test]
    fn full_tie_picks_first(skills in skill_set(), required in required_set(), n in 2usize..6) {
        let users = roster(vec![skills; n]);
        let task = Task::new("t1", "Task", required, None);
        let best = best_candidate(&task, &users).unwrap().unwrap();
        prop_assert_eq!(best.index, 0);
    }

    /// An empty roster never assigns and never fails
    #[test]
    fn empty_roster_never_assigns(required in required_set()) {
        let mut task = Task::new("t1", "Task", required, None);
        let outcome = assign(&mut task, &mut [], DEFAULT_THRESHOLD).unwrap();
        prop_assert!(outcome.assignee.is_none());
        prop_assert!(outcome.match_score.is_none());
        prop_assert!(!task.is_assigned());
    }
}

#[test]
fn equal_score_prefers_lighter_load() {
    let mut users = roster(vec![
        ["react".to_string()].into(),
        ["react".to_string()].into(),
    ]);
    users[0].current_tasks.push("t0".to_string());

    let mut task = Task::new("t1", "Task", ["react"], None);
    let outcome = assign(&mut task, &mut users, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(outcome.assignee.as_deref(), Some("u1"));
    assert_eq!(users[1].current_tasks, vec!["t1"]);
}

#[test]
fn half_coverage_is_enough() {
    let mut users = roster(vec![["react".to_string()].into()]);
    let mut task = Task::new("t1", "Task", ["react", "node"], None);
    let outcome = assign(&mut task, &mut users, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(outcome.match_score, Some(0.5));
    assert_eq!(outcome.assignee.as_deref(), Some("u0"));
}

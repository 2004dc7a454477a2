//! Tests for the behavior scorer and alert generator
//!
//! Property tests for the formulas plus the worked leaderboard example.

use proptest::prelude::*;
use skillpulse::core::models::{
    AlertKind, BehaviorRecord, BehaviorUpdate, FileEdits, Mismatch, TaskContext, TaskStatus,
    Timestamp,
};
use skillpulse::core::services::scorer::accuracy;
use skillpulse::core::services::{
    DEFAULT_LEADERBOARD_SIZE, apply_update, compute_metrics, generate_alerts, leaderboard,
};

use crate::common::{HOUR, NOW, RecordBuilder, hours_ago};

proptest! {
    /// Zero total edits always means perfect accuracy
    #[test]
    fn zero_edits_is_perfect_accuracy(reverts in 0u64..10) {
        let edits = FileEdits { total: 0, reverts: 0 };
        prop_assert!((accuracy(&edits) - 1.0).abs() < f64::EPSILON);
        // reverts without edits are floored against a total of 1
        let edits = FileEdits { total: 0, reverts };
        prop_assert!((accuracy(&edits) - (1.0 - reverts as f64)).abs() < 1e-12);
    }

    /// Metrics are always finite
    #[test]
    fn metrics_are_finite(
        commits in 0u64..10_000,
        age_ms in 0i64..(1000 * HOUR),
        total in 0u64..1000,
        reverts in 0u64..1000,
    ) {
        let record = BehaviorRecord::new(commits, NOW - age_ms, total, reverts);
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            let m = compute_metrics(&record, status, NOW);
            prop_assert!(m.activity.is_finite());
            prop_assert!(m.staleness.is_finite() && m.staleness >= 0.0);
            prop_assert!(m.speed.is_finite());
            prop_assert!(m.accuracy.is_finite());
            prop_assert!(m.risk_score.is_finite());
        }
    }

    /// Leaderboard is bounded and sorted descending
    #[test]
    fn leaderboard_bounded_and_sorted(
        rows in prop::collection::vec((0u64..50, 0i64..48, 0u64..20, 0u64..20), 0..12),
    ) {
        let records: Vec<(String, BehaviorRecord)> = rows
            .iter()
            .enumerate()
            .map(|(i, (c, h, t, r))| (format!("u{i}"), BehaviorRecord::new(*c, hours_ago(*h), *t, *r)))
            .collect();
        let board = leaderboard(
            records.iter().map(|(id, r)| (id.as_str(), r)),
            NOW,
            DEFAULT_LEADERBOARD_SIZE,
        );

        prop_assert!(board.len() <= DEFAULT_LEADERBOARD_SIZE);
        prop_assert_eq!(board.len(), records.len().min(DEFAULT_LEADERBOARD_SIZE));
        for pair in board.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// A commits-only update keeps everything else
    #[test]
    fn commits_update_keeps_other_fields(
        before in 0u64..100,
        after in 0u64..100,
        total in 0u64..50,
        reverts in 0u64..50,
    ) {
        let prior = BehaviorRecord::new(before, hours_ago(3), total, reverts);
        let update = BehaviorUpdate { commits: Some(after), ..BehaviorUpdate::default() };
        let merged = apply_update(Some(&prior), &update, NOW);

        prop_assert_eq!(merged.commits, after);
        prop_assert_eq!(merged.file_edits, prior.file_edits);
        prop_assert_eq!(merged.last_commit_at, prior.last_commit_at);
    }
}

#[test]
fn leaderboard_worked_example() {
    let u1 = RecordBuilder::new()
        .commits(5)
        .last_commit_hours_ago(2)
        .edits(10, 1)
        .build();
    let u2 = RecordBuilder::new()
        .commits(2)
        .last_commit_hours_ago(10)
        .edits(5, 2)
        .build();

    let board = leaderboard([("u2", &u2), ("u1", &u1)], NOW, DEFAULT_LEADERBOARD_SIZE);
    assert_eq!(board[0].user_id, "u1");
    assert_eq!(board[1].user_id, "u2");
    assert!((board[0].score - 2.37).abs() < 1e-9);
    assert!((board[1].score - (0.8 + 0.3 / 11.0 + 0.18)).abs() < 1e-9);
}

#[test]
fn leaderboard_ties_keep_input_order() {
    let r = RecordBuilder::new().commits(1).last_commit_hours_ago(1).build();
    let board = leaderboard([("b", &r), ("a", &r), ("c", &r)], NOW, 5);
    let ids: Vec<&str> = board.iter().map(|e| e.user_id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

#[test]
fn mismatch_boundary_at_four_hours() {
    let at = RecordBuilder::new().commits(1).last_commit_hours_ago(4).build();
    assert_eq!(compute_metrics(&at, TaskStatus::InProgress, NOW).mismatch, Mismatch::Ok);

    let past = BehaviorRecord {
        last_commit_at: Some(NOW - 4 * HOUR - 1000),
        ..at
    };
    assert_eq!(
        compute_metrics(&past, TaskStatus::InProgress, NOW).mismatch,
        Mismatch::HighRisk
    );
    assert_eq!(compute_metrics(&past, TaskStatus::Todo, NOW).mismatch, Mismatch::Ok);
}

#[test]
fn metrics_example_values() {
    let record = RecordBuilder::new()
        .commits(12)
        .last_commit_hours_ago(6)
        .edits(20, 5)
        .build();
    let m = compute_metrics(&record, TaskStatus::InProgress, NOW);

    assert!((m.activity - 0.5).abs() < 1e-12);
    assert!((m.staleness - 6.0).abs() < 1e-12);
    assert!((m.speed - 2.0).abs() < 1e-12);
    assert!((m.accuracy - 0.75).abs() < 1e-12);
    assert_eq!(m.mismatch, Mismatch::HighRisk);
    assert!((m.risk_score - 0.5).abs() < 1e-12);
}

#[test]
fn update_prefers_first_timestamp() {
    let prior = RecordBuilder::new().commits(3).last_commit_hours_ago(30).build();
    let update = BehaviorUpdate {
        timestamps: Some(vec![
            Timestamp::Text("2023-11-14T20:13:20Z".to_string()),
            Timestamp::Millis(0),
        ]),
        last_commit_at: Some(1),
        ..BehaviorUpdate::default()
    };
    let merged = apply_update(Some(&prior), &update, NOW);
    assert_eq!(merged.last_commit_at, Some(hours_ago(2)));
}

#[test]
fn update_for_new_user_starts_now() {
    let merged = apply_update(None, &BehaviorUpdate::default(), NOW);
    assert_eq!(merged.commits, 0);
    assert_eq!(merged.last_commit_at, Some(NOW));
    assert!(merged.file_edits.is_none());
}

#[test]
fn stale_deadline_in_progress_raises_all_alerts() {
    let record = RecordBuilder::new().commits(2).last_commit_hours_ago(20).build();
    let metrics = compute_metrics(&record, TaskStatus::InProgress, NOW);
    let context = TaskContext {
        status: TaskStatus::InProgress,
        deadline_hours: Some(6.0),
    };

    let kinds: Vec<AlertKind> = generate_alerts("u1", &metrics, &context)
        .into_iter()
        .map(|a| a.kind)
        .collect();
    assert_eq!(
        kinds,
        [AlertKind::Inactivity, AlertKind::DeadlineRisk, AlertKind::ProgressMismatch]
    );
}

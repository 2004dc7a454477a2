//! Behavior scorer service - derives metrics and rankings from activity counters
//!
//! Everything here is a pure function of a record and the current time
//! (`now_ms`, epoch millis), so callers decide where "now" comes from.
//!
//! Division guards are part of the formulas: inactivity and edit totals are
//! floored at 1 before dividing, so no result is ever infinite or NaN.

use crate::core::models::{
    BehaviorRecord, BehaviorUpdate, FileEdits, LeaderboardEntry, Metrics, Mismatch, TaskStatus,
    Timestamp,
};

/// Milliseconds in one hour
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Number of leaderboard entries returned by default
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

/// Inactivity (hours) above which an in-progress task is a mismatch
const MISMATCH_HOURS: f64 = 4.0;

/// Inactivity (hours) above which risk is at its highest tier
const HIGH_RISK_HOURS: f64 = 8.0;

/// Assumed inactivity when no commit time was ever recorded
const UNKNOWN_INACTIVITY_HOURS: f64 = 24.0;

/// Accuracy term used by the leaderboard when no edits were recorded
const UNKNOWN_ACCURACY: f64 = 0.8;

const COMMIT_WEIGHT: f64 = 0.4;
const RECENCY_WEIGHT: f64 = 0.3;
const ACCURACY_WEIGHT: f64 = 0.3;

/// Hours since the record's last commit, never negative
///
/// A record without a commit time counts as 24 hours inactive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_inactive(record: &BehaviorRecord, now_ms: i64) -> f64 {
    record.last_commit_at.map_or(UNKNOWN_INACTIVITY_HOURS, |last| {
        (now_ms.saturating_sub(last) as f64 / MILLIS_PER_HOUR).max(0.0)
    })
}

/// `1 - reverts / max(1, total)`
///
/// Not clamped: more reverts than edits yields a negative value.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn accuracy(edits: &FileEdits) -> f64 {
    1.0 - edits.reverts as f64 / edits.total.max(1) as f64
}

/// Risk tier from inactivity: 3 above 8h, 2 above 4h, otherwise 1
#[must_use]
pub fn risk_level(hours_inactive: f64) -> u8 {
    if hours_inactive > HIGH_RISK_HOURS {
        3
    } else if hours_inactive > MISMATCH_HOURS {
        2
    } else {
        1
    }
}

/// Derive metrics for one user
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_metrics(record: &BehaviorRecord, task_status: TaskStatus, now_ms: i64) -> Metrics {
    let hours = hours_inactive(record, now_ms);
    let commits = record.commits as f64;
    let accuracy = accuracy(&record.file_edits.unwrap_or_default());

    let mismatch = if task_status == TaskStatus::InProgress && hours > MISMATCH_HOURS {
        Mismatch::HighRisk
    } else {
        Mismatch::Ok
    };

    Metrics {
        activity: commits / 24.0,
        staleness: hours,
        speed: commits / hours.max(1.0),
        accuracy,
        mismatch,
        risk_score: f64::from(risk_level(hours)) * (1.0 - accuracy),
    }
}

/// Composite leaderboard score for one user
///
/// `commits*0.4 + 1/(1+hours)*0.3 + accuracy*0.3`, with 0.8 standing in for
/// accuracy when no edits were recorded.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn leaderboard_score(record: &BehaviorRecord, now_ms: i64) -> f64 {
    let recency = 1.0 / (1.0 + hours_inactive(record, now_ms));
    let accuracy = record.file_edits.as_ref().map_or(UNKNOWN_ACCURACY, accuracy);

    (record.commits as f64).mul_add(
        COMMIT_WEIGHT,
        recency.mul_add(RECENCY_WEIGHT, accuracy * ACCURACY_WEIGHT),
    )
}

/// Rank users by leaderboard score, highest first, keeping at most `size`
///
/// The sort is stable: exact ties keep their input order.
#[must_use]
pub fn leaderboard<'a, I>(records: I, now_ms: i64, size: usize) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = (&'a str, &'a BehaviorRecord)>,
{
    let mut entries: Vec<LeaderboardEntry> = records
        .into_iter()
        .map(|(user_id, record)| LeaderboardEntry {
            user_id: user_id.to_string(),
            score: leaderboard_score(record, now_ms),
        })
        .collect();

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries.truncate(size);
    entries
}

/// Merge a partial update over the stored record
///
/// Present fields overwrite, absent fields are kept. The last commit time is
/// taken from, in order:
/// 1. the first entry of `timestamps`, if it parses
/// 2. an explicit `lastCommit` in the update
/// 3. `now_ms` when there was no prior record
/// 4. the prior record's value
#[must_use]
pub fn apply_update(
    prior: Option<&BehaviorRecord>,
    update: &BehaviorUpdate,
    now_ms: i64,
) -> BehaviorRecord {
    let mut record = prior.copied().unwrap_or_default();

    if let Some(commits) = update.commits {
        record.commits = commits;
    }
    if let Some(edits) = update.file_edits {
        record.file_edits = Some(edits);
    }

    record.last_commit_at = update
        .timestamps
        .as_deref()
        .and_then(<[Timestamp]>::first)
        .and_then(Timestamp::to_millis)
        .or(update.last_commit_at)
        .or_else(|| prior.map_or(Some(now_ms), |p| p.last_commit_at));

    record
}

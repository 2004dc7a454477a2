//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{LeaderboardEntry, Metrics, Mismatch, TaskStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl OutputMode {
    /// Pick the mode from the `--json` flag
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }
}

/// Metrics for one user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    /// User the metrics describe
    pub user_id: String,
    /// Task status the mismatch flag was computed against
    pub task_status: TaskStatus,
    /// The derived metrics
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Top of the leaderboard
#[derive(Debug, Serialize)]
pub struct LeaderboardReport {
    /// Entries, best first
    pub entries: Vec<LeaderboardEntry>,
}

/// One roster member scored against a skill set
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestCandidate {
    /// User id
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Fraction of the requested skills covered
    pub score: f64,
    /// Tasks currently held
    pub load: usize,
}

/// Dry-run assignment for a skill set
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestReport {
    /// Requested skills
    pub skills: Vec<String>,
    /// Minimum score for assignment
    pub threshold: f64,
    /// User the matcher would pick, if the best score clears the threshold
    pub assignee: Option<String>,
    /// Every roster member, best match first
    pub candidates: Vec<SuggestCandidate>,
}

impl MetricsReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let m = &self.metrics;
        println!("Metrics for {} (task {})\n", self.user_id.bold(), self.task_status);
        println!("  activity    {:.3} commits/day", m.activity);
        println!("  staleness   {:.1} h", m.staleness);
        println!("  speed       {:.3}", m.speed);
        println!("  accuracy    {:.3}", m.accuracy);
        println!("  risk score  {:.3}", m.risk_score);
        match m.mismatch {
            Mismatch::Ok => println!("  mismatch    {}", "OK".green()),
            Mismatch::HighRisk => println!("  mismatch    {}", "HIGH_RISK".red().bold()),
        }
    }
}

impl LeaderboardReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(&self.entries),
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("No behavior records yet.");
            return;
        }

        println!("Leaderboard:\n");
        for (rank, entry) in self.entries.iter().enumerate() {
            println!("  {:>2}. {:<16} {:.3}", rank + 1, entry.user_id.bold(), entry.score);
        }
    }
}

impl SuggestReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Skills: {}\n", self.skills.join(", "));

        if self.candidates.is_empty() {
            println!("No users on the roster.");
            return;
        }

        for c in &self.candidates {
            let marker = if self.assignee.as_deref() == Some(c.user_id.as_str()) {
                "*".green().bold()
            } else {
                " ".normal()
            };
            println!(
                "  {marker} {:<12} {:<16} {:.2}  ({} task(s))",
                c.user_id, c.name, c.score, c.load
            );
        }
        println!();

        match &self.assignee {
            Some(user) => println!("Would assign to {}", user.green().bold()),
            None => println!(
                "{}",
                format!("No candidate reaches the {:.2} threshold", self.threshold).yellow()
            ),
        }
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

//! Suggest command - dry-run the matcher against the configured roster

use skillpulse::config::Config;
use skillpulse::core::models::Task;
use skillpulse::core::services::ranked_candidates;
use skillpulse::output::{OutputMode, SuggestCandidate, SuggestReport};

/// Score every roster member against `skills` without assigning anything
pub fn suggest(config: &Config, skills: &[String], output_mode: OutputMode) -> anyhow::Result<()> {
    let board = config.seed_board()?;
    let skills: Vec<String> = skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let task = Task::new("suggest", "", skills.iter().cloned(), None);

    let ranked = ranked_candidates(&task, board.users())?;
    let threshold = config.matching.threshold;
    let assignee = ranked
        .first()
        .filter(|best| best.score >= threshold)
        .map(|best| board.users()[best.index].id.clone());

    let candidates: Vec<SuggestCandidate> = ranked
        .iter()
        .map(|c| {
            let user = &board.users()[c.index];
            SuggestCandidate {
                user_id: user.id.clone(),
                name: user.name.clone(),
                score: c.score,
                load: user.load(),
            }
        })
        .collect();

    SuggestReport {
        skills,
        threshold,
        assignee,
        candidates,
    }
    .render(output_mode);
    Ok(())
}

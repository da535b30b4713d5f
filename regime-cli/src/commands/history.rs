use anyhow::{Context, Result};

use regime_core::{QuestionLogEntry, QuestionRepository};

pub async fn run(
    repo: &dyn QuestionRepository,
    limit: Option<u32>,
) -> Result<String> {
    let entries = repo
        .list_questions(limit)
        .await
        .context("failed to read question history")?;

    if entries.is_empty() {
        return Ok("No questions asked yet.".to_string());
    }
    Ok(entries.iter().map(render_entry).collect::<Vec<_>>().join("\n\n"))
}

fn render_entry(entry: &QuestionLogEntry) -> String {
    format!(
        "#{} {}\nQ: {}\nA: {}",
        entry.id,
        entry.asked_at.format("%Y-%m-%d %H:%M:%S UTC"),
        entry.question,
        entry.answer
    )
}

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use wiki_quiz::{App, QuizClient, QuizRecord, Tab, ViewMode};

pub async fn history(
    client: &QuizClient,
    app: &mut App,
    show: Option<usize>,
    take: Option<usize>,
) -> Result<()> {
    app.tab = Tab::History;
    let view = &mut app.history;

    let token = view.begin();
    let result = client.history().await;
    view.finish(token, result);

    if let Some(message) = view.error() {
        bail!("{message}");
    }

    let (position, view_mode) = match (show, take) {
        (Some(position), _) => (position, ViewMode::Display),
        (None, Some(position)) => (position, ViewMode::Take),
        (None, None) => return list(view.records(), io::stdout().lock()),
    };

    // Positions are 1-based, as printed by the listing.
    let record = match position.checked_sub(1) {
        Some(index) => view.open(index).cloned(),
        None => None,
    }
    .with_context(|| format!("No quiz at position {position}"))?;
    view.view_mode = view_mode;

    let result = crate::present(record, view.view_mode);
    view.close();

    result
}

fn list(records: &[Arc<QuizRecord>], mut output: impl Write) -> Result<()> {
    if records.is_empty() {
        writeln!(output, "No quizzes generated yet.")?;
        return Ok(());
    }

    for (index, record) in records.iter().enumerate() {
        write!(output, "{:>3}. {}", index + 1, record.title)?;

        if let Some(url) = &record.url {
            write!(output, "  <{url}>")?;
        }
        if let Some(created_at) = record.created_at {
            write!(output, "  {}", created_at.format("%Y-%m-%d %H:%M"))?;
        }

        writeln!(output)?;
    }

    Ok(())
}

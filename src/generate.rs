use anyhow::{anyhow, bail, Result};
use wiki_quiz::{App, QuizClient, Tab, ViewMode, EMPTY_URL_MESSAGE};

pub async fn generate(client: &QuizClient, app: &mut App, url: String, take: bool) -> Result<()> {
    app.tab = Tab::Generate;
    let view = &mut app.generate;

    let Some(token) = view.begin(url) else {
        bail!("{}", view.error().unwrap_or(EMPTY_URL_MESSAGE));
    };

    eprintln!("Scraping Wikipedia and generating quiz...");
    let result = client.generate(&view.url).await;
    view.finish(token, result);

    if let Some(message) = view.error() {
        bail!("{message}");
    }

    let record = view
        .record()
        .cloned()
        .ok_or_else(|| anyhow!("The service returned no quiz"))?;

    if take {
        view.view_mode = ViewMode::Take;
    }

    crate::present(record, view.view_mode)
}

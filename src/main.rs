use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;
use wiki_quiz::{App, Config, QuizClient, QuizRecord, ViewMode};

mod generate;
mod history;
mod render;
mod take;

const DEFAULT_API_BASE_URL: &str = "https://wiki-quiz-app-sxmx.onrender.com";

#[derive(Parser)]
#[clap(name = "wiki-quiz", about = "Generate and take quizzes from Wikipedia articles")]
struct WikiQuiz {
    /// Base URL of the quiz generation service
    #[clap(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL, value_parser)]
    api_base_url: Url,

    /// Request timeout in seconds
    #[clap(long, env = "API_TIMEOUT_SECS", default_value_t = 120, value_parser)]
    timeout_secs: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a quiz from a Wikipedia article
    Generate {
        #[clap(short, long, value_parser, value_name = "URL")]
        url: String,

        /// Take the quiz instead of showing the answers
        #[clap(long, action)]
        take: bool,
    },
    /// List previously generated quizzes
    History {
        /// Show the quiz at this position of the listing
        #[clap(long, value_parser, value_name = "N", conflicts_with = "take")]
        show: Option<usize>,

        /// Take the quiz at this position of the listing
        #[clap(long, value_parser, value_name = "N")]
        take: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(feature = "env-file")]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let wiki_quiz = WikiQuiz::parse();

    tracing::debug!(base_url = %wiki_quiz.api_base_url, "Using quiz service");

    let config = Config::new(wiki_quiz.api_base_url)
        .with_timeout(Duration::from_secs(wiki_quiz.timeout_secs));
    let client = QuizClient::new(config).context("Could not create the quiz client")?;
    let mut app = App::new();

    match wiki_quiz.command {
        Command::Generate { url, take } => {
            generate::generate(&client, &mut app, url, take).await
        }
        Command::History { show, take } => history::history(&client, &mut app, show, take).await,
    }
}

fn present(record: Arc<QuizRecord>, view_mode: ViewMode) -> Result<()> {
    match view_mode {
        ViewMode::Display => render::render(&record, io::stdout().lock()),
        ViewMode::Take => take::take(record, io::stdin().lock(), io::stdout().lock()),
    }
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use repolens::app;
use repolens::github::GithubClient;
use repolens::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "repolens", version, about = "TUI browser for a GitHub user's repositories")]
struct Cli {
    /// GitHub username to open directly, skipping the entry prompt
    username: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("repolens starting");

    let client = match GithubClient::new(&config.github.api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create GitHub client: {e}");
            std::process::exit(1);
        }
    };

    // Run the TUI event loop
    app::event_loop::run(config, client, cli.username).await
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "repolens.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("repolens=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

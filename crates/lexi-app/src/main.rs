use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use lexi_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "lexi", about = "Look up English words from the terminal")]
struct Cli {
    /// JSON config file, environment variables are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Look up a single word, print the result and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::new(),
    }
    .normalized();

    let state = Arc::new(AppState::new(config)?);

    if let Some(query) = cli.query {
        return lookup_once(&state, &query).await;
    }

    let controller = AppController::new(state).await;
    let cancel = controller.cancel_token();
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = cancel.cancelled() => {
            tracing::info!("Closing");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::debug!("task stopped with error: {e}");
        }
    }

    Ok(())
}

/// One-shot mode: surfaces lookup failures instead of "no results"
async fn lookup_once(state: &AppState, query: &str) -> anyhow::Result<()> {
    let ui_config = state.config.read().await.ui.clone();

    if !state.service.accepts_query(query) {
        println!("{}", ui_config.short_query_message);
        return Ok(());
    }

    let words = state.service.lookup(query).await?;
    let results = events::display_results(&state.service, &words);
    let event = if results.is_empty() {
        lexi_types::AppEvent::ShowMessage(ui_config.no_results_message.clone())
    } else {
        lexi_types::AppEvent::ShowResults(results)
    };

    if let Some(text) = ui::render(&event, &ui_config) {
        println!("{}", text);
    }

    Ok(())
}

use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;

use kanal::AsyncReceiver;
use lexi_config::Config;
use lexi_config::ui::UiConfig;
use lexi_types::{AppEvent, DisplayResult};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

const HELP: &str = "Type a word to search. :open N, :bookmark N, :recent, :saved, :quit";

/// Terminal front-end: print whatever the app sends
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui_config = config.read().await.ui.clone();

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => event?,
        };

        if let Some(text) = render(&event, &ui_config) {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Text shown for an event, `None` for events with nothing to show
pub fn render(event: &AppEvent, config: &UiConfig) -> Option<String> {
    match event {
        AppEvent::BackendReady => Some(HELP.to_string()),
        AppEvent::LoadingChanged(true) => Some("Searching...".to_string()),
        AppEvent::LoadingChanged(false) => None,
        AppEvent::ShowMessage(message) => Some(message.clone()),
        AppEvent::ShowResults(results) => Some(render_list(results, config.max_results)),
        AppEvent::ShowDetail(result) => Some(render_detail(result)),
        AppEvent::ShowRecent(results) => Some(if results.is_empty() {
            "No recent searches".to_string()
        } else {
            format!("Recent searches\n{}", render_list(results, config.max_results))
        }),
        AppEvent::ShowBookmarks(results) => Some(if results.is_empty() {
            "No saved words".to_string()
        } else {
            format!("Saved words\n{}", render_list(results, results.len()))
        }),
        AppEvent::TextInput(_) | AppEvent::UiEvent(_) => None,
    }
}

fn render_list(results: &[DisplayResult], max: usize) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().take(max).enumerate() {
        let marker = if result.bookmarked { "*" } else { " " };
        let _ = writeln!(
            out,
            "{:>3}.{} {} - {}",
            i + 1,
            marker,
            result.term,
            result.definition
        );
    }
    if results.len() > max {
        let _ = writeln!(out, "     ... {} more", results.len() - max);
    }
    out.trim_end().to_string()
}

fn render_detail(result: &DisplayResult) -> String {
    format!(
        "{}{}\n  {}\n  [{}]",
        result.term,
        if result.bookmarked { " (saved)" } else { "" },
        result.definition,
        result.language
    )
}

use std::sync::Arc;

use kanal::AsyncSender;
use lexi_types::AppEvent;

use crate::state::{AppState, ListFocus};

/// Kick off a search for the current input.
///
/// Searches run as detached tasks so a slow lookup never blocks the event
/// loop; their results reach the UI through store notifications.
pub async fn handle_text_input(
    text: String,
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let service = state.service.clone();

    if !service.accepts_query(&text) {
        // Still invalidates whatever is in flight
        service.search(&text).await;

        if !text.is_empty() {
            let message = state.config.read().await.ui.short_query_message.clone();
            app_to_ui_tx.send(AppEvent::ShowMessage(message)).await?;
        }
        return Ok(());
    }

    tracing::debug!("Searching '{}'", text);
    state.set_focus(ListFocus::Results);
    tokio::spawn(async move {
        let words = service.search(&text).await;
        tracing::debug!("'{}': {} words", text, words.len());
    });

    Ok(())
}

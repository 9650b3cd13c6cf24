use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_core::{StoreEvent, WordLookupService};
use lexi_types::{AppEvent, DisplayResult, UiEvent, Word};
use tokio_util::sync::CancellationToken;

use crate::state::{AppState, ListFocus};

pub mod select_result;
pub mod text_input;
pub mod toggle_bookmark;

use select_result::handle_result_selection;
use text_input::handle_text_input;
use toggle_bookmark::handle_bookmark_toggle;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(state.clone(), &app_to_ui_tx, &cancel, event).await?;
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

pub async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            handle_text_input(text, state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::SelectResult(index)) => {
            handle_result_selection(index, &state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ToggleBookmark(index)) => {
            handle_bookmark_toggle(index, &state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ListRecent) => {
            let words = state.service.recent_words();
            let recent = display_results(&state.service, &words);
            state.set_focus(ListFocus::Recent(words));
            app_to_ui_tx.send(AppEvent::ShowRecent(recent)).await?;
        }
        AppEvent::UiEvent(UiEvent::ListBookmarks) => {
            let words = state.service.bookmarked_words();
            let saved = display_results(&state.service, &words);
            state.set_focus(ListFocus::Saved(words));
            app_to_ui_tx.send(AppEvent::ShowBookmarks(saved)).await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::info!("Close requested");
            cancel.cancel();
        }
        // UI-only events, ignore in backend
        AppEvent::ShowResults(_)
        | AppEvent::ShowMessage(_)
        | AppEvent::ShowDetail(_)
        | AppEvent::ShowRecent(_)
        | AppEvent::ShowBookmarks(_)
        | AppEvent::LoadingChanged(_)
        | AppEvent::BackendReady => {}
    }

    Ok(())
}

/// Turn store notifications into UI events
pub async fn forward_store_events(
    state: Arc<AppState>,
    store_rx: AsyncReceiver<StoreEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let no_results_message = state.config.read().await.ui.no_results_message.clone();

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = store_rx.recv() => event?,
        };

        match event {
            StoreEvent::Loading(loading) => {
                app_to_ui_tx.send(AppEvent::LoadingChanged(loading)).await?;
            }
            StoreEvent::ResultsChanged { generation, words } => {
                if generation < state.service.store().latest_generation() {
                    tracing::debug!("search #{}: stale results dropped", generation);
                    continue;
                }

                tracing::debug!("search #{}: {} results", generation, words.len());
                state.set_focus(ListFocus::Results);
                let event = if words.is_empty() {
                    AppEvent::ShowMessage(no_results_message.clone())
                } else {
                    AppEvent::ShowResults(display_results(&state.service, &words))
                };
                app_to_ui_tx.send(event).await?;
            }
            StoreEvent::ResultsCleared { generation } => {
                tracing::debug!("search #{}: results cleared", generation);
            }
            StoreEvent::RecentChanged(words) => {
                tracing::debug!("Recent searches: {}", words.len());
            }
            StoreEvent::BookmarksChanged(words) => {
                tracing::debug!("Bookmarks: {}", words.len());
            }
        }
    }

    Ok(())
}

/// Bookmark state comes from the service, not the word's own flag
pub fn display_results(service: &WordLookupService, words: &[Word]) -> Vec<DisplayResult> {
    words
        .iter()
        .map(|word| DisplayResult {
            bookmarked: service.is_word_bookmarked(word),
            ..DisplayResult::from(word)
        })
        .collect()
}

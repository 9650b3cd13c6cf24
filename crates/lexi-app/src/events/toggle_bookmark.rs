use kanal::AsyncSender;
use lexi_types::AppEvent;

use super::display_results;
use crate::state::AppState;

/// Toggle by id, so an entry picked from `:saved` removes that exact bookmark
pub async fn handle_bookmark_toggle(
    index: usize,
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(word) = state.focused_word(index) else {
        app_to_ui_tx
            .send(AppEvent::ShowMessage(format!("No result #{}", index + 1)))
            .await?;
        return Ok(());
    };

    state.service.toggle_bookmark(&word);
    tracing::info!(
        "'{}' {}",
        word.original,
        if state.service.is_word_bookmarked(&word) {
            "saved"
        } else {
            "removed from saved words"
        }
    );

    if let Some(detail) = display_results(&state.service, &[word]).pop() {
        app_to_ui_tx.send(AppEvent::ShowDetail(detail)).await?;
    }

    Ok(())
}

use kanal::AsyncSender;
use lexi_types::AppEvent;

use super::display_results;
use crate::state::AppState;

/// Open an entry of the list in focus: remember it as recent and show its details
pub async fn handle_result_selection(
    index: usize,
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(word) = state.focused_word(index) else {
        tracing::debug!("Nothing at index {} of the list in focus", index);
        app_to_ui_tx
            .send(AppEvent::ShowMessage(format!("No result #{}", index + 1)))
            .await?;
        return Ok(());
    };

    state.service.add_to_recent(word.clone());

    if let Some(detail) = display_results(&state.service, &[word]).pop() {
        app_to_ui_tx.send(AppEvent::ShowDetail(detail)).await?;
    }

    Ok(())
}

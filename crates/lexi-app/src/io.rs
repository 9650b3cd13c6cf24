use std::io::BufRead;

use kanal::AsyncSender;
use lexi_types::{AppEvent, UiEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Map one line of terminal input to an app event.
///
/// Plain text is a search; `:open N` and `:bookmark N` act on the N-th
/// entry (1-based) of the last list printed: results, `:recent` or `:saved`.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::TextInput(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next()?;
    let index = parts
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1));

    let event = match (name, index) {
        ("open" | "o", Some(index)) => UiEvent::SelectResult(index),
        ("bookmark" | "b", Some(index)) => UiEvent::ToggleBookmark(index),
        ("recent" | "r", _) => UiEvent::ListRecent,
        ("saved" | "s", _) => UiEvent::ListBookmarks,
        ("quit" | "q", _) => UiEvent::Close,
        _ => return None,
    };

    Some(AppEvent::UiEvent(event))
}

/// Watcher for terminal input
pub async fn watcher_io(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (line_tx, mut line_rx) = mpsc::channel::<String>(64);

    // Blocking stdin reads live on a plain thread so runtime shutdown never waits on them
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = line_rx.recv() => line,
        };

        let Some(line) = line else {
            tracing::info!("Input closed");
            event_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            break;
        };

        match parse_command(&line) {
            Some(event) => event_tx.send(event).await?,
            None => tracing::warn!("Unknown command: {}", line),
        }
    }

    Ok(())
}

/*
[INPUT]:  Crossterm key events and deferred timer expirations
[OUTPUT]: AppEvent routing, key handling, and timer scheduling
[POS]:    TUI event layer
[UPDATE]: When changing keybindings or timer behavior
*/

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use taskdeck_core::PersistenceAdapter;
use tokio::sync::mpsc::UnboundedSender;

use crate::app::App;

/// How long a freshly added row keeps its highlight.
pub const NEW_TASK_HIGHLIGHT: Duration = Duration::from_millis(500);
/// How long a deleted row lingers (dimmed) before the state removal.
pub const DELETE_LINGER: Duration = Duration::from_millis(400);

#[derive(Debug)]
pub enum AppEvent {
    Input(CrosstermEvent),
    HighlightExpired(u64),
    DeleteElapsed(u64),
}

/// Handles a key event against the app state.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub fn handle_key_event<P: PersistenceAdapter>(
    app: &mut App<P>,
    tx: &UnboundedSender<AppEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('d') => {
                if let Some(id) = app.request_delete_selected() {
                    schedule_delete(tx.clone(), id);
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Enter => {
            if let Some(id) = app.submit_input() {
                schedule_highlight_expiry(tx.clone(), id);
            }
        }
        KeyCode::Backspace => {
            let _ = app.input.pop();
        }
        KeyCode::Tab => app.toggle_selected(),
        KeyCode::Delete => {
            if let Some(id) = app.request_delete_selected() {
                schedule_delete(tx.clone(), id);
            }
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(ch) => app.input.push(ch),
        _ => {}
    }
    false
}

/// One-shot timer holding only the task id and the channel sender. The
/// task may be deleted before it fires; applying the event is a no-op
/// then.
pub fn schedule_highlight_expiry(tx: UnboundedSender<AppEvent>, id: u64) {
    tokio::spawn(async move {
        tokio::time::sleep(NEW_TASK_HIGHLIGHT).await;
        let _ = tx.send(AppEvent::HighlightExpired(id));
    });
}

/// One-shot linger timer before the actual state removal. Not cancellable
/// and not coalesced; the removal it triggers is idempotent.
pub fn schedule_delete(tx: UnboundedSender<AppEvent>, id: u64) {
    tokio::spawn(async move {
        tokio::time::sleep(DELETE_LINGER).await;
        let _ = tx.send(AppEvent::DeleteElapsed(id));
    });
}

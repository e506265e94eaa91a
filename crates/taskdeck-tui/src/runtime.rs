/*
[INPUT]:  TaskStore, crossterm input events, deferred timer events
[OUTPUT]: Ratatui run loop applying mutations and redrawing frames
[POS]:    TUI runtime loop
[UPDATE]: When changing the event loop or redraw policy
*/

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use taskdeck_core::{JsonFileStorage, TaskStore};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::app::App;
use crate::events::{AppEvent, handle_key_event};
use crate::terminal::Screen;
use crate::ui::draw_ui;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Runs the TUI until quit. All store mutations happen on this task;
/// timers only post events back through the channel, so persistence
/// always completes before the frame that shows its effect.
pub async fn run_tui(store: TaskStore<JsonFileStorage>) -> Result<()> {
    let mut screen = Screen::enter()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();

    let input_tx = event_tx.clone();
    let input_shutdown_clone = input_shutdown.clone();
    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(AppEvent::Input(event));
                }
            }
        }
    });

    let mut app = App::new(store);
    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                if let Some(event) = maybe_event {
                    match event {
                        AppEvent::Input(CrosstermEvent::Key(key)) => {
                            if handle_key_event(&mut app, &event_tx, key) {
                                should_quit = true;
                            }
                        }
                        AppEvent::Input(_) => {}
                        AppEvent::HighlightExpired(id) => {
                            debug!(id, "highlight expired");
                            app.apply_highlight_expired(id);
                        }
                        AppEvent::DeleteElapsed(id) => {
                            debug!(id, "delete linger elapsed");
                            app.apply_delete_elapsed(id);
                        }
                    }
                }
            }
        }

        screen.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

/*
[INPUT]:  TaskStore handle, keyboard-driven input buffer, list selection
[OUTPUT]: App state helpers for rendering and task control
[POS]:    TUI app state - glue between the store and the view
[UPDATE]: When changing selection, input, or pending-delete behavior
*/

use std::collections::HashSet;

use ratatui::widgets::ListState;
use taskdeck_core::{PersistenceAdapter, Task, TaskStore};

/// View-side state wrapped around the store.
///
/// Deletion is two-phase: a requested delete only marks the row as
/// pending (rendered dimmed red) and the actual removal happens when the
/// linger timer posts `DeleteElapsed` back into the event loop.
pub struct App<P: PersistenceAdapter> {
    store: TaskStore<P>,
    pub input: String,
    pub list_state: ListState,
    pending_delete: HashSet<u64>,
    pub status_message: String,
}

impl<P: PersistenceAdapter> App<P> {
    pub fn new(store: TaskStore<P>) -> Self {
        let mut list_state = ListState::default();
        if !store.tasks().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            store,
            input: String::new(),
            list_state,
            pending_delete: HashSet::new(),
            status_message: "Ready".to_string(),
        }
    }

    /// Submits the input buffer as a new task. On success the input is
    /// cleared (focus never leaves it) and the new task's id is returned
    /// so the caller can schedule the highlight expiry. A blank buffer is
    /// a silent no-op.
    pub fn submit_input(&mut self) -> Option<u64> {
        let id = self.store.add_task(&self.input)?;
        self.input.clear();
        // The new task is prepended, so it becomes the selected row.
        self.list_state.select(Some(0));
        self.status_message = format!("task {id} added");
        Some(id)
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.store.toggle_complete(id) {
            let done = self.store.find(id).is_some_and(|task| task.completed);
            self.status_message = if done {
                format!("task {id} completed")
            } else {
                format!("task {id} reopened")
            };
        }
    }

    /// Marks the selected task for removal and returns its id so the
    /// caller can schedule the linger timer. Repeated requests return the
    /// id again; removal is idempotent, so duplicate timers are harmless.
    pub fn request_delete_selected(&mut self) -> Option<u64> {
        let id = self.selected_id()?;
        self.pending_delete.insert(id);
        self.status_message = format!("task {id} removed");
        Some(id)
    }

    pub fn apply_highlight_expired(&mut self, id: u64) {
        self.store.clear_just_added(id);
    }

    pub fn apply_delete_elapsed(&mut self, id: u64) {
        self.pending_delete.remove(&id);
        self.store.remove_task(id);
        self.clamp_selection();
    }

    pub fn is_pending_delete(&self, id: u64) -> bool {
        self.pending_delete.contains(&id)
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn selected_id(&self) -> Option<u64> {
        let idx = self.list_state.selected()?;
        self.store.tasks().get(idx).map(|task| task.id)
    }

    pub fn count_summary(&self) -> String {
        format!(
            "{} active / {} total",
            self.store.active_count(),
            self.store.total_count()
        )
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.store.total_count();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        let len = self.store.total_count();
        if len == 0 {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= len {
                self.list_state.select(Some(len - 1));
            }
        } else {
            self.list_state.select(Some(0));
        }
    }
}

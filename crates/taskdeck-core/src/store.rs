/*
[INPUT]:  User task mutations and a PersistenceAdapter
[OUTPUT]: TaskStore owning the collection, id assignment, and write-back
[POS]:    State manager - the core of the crate
[UPDATE]: When changing mutation semantics or the id invariant
*/

use tracing::{error, warn};

use crate::storage::PersistenceAdapter;
use crate::task::Task;

/// Owns the task collection, assigns identifiers, and writes every
/// mutation back through the adapter as a whole-collection snapshot.
///
/// Ids are session-monotonic: `next_id` is computed once at open time
/// from the stored maximum and only ever incremented afterwards, so an
/// add after a delete never reuses a previously assigned id.
pub struct TaskStore<P: PersistenceAdapter> {
    storage: P,
    tasks: Vec<Task>,
    next_id: u64,
}

impl<P: PersistenceAdapter> TaskStore<P> {
    /// Loads the collection from storage. Malformed stored data is logged
    /// and replaced with an empty collection; opening never fails.
    pub fn open(storage: P) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "failed to load tasks; starting empty");
                Vec::new()
            }
        };

        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        Self {
            storage,
            tasks,
            next_id,
        }
    }

    /// Adds a task to the top of the list and returns its id, or `None`
    /// if the trimmed description is empty (nothing is mutated or
    /// persisted in that case).
    pub fn add_task(&mut self, description: &str) -> Option<u64> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        self.tasks.insert(0, Task::new(id, description.to_string()));
        self.persist();
        Some(id)
    }

    /// Flips the completion state of the task with the given id. Unknown
    /// ids are a no-op; returns whether a task was toggled.
    pub fn toggle_complete(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Removes the task with the given id. Idempotent: an unknown id
    /// leaves the collection unchanged, and the snapshot is written back
    /// either way.
    pub fn remove_task(&mut self, id: u64) {
        self.tasks.retain(|task| task.id != id);
        self.persist();
    }

    /// Clears the just-added highlight marker. The task may have been
    /// deleted while the highlight timer was pending; that is a no-op.
    pub fn clear_just_added(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.just_added = false;
        }
        self.persist();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    // Write failures are logged, never raised; in-memory state stays
    // authoritative.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            error!(error = %err, "failed to persist tasks");
        }
    }
}

/*
[INPUT]:  Task identifiers and user-entered descriptions
[OUTPUT]: Task domain model with serde support
[POS]:    Data model layer
[UPDATE]: When changing persisted task fields
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry with identity, text, completion state, and
/// creation time.
///
/// `just_added` drives the one-shot highlight for freshly created rows.
/// It is cosmetic, never serialized, and always false after a load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub just_added: bool,
}

impl Task {
    /// Creates a task with the given id and an already-trimmed description.
    pub fn new(id: u64, description: String) -> Self {
        Self {
            id,
            description,
            completed: false,
            created_at: Utc::now(),
            just_added: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let task = Task::new(7, "water the plants".to_string());
        assert_eq!(task.id, 7);
        assert!(!task.completed);
        assert!(task.just_added);
    }

    #[test]
    fn just_added_is_not_serialized() {
        let task = Task::new(1, "ephemeral".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("just_added"));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert!(!back.just_added);
        assert_eq!(back.created_at, task.created_at);
    }
}

/*
[INPUT]:  Public API exports for taskdeck-core crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod storage;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use storage::{JsonFileStorage, PersistenceAdapter, StorageError};
pub use store::TaskStore;
pub use task::Task;

/*
[INPUT]:  Public API exports for taskdeck-tui crate
[OUTPUT]: Module declarations for the terminal front end
[POS]:    Crate root - library entry point for the taskdeck binary
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod events;
pub mod runtime;
mod terminal;
mod ui;

pub use app::App;

//! Infrastructure adapters for Gradebook.
//!
//! This crate implements the ports defined in
//! `gradebook-core::application::ports`. It contains the terminal I/O and
//! the report formats.

pub mod prompter;
pub mod renderer;

// Re-export commonly used adapters
pub use prompter::{ScriptedPrompter, TerminalPrompter};
pub use renderer::{JsonRenderer, TextRenderer};

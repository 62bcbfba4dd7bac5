//! Prompter adapters.

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

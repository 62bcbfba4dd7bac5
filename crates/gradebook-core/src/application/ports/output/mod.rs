//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gradebook-adapters` crate provides implementations.

use crate::domain::{RosterReport, TopPerformer};
use crate::error::GradebookResult;

/// Outcome of a single line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A line of input without its trailing newline.
    Line(String),
    /// The user pressed Ctrl-C while the line was being read.
    Interrupted,
    /// End of input; no further lines will arrive.
    Closed,
}

/// Port for interactive, line-oriented input.
///
/// Implemented by:
/// - `gradebook_adapters::prompter::TerminalPrompter` (production)
/// - `gradebook_adapters::prompter::ScriptedPrompter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Show `prompt` and read one line.
    fn read_line(&mut self, prompt: &str) -> GradebookResult<Reply>;

    /// Show a feedback message (rejected input, hints).
    fn notify(&mut self, message: &str) -> GradebookResult<()>;
}

/// Port for report formatting.
///
/// Implemented by:
/// - `gradebook_adapters::renderer::TextRenderer` (human readable)
/// - `gradebook_adapters::renderer::JsonRenderer` (machine readable)
pub trait ReportRenderer {
    /// Render the full roster report.
    fn render_report(&self, report: &RosterReport) -> GradebookResult<String>;

    /// Render the top performer, or the "none found" notice.
    fn render_top_performer(&self, top: Option<&TopPerformer>) -> GradebookResult<String>;
}

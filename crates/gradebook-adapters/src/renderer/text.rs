//! Plain-text report renderer.

use gradebook_core::{
    application::ports::ReportRenderer,
    domain::{RosterReport, TopPerformer},
    error::GradebookResult,
};

pub const EMPTY_ROSTER: &str = "No students in the roster.";
pub const NO_TOP_PERFORMER: &str =
    "No top student found. Either no students added or no grades available.";

/// Human-readable renderer.
///
/// Per-student averages and aggregates use one decimal place; the top
/// performer's average uses two.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for TextRenderer {
    fn render_report(&self, report: &RosterReport) -> GradebookResult<String> {
        if report.is_empty() {
            return Ok(EMPTY_ROSTER.to_string());
        }

        let mut lines: Vec<String> = report
            .students
            .iter()
            .map(|student| match student.average {
                Some(avg) => format!("{}'s average grade is {avg:.1}", student.name),
                None => format!("{}'s average grade is N/A", student.name),
            })
            .collect();

        if let (Some(low), Some(high)) = (report.lowest_grade, report.highest_grade) {
            lines.push(format!("Highest grade: {:.1}", f64::from(high)));
            lines.push(format!("Lowest grade: {:.1}", f64::from(low)));
        }

        if let Some(avg) = report.overall_average {
            lines.push(format!("Overall average: {avg:.1}"));
        }

        Ok(lines.join("\n"))
    }

    fn render_top_performer(&self, top: Option<&TopPerformer>) -> GradebookResult<String> {
        Ok(match top {
            Some(top) => format!(
                "Top performer: {} with an average grade of {:.2}",
                top.name, top.average
            ),
            None => NO_TOP_PERFORMER.to_string(),
        })
    }
}

//! Report value types produced by the roster.
//!
//! These are read-only snapshots; renderers in `gradebook-adapters` turn them
//! into text or JSON.

use serde::Serialize;

use crate::domain::value_objects::{Grade, StudentName};

/// One line of the per-student listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: StudentName,
    /// `None` when the student has no grades ("N/A").
    pub average: Option<f64>,
}

/// Full roster report.
///
/// Students without grades appear in `students` but contribute nothing to
/// `lowest_grade`, `highest_grade` or `overall_average`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReport {
    pub students: Vec<StudentSummary>,
    pub lowest_grade: Option<Grade>,
    pub highest_grade: Option<Grade>,
    /// Mean of the per-student averages, not a flat mean over every grade.
    pub overall_average: Option<f64>,
}

impl RosterReport {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// The student with the highest average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub name: StudentName,
    pub average: f64,
}

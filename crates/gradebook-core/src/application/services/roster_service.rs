//! Roster Service - the roster use cases.
//!
//! Owns the session's [`Roster`] and accepts raw caller input (names as typed,
//! grades as plain integers). Every value is validated before the roster is
//! touched, so a rejected call never leaves a partial change behind.

use tracing::{debug, info, instrument};

use crate::{
    domain::{DomainError, Grade, Roster, RosterReport, Student, StudentName, TopPerformer},
    error::GradebookResult,
};

/// Service for roster operations.
#[derive(Debug, Clone, Default)]
pub struct RosterService {
    roster: Roster,
}

impl RosterService {
    /// Create a service over an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Student] {
        self.roster.students()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Add a student and return the normalized name it was stored under.
    #[instrument(skip(self))]
    pub fn add_student(&mut self, name: &str) -> GradebookResult<StudentName> {
        let name = StudentName::parse(name)?;
        match self.roster.add_student(name) {
            Ok(student) => {
                info!(student = %student.name(), "Student added");
                Ok(student.name().clone())
            }
            Err(e) => {
                debug!(error = %e, "Student not added");
                Err(e.into())
            }
        }
    }

    /// Case-insensitive membership check. A blank name is never on the
    /// roster.
    pub fn exists(&self, name: &str) -> bool {
        StudentName::parse(name).is_ok_and(|n| self.roster.exists(&n))
    }

    /// Replace a student's grades with `grades`.
    ///
    /// Fails with `StudentNotFound` if the student is absent and with
    /// `InvalidGrade` if any value is outside `[0, 100]`; in both cases the
    /// roster is left unchanged.
    #[instrument(skip(self, grades), fields(count = grades.len()))]
    pub fn set_grades(&mut self, name: &str, grades: &[i64]) -> GradebookResult<()> {
        let name = StudentName::parse(name)?;
        let grades = grades
            .iter()
            .map(|&g| Grade::new(g))
            .collect::<Result<Vec<_>, _>>();

        // Existence first: an unknown student is reported even when the
        // grades are also bad.
        if !self.roster.exists(&name) {
            debug!(student = %name, "Grades not set: unknown student");
            return Err(DomainError::StudentNotFound {
                name: name.to_string(),
            }
            .into());
        }
        let grades = grades.inspect_err(|e| debug!(error = %e, "Grades rejected"))?;
        self.set_validated_grades(&name, grades)
    }

    /// Replace a student's grades with values that are already validated.
    pub fn set_validated_grades(
        &mut self,
        name: &StudentName,
        grades: Vec<Grade>,
    ) -> GradebookResult<()> {
        let count = grades.len();
        self.roster.set_grades(name, grades)?;
        info!(student = %name, count, "Grades recorded");
        Ok(())
    }

    pub fn report(&self) -> RosterReport {
        self.roster.report()
    }

    pub fn top_performer(&self) -> Option<TopPerformer> {
        self.roster.top_performer()
    }
}

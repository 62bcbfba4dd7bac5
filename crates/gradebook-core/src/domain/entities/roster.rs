//! The roster aggregate: every student record held by one session.

use tracing::{debug, trace};

use crate::domain::{
    entities::student::Student,
    error::DomainError,
    report::{RosterReport, StudentSummary, TopPerformer},
    value_objects::{Grade, StudentName},
};

/// Ordered, in-memory collection of student records.
///
/// Insertion order is preserved and drives both the report listing and
/// tie-breaking in [`Roster::top_performer`]. Names are unique after
/// normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub(crate) fn get(&self, name: &StudentName) -> Option<&Student> {
        self.students.iter().find(|s| s.name() == name)
    }

    pub fn exists(&self, name: &StudentName) -> bool {
        self.get(name).is_some()
    }

    /// Append a new student with no grades.
    ///
    /// A duplicate name leaves the roster untouched.
    pub fn add_student(&mut self, name: StudentName) -> Result<&Student, DomainError> {
        if self.exists(&name) {
            return Err(DomainError::DuplicateStudent {
                name: name.to_string(),
            });
        }
        debug!(student = %name, "Student added to roster");
        self.students.push(Student::new(name));
        let idx = self.students.len() - 1;
        Ok(&self.students[idx])
    }

    /// Replace a student's grades wholesale. Prior grades are discarded.
    pub fn set_grades(&mut self, name: &StudentName, grades: Vec<Grade>) -> Result<(), DomainError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| DomainError::StudentNotFound {
                name: name.to_string(),
            })?;
        trace!(student = %name, count = grades.len(), "Replacing grades");
        student.replace_grades(grades);
        Ok(())
    }

    /// Build the per-student, min/max and average-of-averages report.
    pub fn report(&self) -> RosterReport {
        let students = self
            .students
            .iter()
            .map(|s| StudentSummary {
                name: s.name().clone(),
                average: s.average(),
            })
            .collect::<Vec<_>>();

        let all_grades = || self.students.iter().flat_map(|s| s.grades().iter().copied());
        let averages: Vec<f64> = students.iter().filter_map(|s| s.average).collect();

        let overall_average = if averages.is_empty() {
            None
        } else {
            Some(averages.iter().sum::<f64>() / averages.len() as f64)
        };

        RosterReport {
            lowest_grade: all_grades().min(),
            highest_grade: all_grades().max(),
            overall_average,
            students,
        }
    }

    /// Highest average among students with at least one grade.
    ///
    /// Ties go to the student added first.
    pub fn top_performer(&self) -> Option<TopPerformer> {
        self.students
            .iter()
            .filter_map(|s| s.average().map(|avg| (s, avg)))
            .fold(None, |best: Option<(&Student, f64)>, (s, avg)| match best {
                Some((_, best_avg)) if best_avg >= avg => best,
                _ => Some((s, avg)),
            })
            .map(|(s, average)| TopPerformer {
                name: s.name().clone(),
                average,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> StudentName {
        StudentName::parse(raw).unwrap()
    }

    fn grades(values: &[i64]) -> Vec<Grade> {
        values.iter().map(|&v| Grade::new(v).unwrap()).collect()
    }

    fn roster_with(entries: &[(&str, &[i64])]) -> Roster {
        let mut roster = Roster::new();
        for (n, g) in entries {
            roster.add_student(name(n)).unwrap();
            roster.set_grades(&name(n), grades(g)).unwrap();
        }
        roster
    }

    // ========================================================================
    // Membership
    // ========================================================================

    #[test]
    fn distinct_names_create_distinct_records() {
        let mut roster = Roster::new();
        roster.add_student(name("alice")).unwrap();
        roster.add_student(name("bob")).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.students()[0].name().as_str(), "Alice");
        assert_eq!(roster.students()[1].name().as_str(), "Bob");
    }

    #[test]
    fn duplicate_in_any_case_is_rejected_without_change() {
        let mut roster = Roster::new();
        roster.add_student(name("alice")).unwrap();
        let before = roster.clone();

        for variant in ["alice", "ALICE", "aLiCe", "  Alice "] {
            let err = roster.add_student(name(variant)).unwrap_err();
            assert!(matches!(err, DomainError::DuplicateStudent { .. }));
        }
        assert_eq!(roster, before);
    }

    #[test]
    fn exists_is_case_insensitive() {
        let roster = roster_with(&[("alice", &[])]);
        assert!(roster.exists(&name("ALICE")));
        assert!(!roster.exists(&name("bob")));
    }

    // ========================================================================
    // Grades
    // ========================================================================

    #[test]
    fn set_grades_replaces_rather_than_appends() {
        let mut roster = roster_with(&[("alice", &[50, 60])]);
        roster.set_grades(&name("alice"), grades(&[90])).unwrap();

        assert_eq!(roster.get(&name("alice")).unwrap().grades(), &grades(&[90])[..]);
    }

    #[test]
    fn set_grades_on_missing_student_leaves_roster_unchanged() {
        let mut roster = roster_with(&[("alice", &[70])]);
        let before = roster.clone();

        let err = roster.set_grades(&name("bob"), grades(&[100])).unwrap_err();

        assert!(matches!(err, DomainError::StudentNotFound { .. }));
        assert_eq!(roster, before);
    }

    // ========================================================================
    // Report
    // ========================================================================

    #[test]
    fn average_of_seventy_eighty_ninety_is_eighty() {
        let report = roster_with(&[("alice", &[70, 80, 90])]).report();
        assert_eq!(report.students[0].average, Some(80.0));
    }

    #[test]
    fn ungraded_students_are_listed_but_excluded_from_aggregates() {
        let report = roster_with(&[("alice", &[40, 100]), ("carol", &[]), ("bob", &[60])]).report();

        assert_eq!(report.students.len(), 3);
        assert_eq!(report.students[1].average, None);
        assert_eq!(report.lowest_grade, Some(Grade::new(40).unwrap()));
        assert_eq!(report.highest_grade, Some(Grade::new(100).unwrap()));
        // (70 + 60) / 2, not (40 + 100 + 60) / 3
        assert_eq!(report.overall_average, Some(65.0));
    }

    #[test]
    fn report_without_grades_has_no_aggregates() {
        let report = roster_with(&[("alice", &[])]).report();

        assert_eq!(report.students.len(), 1);
        assert!(report.lowest_grade.is_none());
        assert!(report.highest_grade.is_none());
        assert!(report.overall_average.is_none());
    }

    #[test]
    fn empty_roster_report_is_empty() {
        assert!(Roster::new().report().is_empty());
    }

    // ========================================================================
    // Top performer
    // ========================================================================

    #[test]
    fn top_performer_ignores_ungraded_students() {
        let roster = roster_with(&[("a", &[90]), ("b", &[95]), ("c", &[])]);
        let top = roster.top_performer().unwrap();

        assert_eq!(top.name.as_str(), "B");
        assert_eq!(top.average, 95.0);
    }

    #[test]
    fn top_performer_tie_goes_to_first_added() {
        let roster = roster_with(&[("zed", &[80, 90]), ("amy", &[85]), ("max", &[70])]);
        assert_eq!(roster.top_performer().unwrap().name.as_str(), "Zed");
    }

    #[test]
    fn top_performer_none_when_nobody_has_grades() {
        assert!(Roster::new().top_performer().is_none());
        assert!(roster_with(&[("a", &[]), ("b", &[])]).top_performer().is_none());
    }
}

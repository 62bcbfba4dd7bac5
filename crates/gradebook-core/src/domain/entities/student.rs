use serde::Serialize;

use crate::domain::value_objects::{Grade, StudentName};

/// A single student record: a normalized name and an ordered grade list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: StudentName,
    grades: Vec<Grade>,
}

impl Student {
    /// A new student starts with no grades.
    pub fn new(name: StudentName) -> Self {
        Self {
            name,
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Replace the whole grade sequence.
    pub(crate) fn replace_grades(&mut self, grades: Vec<Grade>) {
        self.grades = grades;
    }

    /// Arithmetic mean of the grades, `None` when there are none.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let total: f64 = self.grades.iter().copied().map(f64::from).sum();
        Some(total / self.grades.len() as f64)
    }
}

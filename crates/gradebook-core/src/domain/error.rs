// ============================================================================
// domain/error.rs - ROSTER ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so the CLI can report and keep going)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid grade '{input}': {reason}")]
    InvalidGrade { input: String, reason: String },

    #[error("Invalid student name: {reason}")]
    InvalidName { reason: String },

    // ========================================================================
    // Conflict Errors
    // ========================================================================
    #[error("Student '{name}' already exists")]
    DuplicateStudent { name: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Student '{name}' does not exist")]
    StudentNotFound { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidGrade { .. } => vec![
                "Grades are whole numbers from 0 to 100".into(),
                "Type 'done' when you have entered every grade".into(),
            ],
            Self::InvalidName { .. } => vec!["Enter a non-empty student name".into()],
            Self::DuplicateStudent { name } => vec![
                format!("'{}' is already on the roster", name),
                "Names are compared without regard to case".into(),
            ],
            Self::StudentNotFound { .. } => vec![
                "Add the student first (menu option 1)".into(),
                "Check the spelling of the name".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidGrade { .. } | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::DuplicateStudent { .. } => ErrorCategory::Conflict,
            Self::StudentNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
}

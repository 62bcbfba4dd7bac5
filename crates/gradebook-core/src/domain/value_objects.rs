//! Domain value objects: StudentName, Grade.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. A value
//! that exists is valid: every constructor validates, so entities and the
//! roster never re-check names or grade ranges.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── StudentName ──────────────────────────────────────────────────────────────

/// A normalized student name.
///
/// Normalization trims surrounding whitespace and capitalizes the name: the
/// first character is upper-cased and the rest lower-cased. Two names that
/// differ only in case therefore normalize to the same value, which is what
/// makes roster uniqueness case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentName(String);

impl StudentName {
    /// Parse and normalize raw user input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName {
                reason: "name cannot be empty".into(),
            });
        }
        Ok(Self(capitalize(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StudentName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── Grade ────────────────────────────────────────────────────────────────────

/// A single grade: an integer in the inclusive range `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Validate an integer grade. Out-of-range values are rejected, never
    /// clamped.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(DomainError::InvalidGrade {
                input: value.to_string(),
                reason: format!("must be between {} and {}", Self::MIN, Self::MAX),
            }),
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| DomainError::InvalidGrade {
            input: s.to_string(),
            reason: "not a whole number".into(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<i64> for Grade {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        f64::from(grade.0)
    }
}

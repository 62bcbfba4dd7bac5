//! Core domain layer for Gradebook.
//!
//! This module contains pure business logic: student names, grades, the
//! roster aggregate and the reports it produces. All I/O (prompting, rendering)
//! is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No terminal, filesystem, or network calls
//! - **Validated values**: A `Grade` or `StudentName` that exists is valid
//! - **Rich domain model**: Behavior lives in entities, not services
//!
pub mod entities;
pub mod error;
pub mod report;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{Roster, Student};
pub use error::{DomainError, ErrorCategory};
pub use report::{RosterReport, StudentSummary, TopPerformer};
pub use value_objects::{Grade, StudentName};

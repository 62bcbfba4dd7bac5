//! Gradebook Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Gradebook
//! student grade analyzer, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          gradebook-cli (CLI)            │
//! │        (menu session, commands)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (RosterService, GradeEntryService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Prompter, ReportRenderer)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   gradebook-adapters (Infrastructure)   │
//! │ (TerminalPrompter, TextRenderer, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Roster, Student, Grade, StudentName)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gradebook_core::application::RosterService;
//!
//! let mut service = RosterService::new();
//! service.add_student("alice").unwrap();
//! service.set_grades("ALICE", &[70, 80, 90]).unwrap();
//!
//! let report = service.report();
//! assert_eq!(report.students[0].average, Some(80.0));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EntryPolicy, GradeEntryService, RosterService,
        ports::{Prompter, Reply, ReportRenderer},
    };
    pub use crate::domain::{
        Grade, Roster, RosterReport, Student, StudentName, StudentSummary, TopPerformer,
    };
    pub use crate::error::{GradebookError, GradebookResult};
}

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add grades" or "read a grade list".

pub mod grade_entry_service;
pub mod roster_service;

pub use grade_entry_service::{EntryPolicy, GradeEntryService};
pub use roster_service::RosterService;

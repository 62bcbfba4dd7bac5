//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gradebook-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Prompter`: line-oriented user input and feedback
//!   - `ReportRenderer`: report formatting
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The menu session in the CLI layer, calling the services directly)

pub mod output;

pub use output::{Prompter, Reply, ReportRenderer};

pub mod roster;
pub mod student;

pub use crate::domain::DomainError;
pub use roster::Roster;
pub use student::Student;

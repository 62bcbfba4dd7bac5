//! Grade Entry Service - bounded interactive input.
//!
//! Reads names, grades and free-form lines through a [`Prompter`]. Each
//! rejected entry is explained to the user and re-prompted, up to the
//! policy's attempt limit; after that the read fails with
//! `AttemptsExhausted` instead of asking forever.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Prompter, Reply},
    },
    domain::{Grade, StudentName},
    error::GradebookResult,
};

pub const NAME_PROMPT: &str = "Enter student name: ";
pub const GRADE_PROMPT_PREFIX: &str = "Enter a grade (or '";
pub const INTERRUPT_HINT: &str = "Use the menu to exit";

/// Limits applied to interactive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPolicy {
    max_attempts: u32,
    done_keyword: String,
}

impl EntryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_DONE_KEYWORD: &'static str = "done";

    /// `max_attempts` below one is raised to one.
    pub fn new(max_attempts: u32, done_keyword: impl Into<String>) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            done_keyword: done_keyword.into(),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn done_keyword(&self) -> &str {
        &self.done_keyword
    }
}

impl Default for EntryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DONE_KEYWORD)
    }
}

enum GradeEntry {
    Grade(Grade),
    Done,
}

/// Service for prompted input.
pub struct GradeEntryService {
    prompter: Box<dyn Prompter>,
    policy: EntryPolicy,
}

impl GradeEntryService {
    /// Create a new entry service over the given prompter.
    pub fn new(prompter: Box<dyn Prompter>, policy: EntryPolicy) -> Self {
        Self { prompter, policy }
    }

    /// Pass a message straight through to the prompter.
    pub fn notify(&mut self, message: &str) -> GradebookResult<()> {
        self.prompter.notify(message)
    }

    /// Read one line, retrying only on interrupts.
    pub fn read_line(&mut self, prompt: &str) -> GradebookResult<String> {
        self.read_until_accepted("input", prompt, |line| Ok(line.trim().to_string()))
    }

    /// Read a non-blank student name.
    pub fn read_name(&mut self) -> GradebookResult<StudentName> {
        self.read_until_accepted("student name", NAME_PROMPT, |line| {
            StudentName::parse(line).map_err(|_| "Student name cannot be empty".to_string())
        })
    }

    /// Read grades until the done keyword.
    ///
    /// The attempt limit applies to consecutive rejects for a single grade;
    /// every accepted grade resets it. On failure no grades are returned.
    #[instrument(skip(self))]
    pub fn read_grades(&mut self) -> GradebookResult<Vec<Grade>> {
        let keyword = self.policy.done_keyword.clone();
        let prompt = format!("{GRADE_PROMPT_PREFIX}{keyword}' to finish): ");
        let mut grades = Vec::new();

        loop {
            let entry = self.read_until_accepted("grade", &prompt, |line| {
                let line = line.trim();
                if line.eq_ignore_ascii_case(&keyword) {
                    return Ok(GradeEntry::Done);
                }
                let value: i64 = line
                    .parse()
                    .map_err(|_| format!("Invalid grade. Please enter a number 0-100 or '{keyword}'"))?;
                Grade::new(value)
                    .map(GradeEntry::Grade)
                    .map_err(|_| "Grade must be between 0 and 100. Please try again.".to_string())
            })?;

            match entry {
                GradeEntry::Grade(grade) => {
                    debug!(%grade, "Grade accepted");
                    grades.push(grade);
                }
                GradeEntry::Done => return Ok(grades),
            }
        }
    }

    /// Prompt until `accept` succeeds, explaining each rejection.
    fn read_until_accepted<T>(
        &mut self,
        what: &'static str,
        prompt: &str,
        mut accept: impl FnMut(&str) -> Result<T, String>,
    ) -> GradebookResult<T> {
        let max_attempts = self.policy.max_attempts;

        for attempt in 1..=max_attempts {
            let feedback = match self.prompter.read_line(prompt)? {
                Reply::Line(line) => match accept(&line) {
                    Ok(value) => return Ok(value),
                    Err(feedback) => feedback,
                },
                Reply::Interrupted => INTERRUPT_HINT.to_string(),
                Reply::Closed => return Err(ApplicationError::InputClosed { what }.into()),
            };
            debug!(what, attempt, "Input rejected");
            self.prompter.notify(&feedback)?;
        }

        info!(what, attempts = max_attempts, "Giving up on input");
        Err(ApplicationError::AttemptsExhausted {
            what,
            attempts: max_attempts,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::application::ports::output::MockPrompter;
    use crate::error::GradebookError;

    fn lines(input: &[&str]) -> VecDeque<Reply> {
        input.iter().map(|l| Reply::Line((*l).to_string())).collect()
    }

    /// A mock that replays `replies` and then reports a closed stream.
    fn scripted(mut replies: VecDeque<Reply>, expected_notices: usize) -> MockPrompter {
        let mut mock = MockPrompter::new();
        mock.expect_read_line()
            .returning(move |_| Ok(replies.pop_front().unwrap_or(Reply::Closed)));
        mock.expect_notify()
            .times(expected_notices)
            .returning(|_| Ok(()));
        mock
    }

    fn service(mock: MockPrompter, max_attempts: u32) -> GradeEntryService {
        GradeEntryService::new(Box::new(mock), EntryPolicy::new(max_attempts, "done"))
    }

    fn values(grades: &[Grade]) -> Vec<u8> {
        grades.iter().map(|g| g.value()).collect()
    }

    #[test]
    fn reads_grades_until_done() {
        let mock = scripted(lines(&["70", " 80 ", "90", "DONE"]), 0);
        let grades = service(mock, 3).read_grades().unwrap();
        assert_eq!(values(&grades), vec![70, 80, 90]);
    }

    #[test]
    fn done_immediately_yields_no_grades() {
        let mock = scripted(lines(&["done"]), 0);
        assert!(service(mock, 3).read_grades().unwrap().is_empty());
    }

    #[test]
    fn invalid_grades_are_explained_and_skipped() {
        let mock = scripted(lines(&["101", "-1", "abc", "88", "done"]), 3);
        let grades = service(mock, 5).read_grades().unwrap();
        assert_eq!(values(&grades), vec![88]);
    }

    #[test]
    fn range_and_parse_errors_use_different_messages() {
        let mut mock = MockPrompter::new();
        let mut replies = lines(&["150", "x", "done"]);
        mock.expect_read_line()
            .returning(move |_| Ok(replies.pop_front().unwrap_or(Reply::Closed)));
        mock.expect_notify()
            .withf(|m: &str| m.starts_with("Grade must be between 0 and 100"))
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_notify()
            .withf(|m: &str| m.starts_with("Invalid grade"))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(mock, 3).read_grades().unwrap().is_empty());
    }

    #[test]
    fn consecutive_rejects_exhaust_attempts() {
        let mock = scripted(lines(&["90", "abc", "999", "-5", "done"]), 3);
        let err = service(mock, 3).read_grades().unwrap_err();

        assert_eq!(
            err,
            GradebookError::Application(ApplicationError::AttemptsExhausted {
                what: "grade",
                attempts: 3
            })
        );
    }

    #[test]
    fn accepted_grade_resets_attempts() {
        let mock = scripted(lines(&["x", "x", "50", "x", "x", "60", "done"]), 4);
        let grades = service(mock, 3).read_grades().unwrap();
        assert_eq!(values(&grades), vec![50, 60]);
    }

    #[test]
    fn interrupt_is_routed_back_to_the_prompt() {
        let mut mock = MockPrompter::new();
        let mut replies: VecDeque<Reply> =
            [Reply::Interrupted, Reply::Line("77".into()), Reply::Line("done".into())].into();
        mock.expect_read_line()
            .returning(move |_| Ok(replies.pop_front().unwrap_or(Reply::Closed)));
        mock.expect_notify()
            .withf(|m: &str| m == INTERRUPT_HINT)
            .times(1)
            .returning(|_| Ok(()));

        let grades = service(mock, 3).read_grades().unwrap();
        assert_eq!(values(&grades), vec![77]);
    }

    #[test]
    fn closed_input_fails_without_grades() {
        let mock = scripted(lines(&["90"]), 0);
        let err = service(mock, 3).read_grades().unwrap_err();
        assert!(matches!(
            err,
            GradebookError::Application(ApplicationError::InputClosed { what: "grade" })
        ));
    }

    #[test]
    fn custom_done_keyword() {
        let mock = scripted(lines(&["60", "done", "stop"]), 1);
        let mut svc = GradeEntryService::new(Box::new(mock), EntryPolicy::new(3, "stop"));
        assert_eq!(values(&svc.read_grades().unwrap()), vec![60]);
    }

    #[test]
    fn grade_prompt_mentions_keyword() {
        let mut mock = MockPrompter::new();
        mock.expect_read_line()
            .withf(|p: &str| p == "Enter a grade (or 'done' to finish): ")
            .times(1)
            .returning(|_| Ok(Reply::Line("done".into())));
        service(mock, 3).read_grades().unwrap();
    }

    #[test]
    fn blank_names_are_reprompted() {
        let mock = scripted(lines(&["", "   ", "ada"]), 2);
        let name = service(mock, 3).read_name().unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn read_line_trims() {
        let mock = scripted(lines(&["  3 "]), 0);
        assert_eq!(service(mock, 3).read_line("> ").unwrap(), "3");
    }

    #[test]
    fn zero_attempts_is_raised_to_one() {
        assert_eq!(EntryPolicy::new(0, "done").max_attempts(), 1);
    }
}

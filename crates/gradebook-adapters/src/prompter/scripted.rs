//! Scripted prompter adapter for testing and demos.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use gradebook_core::{
    application::{
        ApplicationError,
        ports::{Prompter, Reply},
    },
    error::GradebookResult,
};

/// Prompter that replays a fixed script of replies.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the prompts and notices through another. Once the script runs out every
/// read reports [`Reply::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<ScriptedPrompterInner>>,
}

#[derive(Debug, Default)]
struct ScriptedPrompterInner {
    replies: VecDeque<Reply>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a prompter that answers with `lines`, in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompter = Self::new();
        for line in lines {
            prompter.push_line(line);
        }
        prompter
    }

    pub fn push_line(&self, line: impl Into<String>) {
        self.push(Reply::Line(line.into()));
    }

    pub fn push_interrupt(&self) {
        self.push(Reply::Interrupted);
    }

    fn push(&self, reply: Reply) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.replies.push_back(reply);
        }
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.prompts.clone())
            .unwrap_or_default()
    }

    /// Every notice shown so far.
    pub fn notices(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.notices.clone())
            .unwrap_or_default()
    }

    /// Number of replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.lock().map(|inner| inner.replies.len()).unwrap_or(0)
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> GradebookResult<Reply> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::PromptFailed {
            reason: "scripted prompter lock poisoned".into(),
        })?;
        inner.prompts.push(prompt.to_string());
        Ok(inner.replies.pop_front().unwrap_or(Reply::Closed))
    }

    fn notify(&mut self, message: &str) -> GradebookResult<()> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::PromptFailed {
            reason: "scripted prompter lock poisoned".into(),
        })?;
        inner.notices.push(message.to_string());
        Ok(())
    }
}

//! Terminal prompter adapter.

use std::{
    io::{self, BufRead, IsTerminal},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use console::Term;
use tracing::trace;

use gradebook_core::{
    application::{
        ApplicationError,
        ports::{Prompter, Reply},
    },
    error::{GradebookError, GradebookResult},
};

/// Prompter backed by the process's stdin/stdout.
///
/// When stdin is a terminal, lines are read through `console` on whichever of
/// stdout or stderr is also a terminal. `console` reads in raw mode and
/// reports Ctrl-C as an interrupted read, so `gradebook | tee log` still
/// routes Ctrl-C back to the prompt. Otherwise lines are read from stdin
/// directly, so end-of-input can be told apart from an empty line; a SIGINT
/// seen during such a read is picked up through the flag passed to
/// [`TerminalPrompter::with_interrupt_flag`].
pub struct TerminalPrompter {
    out: Term,
    keys: Option<Term>,
    interrupted: Arc<AtomicBool>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        let keys = if io::stdin().is_terminal() {
            [Term::stdout(), Term::stderr()]
                .into_iter()
                .find(Term::is_term)
        } else {
            None
        };

        Self {
            out: Term::stdout(),
            keys,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share the flag a process-wide SIGINT handler sets.
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    fn read_keys(keys: &Term) -> io::Result<Reply> {
        match keys.read_line() {
            Ok(line) => Ok(Reply::Line(line)),
            Err(e) => {
                let reply = reply_for_error(e)?;
                // Raw mode swallowed the keypress; end the prompt line.
                keys.write_line("")?;
                Ok(reply)
            }
        }
    }

    fn read_stdin(&self) -> io::Result<Reply> {
        // Only a SIGINT during this read counts.
        self.interrupted.store(false, Ordering::SeqCst);

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        // Piped input is not echoed, so end the prompt line ourselves.
        self.out.write_line("")?;

        Ok(stdin_reply(
            read,
            line,
            self.interrupted.swap(false, Ordering::SeqCst),
        ))
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> GradebookResult<Reply> {
        self.out.write_str(prompt).map_err(prompt_failed)?;
        self.out.flush().map_err(prompt_failed)?;

        let reply = match &self.keys {
            Some(keys) => Self::read_keys(keys),
            None => self.read_stdin().or_else(reply_for_error),
        }
        .map_err(prompt_failed)?;

        if reply == Reply::Interrupted {
            trace!("Read interrupted");
        }
        Ok(reply)
    }

    fn notify(&mut self, message: &str) -> GradebookResult<()> {
        self.out.write_line(message).map_err(prompt_failed)
    }
}

/// Turn one raw `read_line` from stdin into a reply.
fn stdin_reply(bytes_read: usize, mut line: String, interrupted: bool) -> Reply {
    if interrupted {
        return Reply::Interrupted;
    }
    if bytes_read == 0 {
        return Reply::Closed;
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Reply::Line(line)
}

/// Read errors that interrupt or end input are replies, not failures.
fn reply_for_error(e: io::Error) -> io::Result<Reply> {
    match e.kind() {
        io::ErrorKind::Interrupted => Ok(Reply::Interrupted),
        io::ErrorKind::UnexpectedEof => Ok(Reply::Closed),
        _ => Err(e),
    }
}

fn prompt_failed(e: io::Error) -> GradebookError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

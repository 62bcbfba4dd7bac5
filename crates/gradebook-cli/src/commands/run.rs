//! Implementation of `gradebook run`, the interactive menu.
//!
//! Responsibility: show the menu, read a choice, and dispatch to the core
//! services. Every recoverable error is reported and the menu is shown
//! again; only choice 5, end of input or a broken terminal ends the session.

use std::{
    str::FromStr,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use tracing::{debug, info, instrument, warn};

use gradebook_adapters::TerminalPrompter;
use gradebook_core::{
    application::{
        ApplicationError, EntryPolicy, GradeEntryService, ReportRenderer, RosterService,
    },
    domain::DomainError,
    error::GradebookError,
};

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const MENU_TITLE: &str = "\n--- Student Grade Analyzer ---";
const MENU_ITEMS: [&str; 5] = [
    "1. Add a new student",
    "2. Add grades for a student",
    "3. Generate a full report",
    "4. Find the top student",
    "5. Exit program",
];
const CHOICE_PROMPT: &str = "Enter your choice: ";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddGrades,
    Report,
    TopPerformer,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddStudent),
            "2" => Ok(Self::AddGrades),
            "3" => Ok(Self::Report),
            "4" => Ok(Self::TopPerformer),
            "5" => Ok(Self::Exit),
            other => Err(CliError::InvalidMenuChoice {
                input: other.to_string(),
            }),
        }
    }
}

/// Execute `gradebook run` on the process terminal.
#[instrument(skip_all)]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut policy = config.entry_policy();
    if let Some(max_attempts) = args.max_attempts {
        policy = EntryPolicy::new(max_attempts, policy.done_keyword());
    }
    debug!(
        max_attempts = policy.max_attempts(),
        format = ?output.format(),
        color = output.supports_color(),
        "Session starting"
    );

    let prompter = TerminalPrompter::new().with_interrupt_flag(interrupt_flag());
    let entry = GradeEntryService::new(Box::new(prompter), policy);
    let mut session = Session::new(entry, output.renderer(), &output);
    session.run()?;

    info!(students = session.roster().len(), "Session ended");
    Ok(())
}

/// Install a SIGINT handler that only raises a flag, so Ctrl-C during a
/// line read is reported to the prompter instead of killing the process.
fn interrupt_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        warn!(error = %e, "Ctrl-C handler not installed");
    }
    flag
}

/// A menu session over one roster.
pub struct Session<'a> {
    roster: RosterService,
    entry: GradeEntryService,
    renderer: Box<dyn ReportRenderer>,
    output: &'a OutputManager,
}

/// How a dispatched command left the session.
enum Flow {
    Continue,
    Exit,
}

impl<'a> Session<'a> {
    pub fn new(
        entry: GradeEntryService,
        renderer: Box<dyn ReportRenderer>,
        output: &'a OutputManager,
    ) -> Self {
        Self {
            roster: RosterService::new(),
            entry,
            renderer,
            output,
        }
    }

    pub fn roster(&self) -> &RosterService {
        &self.roster
    }

    /// Run the menu loop until exit or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.show_menu()?;

            let flow = match self.entry.read_line(CHOICE_PROMPT) {
                Ok(line) => match line.parse::<MenuChoice>() {
                    Ok(choice) => self.dispatch(choice),
                    Err(e) => {
                        self.report(&e)?;
                        Ok(Flow::Continue)
                    }
                },
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is_recoverable() => self.report(&CliError::Core(e))?,
                Err(GradebookError::Application(ApplicationError::InputClosed { what })) => {
                    info!(what, "Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn show_menu(&self) -> CliResult<()> {
        self.output.header(MENU_TITLE)?;
        for item in MENU_ITEMS {
            self.output.print(&format!("    {item}"))?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, GradebookError> {
        match choice {
            MenuChoice::AddStudent => {
                let name = self.entry.read_name()?;
                let stored = self.roster.add_student(name.as_str())?;
                self.write(self.output.success(&format!("Student '{stored}' added")))?;
            }
            MenuChoice::AddGrades => {
                let name = self.entry.read_name()?;
                // Check before prompting for grades so an unknown name fails fast.
                if !self.roster.exists(name.as_str()) {
                    return Err(DomainError::StudentNotFound {
                        name: name.to_string(),
                    }
                    .into());
                }
                let grades = self.entry.read_grades()?;
                let count = grades.len();
                self.roster.set_validated_grades(&name, grades)?;
                self.write(
                    self.output
                        .success(&format!("Recorded {count} grade(s) for {name}")),
                )?;
            }
            MenuChoice::Report => {
                let text = self.renderer.render_report(&self.roster.report())?;
                self.write(self.output.emit(&text))?;
            }
            MenuChoice::TopPerformer => {
                let top = self.roster.top_performer();
                let text = self.renderer.render_top_performer(top.as_ref())?;
                self.write(self.output.emit(&text))?;
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Show a recoverable error without leaving the loop. Logged at debug
    /// only; stderr stays clear at the default level.
    fn report(&self, err: &CliError) -> CliResult<()> {
        debug!(error = %err, category = ?err.category(), "Recovered session error");
        self.output.error(&err.to_string())?;
        Ok(())
    }

    /// Terminal write failures end the session like any other prompt failure.
    fn write(&self, result: std::io::Result<()>) -> Result<(), GradebookError> {
        result.map_err(|e| {
            ApplicationError::PromptFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use gradebook_adapters::ScriptedPrompter;
    use gradebook_core::application::Prompter;

    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn session_with<'a>(
        prompter: Box<dyn Prompter>,
        config: &AppConfig,
        output: &'a OutputManager,
    ) -> Session<'a> {
        let entry = GradeEntryService::new(prompter, config.entry_policy());
        Session::new(entry, output.renderer(), output)
    }

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            quiet: true,
            no_color: true,
            output_format: OutputFormat::Plain,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn run_script(lines: &[&str]) -> (RosterService, ScriptedPrompter) {
        let prompter = ScriptedPrompter::from_lines(lines.iter().copied());
        let output = quiet_output();
        let mut session = session_with(Box::new(prompter.clone()), &AppConfig::default(), &output);
        session.run().unwrap();
        (session.roster().clone(), prompter)
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::AddStudent);
        assert_eq!(" 5 ".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!(matches!(
            "6".parse::<MenuChoice>(),
            Err(CliError::InvalidMenuChoice { .. })
        ));
        assert!("add".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn exit_stops_reading() {
        let (_, prompter) = run_script(&["5", "1", "never"]);
        assert_eq!(prompter.remaining(), 2);
    }

    #[test]
    fn adds_students_and_grades() {
        let (roster, _) = run_script(&[
            "1", "alice", "1", "bob", "2", "ALICE", "70", "80", "90", "done", "5",
        ]);

        assert_eq!(roster.len(), 2);
        let report = roster.report();
        assert_eq!(report.students[0].average, Some(80.0));
        assert_eq!(report.students[1].average, None);
    }

    #[test]
    fn duplicate_student_is_reported_and_session_continues() {
        let (roster, _) = run_script(&["1", "alice", "1", "Alice", "1", "carl", "5"]);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn grades_for_unknown_student_skip_grade_prompt() {
        let (roster, prompter) = run_script(&["2", "nobody", "5"]);

        assert!(roster.is_empty());
        assert!(
            !prompter
                .prompts()
                .iter()
                .any(|p| p.starts_with("Enter a grade"))
        );
    }

    #[test]
    fn invalid_grades_never_stored() {
        let (roster, prompter) =
            run_script(&["1", "eve", "2", "eve", "101", "-1", "abc", "5"]);

        // Three rejects exhaust the default policy; nothing is recorded.
        assert!(roster.students()[0].grades().is_empty());
        assert_eq!(prompter.notices().len(), 3);
    }

    #[test]
    fn regrading_replaces_previous_grades() {
        let (roster, _) = run_script(&[
            "1", "eve", "2", "eve", "10", "done", "2", "eve", "90", "100", "done", "5",
        ]);
        assert_eq!(roster.report().students[0].average, Some(95.0));
    }

    #[test]
    fn invalid_menu_choice_reprompts() {
        let (roster, prompter) = run_script(&["9", "x", "1", "zoe", "5"]);

        assert_eq!(roster.len(), 1);
        let choice_prompts = prompter
            .prompts()
            .iter()
            .filter(|p| p.as_str() == CHOICE_PROMPT)
            .count();
        assert_eq!(choice_prompts, 4);
    }

    #[test]
    fn interrupt_at_menu_is_routed_back() {
        let prompter = ScriptedPrompter::new();
        prompter.push_interrupt();
        prompter.push_line("1");
        prompter.push_line("ann");
        prompter.push_line("5");

        let output = quiet_output();
        let mut session = session_with(Box::new(prompter.clone()), &AppConfig::default(), &output);
        session.run().unwrap();

        assert_eq!(session.roster().len(), 1);
        assert_eq!(prompter.notices(), vec!["Use the menu to exit".to_string()]);
    }

    #[test]
    fn end_of_input_ends_session_cleanly() {
        let (roster, _) = run_script(&["1", "ann"]);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn end_of_input_during_grades_stores_nothing() {
        let (roster, _) = run_script(&["1", "ann", "2", "ann", "88"]);
        assert!(!roster.students()[0].has_grades());
    }
}

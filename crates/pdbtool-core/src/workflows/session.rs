use crate::core::models::record_set::RecordSet;
use crate::engine::command::Command;
use crate::engine::config::QueryConfig;
use crate::engine::query::{self, Outcome};
use crate::engine::report::Report;
use tracing::{debug, instrument};

/// An interactive query session over one parsed structure.
///
/// The record set is owned for the session's lifetime and only ever borrowed
/// immutably, so handling a command can never alter what later commands see.
#[derive(Debug, Clone)]
pub struct Session {
    records: RecordSet,
    config: QueryConfig,
}

impl Session {
    pub fn new(records: RecordSet, config: QueryConfig) -> Self {
        Self { records, config }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Opening lines shown before the first prompt.
    pub fn banner(&self) -> Report {
        Report::new(vec![
            "Welcome to the pdb program.".to_string(),
            String::new(),
            "To begin, try typing 'help' for the list of valid commands.".to_string(),
            String::new(),
            format!("{} atoms recorded.", self.records.len()),
            String::new(),
        ])
    }

    /// Validates and runs one command.
    ///
    /// Validation failures become a `Continue` outcome carrying the diagnostic.
    #[instrument(skip(self, args), fields(argc = args.len()))]
    pub fn dispatch<S: AsRef<str>>(&self, name: &str, args: &[S]) -> Outcome {
        match Command::parse(name, args) {
            Ok(command) => query::run(&self.records, &command, &self.config),
            Err(err) => {
                debug!(error = %err, "Command rejected.");
                Outcome::Continue(Report::from(&err))
            }
        }
    }

    /// Splits a raw input line on whitespace and dispatches it.
    ///
    /// Returns `None` for blank lines.
    pub fn handle_line(&self, line: &str) -> Option<Outcome> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        let args: Vec<&str> = tokens.collect();
        Some(self.dispatch(name, &args))
    }
}

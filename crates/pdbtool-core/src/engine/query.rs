use super::command::Command;
use super::config::QueryConfig;
use super::report::Report;
use super::tasks::threshold::ThresholdField;
use super::tasks::{frequency, residue_length, threshold};
use crate::core::models::record_set::RecordSet;
use tracing::debug;

/// What the caller should do after a command has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the report and read the next command.
    Continue(Report),
    /// Print the report and end the session.
    Quit(Report),
}

impl Outcome {
    pub fn report(&self) -> &Report {
        match self {
            Outcome::Continue(report) | Outcome::Quit(report) => report,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit(_))
    }
}

/// Runs a validated command against a record set.
pub fn run(records: &RecordSet, command: &Command, config: &QueryConfig) -> Outcome {
    debug!(command = %command.kind(), "Running command.");
    let report = match command {
        Command::Help => Report::help(),
        Command::AtomFreq => Report::frequencies(&frequency::element_frequencies(records)),
        Command::ResFreq => Report::frequencies(&frequency::residue_frequencies(records)),
        Command::ResLength(key) => {
            Report::residue_extent(residue_length::residue_extent(records, key).as_ref())
        }
        Command::TempCheck(value) => Report::threshold(&threshold::classify(
            records,
            ThresholdField::TempFactor,
            *value,
            &config.tolerance,
        )),
        Command::Occupancy(value) => Report::threshold(&threshold::classify(
            records,
            ThresholdField::Occupancy,
            *value,
            &config.tolerance,
        )),
        Command::Quit => return Outcome::Quit(Report::farewell()),
    };
    Outcome::Continue(report)
}

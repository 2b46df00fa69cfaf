//! Line-oriented text rendering of query results and command errors.

use super::error::CommandError;
use super::help::HELP_TEXT;
use super::tasks::frequency::Frequencies;
use super::tasks::residue_length::ResidueExtent;
use super::tasks::threshold::{Bucket, ThresholdSummary};
use std::fmt;

pub const FAREWELL: &str = "Exiting program, Goodbye!";
pub const NO_RESIDUE: &str = "No residue present.";

/// Human-readable output of one command, one entry per output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn help() -> Self {
        Self::new(HELP_TEXT.lines().map(str::to_string).collect())
    }

    pub fn farewell() -> Self {
        Self::line(FAREWELL)
    }

    pub fn frequencies(freqs: &Frequencies) -> Self {
        Self::new(freqs.iter().map(|(key, count)| format!("{key}:{count}")).collect())
    }

    pub fn residue_extent(extent: Option<&ResidueExtent>) -> Self {
        match extent {
            None => Self::line(NO_RESIDUE),
            Some(extent) => Self::line(format!(
                "{} with sequence number {} in chain {} has {:.2} angstroms.",
                extent.key.res_name,
                extent.key.res_seq,
                extent.key.chain_id.unwrap_or(' '),
                extent.max_distance
            )),
        }
    }

    pub fn threshold(summary: &ThresholdSummary) -> Self {
        let total = summary.total();
        let lines = [
            (Bucket::Below, "below"),
            (Bucket::At, "at"),
            (Bucket::Above, "above"),
        ]
        .into_iter()
        .map(|(bucket, word)| {
            format!(
                "{} {} {:.2}: {} / {} ({:.1}%)",
                summary.field.label(),
                word,
                summary.threshold,
                summary.count(bucket),
                total,
                summary.percentage(bucket)
            )
        })
        .collect();
        Self::new(lines)
    }
}

impl From<&CommandError> for Report {
    fn from(err: &CommandError) -> Self {
        let mut lines = vec![err.to_string()];
        if let Some(command) = err.command() {
            lines.push(format!("Usage: {}", command.usage()));
            lines.push(format!(
                "For details about the {command} command, use the 'help' command."
            ));
        }
        Self::new(lines)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

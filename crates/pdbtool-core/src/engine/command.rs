use super::error::CommandError;
use super::tasks::threshold::ThresholdField;
use crate::core::models::atom::ResidueKey;
use phf::{Map, phf_map};
use std::fmt;

/// The set of interactive command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    AtomFreq,
    ResFreq,
    ResLength,
    TempCheck,
    Occupancy,
    Quit,
}

static COMMANDS: Map<&'static str, CommandKind> = phf_map! {
    "help" => CommandKind::Help,
    "atomfreq" => CommandKind::AtomFreq,
    "resfreq" => CommandKind::ResFreq,
    "reslength" => CommandKind::ResLength,
    "tempcheck" => CommandKind::TempCheck,
    "occupancy" => CommandKind::Occupancy,
    "quit" => CommandKind::Quit,
};

impl CommandKind {
    /// Looks up a command token, ignoring case.
    pub fn lookup(token: &str) -> Option<Self> {
        COMMANDS.get(token.to_lowercase().as_str()).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::AtomFreq => "atomfreq",
            CommandKind::ResFreq => "resfreq",
            CommandKind::ResLength => "reslength",
            CommandKind::TempCheck => "tempcheck",
            CommandKind::Occupancy => "occupancy",
            CommandKind::Quit => "quit",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::ResLength => "reslength <res_name> <chain_id> <num>",
            CommandKind::TempCheck => "tempcheck <decimal>",
            CommandKind::Occupancy => "occupancy <decimal>",
            other => other.name(),
        }
    }

    /// Number of positional arguments, `None` when surplus arguments are ignored.
    pub fn arity(&self) -> Option<usize> {
        match self {
            CommandKind::ResLength => Some(3),
            CommandKind::TempCheck | CommandKind::Occupancy => Some(1),
            CommandKind::Help
            | CommandKind::AtomFreq
            | CommandKind::ResFreq
            | CommandKind::Quit => None,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully validated command, ready to run against a record set.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    AtomFreq,
    ResFreq,
    ResLength(ResidueKey),
    TempCheck(f64),
    Occupancy(f64),
    Quit,
}

impl Command {
    /// Parses a command token and its positional arguments.
    ///
    /// Validation stops at the first problem; nothing is computed here.
    pub fn parse<S: AsRef<str>>(token: &str, args: &[S]) -> Result<Self, CommandError> {
        let kind = CommandKind::lookup(token).ok_or_else(|| CommandError::Unknown {
            token: token.to_string(),
        })?;

        if let Some(expected) = kind.arity() {
            if args.is_empty() {
                return Err(CommandError::MissingArguments { command: kind });
            }
            if args.len() != expected {
                return Err(CommandError::WrongArgumentCount {
                    command: kind,
                    expected,
                    found: args.len(),
                });
            }
        }

        match kind {
            CommandKind::Help => Ok(Command::Help),
            CommandKind::AtomFreq => Ok(Command::AtomFreq),
            CommandKind::ResFreq => Ok(Command::ResFreq),
            CommandKind::Quit => Ok(Command::Quit),
            CommandKind::ResLength => parse_residue_key(
                args[0].as_ref(),
                args[1].as_ref(),
                args[2].as_ref(),
            )
            .map(Command::ResLength),
            CommandKind::TempCheck => {
                parse_threshold(kind, ThresholdField::TempFactor, args[0].as_ref())
                    .map(Command::TempCheck)
            }
            CommandKind::Occupancy => {
                parse_threshold(kind, ThresholdField::Occupancy, args[0].as_ref())
                    .map(Command::Occupancy)
            }
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Help => CommandKind::Help,
            Command::AtomFreq => CommandKind::AtomFreq,
            Command::ResFreq => CommandKind::ResFreq,
            Command::ResLength(_) => CommandKind::ResLength,
            Command::TempCheck(_) => CommandKind::TempCheck,
            Command::Occupancy(_) => CommandKind::Occupancy,
            Command::Quit => CommandKind::Quit,
        }
    }
}

/// Upper-case in the sense of having at least one cased letter and no lower-case ones.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

fn invalid(command: CommandKind, reason: String) -> CommandError {
    CommandError::InvalidArgument { command, reason }
}

fn parse_residue_key(
    res_name: &str,
    chain_id: &str,
    res_seq: &str,
) -> Result<ResidueKey, CommandError> {
    let kind = CommandKind::ResLength;

    if res_name.chars().count() != 3 || !is_upper(res_name) {
        return Err(invalid(
            kind,
            format!("residue name '{res_name}' must be three upper-case characters"),
        ));
    }

    let mut chain_chars = chain_id.chars();
    let chain = match (chain_chars.next(), chain_chars.next()) {
        (Some(c), None) if c.is_uppercase() => c,
        _ => {
            return Err(invalid(
                kind,
                format!("chain identifier '{chain_id}' must be a single upper-case character"),
            ));
        }
    };

    let res_seq: isize = res_seq.parse().map_err(|_| {
        invalid(
            kind,
            format!("residue sequence number '{res_seq}' is not an integer"),
        )
    })?;

    Ok(ResidueKey {
        res_name: res_name.to_string(),
        chain_id: Some(chain),
        res_seq,
    })
}

fn parse_threshold(
    kind: CommandKind,
    field: ThresholdField,
    raw: &str,
) -> Result<f64, CommandError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| invalid(kind, format!("'{raw}' is not a decimal number")))?;
    let range = field.range();
    if !value.is_finite() || !range.contains(&value) {
        return Err(invalid(
            kind,
            format!(
                "'{raw}' is outside the range {:.2} to {:.2}",
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(value)
}

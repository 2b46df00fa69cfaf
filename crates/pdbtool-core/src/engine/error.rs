use super::command::CommandKind;
use thiserror::Error;

/// Recoverable failure of a single interactive command.
///
/// None of these end the session; the caller reports them and reads the next
/// command with the record set untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("Invalid command. Type 'help' for the list of valid commands.")]
    Unknown { token: String },

    #[error("Missing arguments to {command}")]
    MissingArguments { command: CommandKind },

    #[error("Incorrect number of arguments to {command}")]
    WrongArgumentCount {
        command: CommandKind,
        expected: usize,
        found: usize,
    },

    #[error("Invalid argument to {command}: {reason}")]
    InvalidArgument {
        command: CommandKind,
        reason: String,
    },
}

impl CommandError {
    /// The command whose usage should accompany this error, if any.
    pub fn command(&self) -> Option<CommandKind> {
        match self {
            CommandError::Unknown { .. } => None,
            CommandError::MissingArguments { command }
            | CommandError::WrongArgumentCount { command, .. }
            | CommandError::InvalidArgument { command, .. } => Some(*command),
        }
    }
}

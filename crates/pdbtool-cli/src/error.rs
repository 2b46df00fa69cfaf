use pdbtool_core::engine::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{path}' does not exist", path = path.display())]
    InputNotFound { path: PathBuf },

    #[error("Wrong file type: '{path}' (expected a .{expected} file)", path = path.display())]
    WrongFileType {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Whether the failure concerns how the program was invoked.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CliError::InputNotFound { .. } | CliError::WrongFileType { .. }
        )
    }
}

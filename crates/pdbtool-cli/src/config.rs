use crate::error::{CliError, Result};
use pdbtool_core::engine::config::{QueryConfig, QueryConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_PROMPT: &str = "Enter a command: ";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSessionConfig {
    prompt: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialQueryConfig {
    #[serde(rename = "absolute-tolerance")]
    absolute_tolerance: Option<f64>,
    #[serde(rename = "relative-tolerance")]
    relative_tolerance: Option<f64>,
}

/// Configuration as read from a TOML file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    session: Option<PartialSessionConfig>,
    query: Option<PartialQueryConfig>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub prompt: String,
    pub query: QueryConfig,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn resolve(self) -> Result<AppConfig> {
        let session = self.session.unwrap_or_default();
        let query = self.query.unwrap_or_default();

        let mut builder = QueryConfigBuilder::new();
        if let Some(value) = query.absolute_tolerance {
            builder = builder.absolute_tolerance(value);
        }
        if let Some(value) = query.relative_tolerance {
            builder = builder.relative_tolerance(value);
        }

        Ok(AppConfig {
            prompt: session.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            query: builder.build()?,
        })
    }
}

impl AppConfig {
    /// Reads the optional config file, falling back to defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => PartialAppConfig::from_file(path)?.resolve(),
            None => PartialAppConfig::default().resolve(),
        }
    }
}

use crate::core::utils::numeric::Tolerance;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid {name} tolerance: {value} (must be finite and non-negative)")]
    InvalidTolerance { name: &'static str, value: f64 },
}

/// Settings shared by every query of a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryConfig {
    /// Slack used when deciding whether a value sits exactly at a threshold.
    pub tolerance: Tolerance,
}

#[derive(Default)]
pub struct QueryConfigBuilder {
    absolute_tolerance: Option<f64>,
    relative_tolerance: Option<f64>,
}

impl QueryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absolute_tolerance(mut self, value: f64) -> Self {
        self.absolute_tolerance = Some(value);
        self
    }
    pub fn relative_tolerance(mut self, value: f64) -> Self {
        self.relative_tolerance = Some(value);
        self
    }

    pub fn build(self) -> Result<QueryConfig, ConfigError> {
        let absolute = validate(
            "absolute",
            self.absolute_tolerance.unwrap_or(Tolerance::DEFAULT_ABSOLUTE),
        )?;
        let relative = validate(
            "relative",
            self.relative_tolerance.unwrap_or(Tolerance::DEFAULT_RELATIVE),
        )?;
        Ok(QueryConfig {
            tolerance: Tolerance::new(absolute, relative),
        })
    }
}

fn validate(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidTolerance { name, value })
    }
}

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a failure, used for logging and host reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input missing or a configuration file is unusable.
    Configuration,
    /// A discovered file could not be read.
    FileAccess,
    /// The lint engine rejected its configuration or failed internally.
    Engine,
    /// The check run API could not be reached or answered with an error.
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configuration => "configuration",
            Self::FileAccess => "file-access",
            Self::Engine => "engine",
            Self::Transport => "transport",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum LintCheckError {
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Circular extends detected: {}", chain.join(" -> "))]
    CircularExtends { chain: Vec<String> },

    #[error("Extends chain too deep ({depth} > {max}): {}", chain.join(" -> "))]
    ExtendsTooDeep {
        depth: usize,
        max: usize,
        chain: Vec<String>,
    },

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidRule {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Lint engine error: {0}")]
    Engine(String),

    #[error("Check run request failed: {0}")]
    Transport(String),

    #[error("Check run API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LintCheckError {
    /// Classify the error into one of the pipeline failure kinds.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput(_)
            | Self::Config(_)
            | Self::InvalidPattern { .. }
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::CircularExtends { .. }
            | Self::ExtendsTooDeep { .. } => ErrorKind::Configuration,
            Self::FileAccess { .. } => ErrorKind::FileAccess,
            Self::InvalidRule { .. } | Self::Engine(_) => ErrorKind::Engine,
            Self::Transport(_) | Self::Api { .. } | Self::Json(_) => ErrorKind::Transport,
        }
    }
}

pub type Result<T> = std::result::Result<T, LintCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

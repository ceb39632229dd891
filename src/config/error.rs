use std::path::PathBuf;

use serde_json::error::Category;
use thiserror::Error;

use super::locate::key_path_at;

/// Failure to turn configuration text into a [`Config`](super::Config).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The text is not well-formed JSON once comments are removed.
    #[error("malformed input at line {line} column {column}: {message}")]
    MalformedInput {
        message: String,
        line: usize,
        column: usize,
    },

    /// Well-formed JSON that does not fit the configuration schema.
    #[error("schema mismatch at '{path}' (line {line} column {column}): {message}")]
    SchemaMismatch {
        /// Dotted key path of the offending value, empty for the root object.
        path: String,
        message: String,
        line: usize,
        column: usize,
    },
}

impl DecodeError {
    /// Classifies a `serde_json` error raised while decoding `text`.
    pub(crate) fn from_json(err: serde_json::Error, text: &str) -> Self {
        let (line, column) = (err.line(), err.column());
        match err.classify() {
            // `Io` only arises from reader-backed parsing; text is always in memory.
            Category::Syntax | Category::Eof | Category::Io => Self::MalformedInput {
                message: message_of(&err),
                line,
                column,
            },
            Category::Data => Self::SchemaMismatch {
                path: key_path_at(text, line, column),
                message: message_of(&err),
                line,
                column,
            },
        }
    }

    /// Line reported by the JSON parser, 1-based. Zero when unknown.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedInput { line, .. } | Self::SchemaMismatch { line, .. } => *line,
        }
    }

    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. })
    }
}

/// The error message without the trailing " at line X column Y".
fn message_of(err: &serde_json::Error) -> String {
    let full = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match full.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => full,
    }
}

/// Failure to locate, read, or decode a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported config file format: '{0}' (expected .jsonc or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("no config.jsonc or config.json found in '{dir}'")]
    NoConfigFile { dir: PathBuf },

    #[error("failed to decode config file '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: DecodeError,
    },
}

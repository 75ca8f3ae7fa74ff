//! Unified error types for the screen and prompt layers.

use std::fmt;
use std::process::ExitStatus;

// ---------------------------------------------------------------------------
// BufferError
// ---------------------------------------------------------------------------

/// Errors from line-buffer mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// `append_to_last_line` was called before any line existed.
    Empty,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "line buffer is empty; append a line first"),
        }
    }
}

impl std::error::Error for BufferError {}

// ---------------------------------------------------------------------------
// ClearError
// ---------------------------------------------------------------------------

/// Errors from clearing the terminal.
///
/// The renderer only logs these; a failed clear never aborts a frame.
#[derive(Debug)]
pub enum ClearError {
    /// Spawning or waiting on the clear command failed.
    Io(std::io::Error),
    /// The clear command ran but exited unsuccessfully.
    Status(ExitStatus),
}

impl fmt::Display for ClearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Status(status) => write!(f, "clear command exited with {status}"),
        }
    }
}

impl std::error::Error for ClearError {}

impl From<std::io::Error> for ClearError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors surfaced by prompt operations.
#[derive(Debug)]
pub enum PromptError {
    /// The input source hit end-of-stream before an acceptable line arrived.
    InputExhausted,
    /// Reading input or writing the screen failed.
    Io(std::io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputExhausted => write!(f, "input closed before a valid response was entered"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

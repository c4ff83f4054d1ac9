//! Error types for jobstage
//!
//! Uses `thiserror` for library errors. Every failure is surfaced to the
//! caller; nothing in this crate retries.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for jobstage operations
pub type StageResult<T> = Result<T, StageError>;

/// Main error type for jobstage operations
#[derive(Error, Debug)]
pub enum StageError {
    /// Source reference has no usable trailing segment
    #[error("invalid reference '{reference}': no path segment to use as a file name")]
    InvalidReference { reference: String },

    /// Entity id is empty, `.`/`..`, or would split into several path components
    #[error("invalid entity id '{entity_id}': must be non-empty, not '.' or '..', and contain no '/'")]
    InvalidEntityId { entity_id: String },

    /// Entity kind outside {APPLICATION, COMMAND, CLUSTER}
    #[error("unsupported entity kind '{value}'")]
    UnsupportedKind { value: String },

    /// File category outside {CONFIG, SETUP, DEPENDENCIES}
    #[error("unsupported file category '{value}'")]
    UnsupportedCategory { value: String },

    /// Argument vector without an executable
    #[error("command argument vector is empty")]
    EmptyCommand,

    /// The executable could not be started
    #[error("failed to launch '{program}': {source}")]
    CommandLaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully
    #[error("command '{command}' failed with {}{}", exit_description(.exit_code), stderr_suffix(.stderr))]
    CommandExecutionFailure {
        command: String,
        exit_code: Option<i32>,
        stderr: Option<String>,
    },

    /// The process outlived the configured deadline and was killed
    #[error("command '{command}' timed out after {}s", whole_secs(.timeout))]
    CommandTimedOut { command: String, timeout: Duration },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl StageError {
    /// Whether a workflow engine may reasonably try the step again.
    ///
    /// This is a hint only; the retry policy belongs to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StageError::CommandExecutionFailure { .. } | StageError::CommandTimedOut { .. }
        )
    }

    /// Errors that indicate a bug in the calling task rather than in the
    /// environment.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            StageError::UnsupportedKind { .. }
                | StageError::UnsupportedCategory { .. }
                | StageError::EmptyCommand
        )
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "termination by signal".to_string(),
    }
}

fn whole_secs(timeout: &Duration) -> u64 {
    timeout.as_secs()
}

fn stderr_suffix(stderr: &Option<String>) -> String {
    match stderr.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(": {}", text),
        _ => String::new(),
    }
}

//! CommandSpec value object - an argument vector plus optional working directory

use std::path::{Path, PathBuf};

use crate::error::{StageError, StageResult};

/// External command to run, as a discrete argument vector.
///
/// The vector is never joined into a shell string. `argv[0]` is the
/// executable; the rest are its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    argv: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandSpec {
    /// Build a spec from an argument vector. Fails on an empty vector.
    pub fn new<I, S>(argv: I) -> StageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(StageError::EmptyCommand);
        }
        Ok(Self {
            argv,
            working_dir: None,
        })
    }

    /// Run the command from `dir` instead of the caller's directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Space-joined argv, for error messages and logs only
    pub fn display_command(&self) -> String {
        self.argv.join(" ")
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_command())
    }
}

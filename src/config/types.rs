//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StageResult;

use super::loader::{self, ConfigWarning};

/// Command runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Pipe stderr and attach its tail to execution failures
    #[serde(default = "default_true")]
    pub capture_stderr: bool,

    /// Bytes of stderr kept (the end of the stream)
    #[serde(default = "default_stderr_limit")]
    pub stderr_limit: usize,

    /// Let the child write to our stdout instead of discarding it
    #[serde(default)]
    pub inherit_stdout: bool,

    /// Kill the child after this many seconds. Unset or 0 means wait forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl RunnerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            capture_stderr: true,
            stderr_limit: default_stderr_limit(),
            inherit_stdout: false,
            timeout_secs: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_stderr_limit() -> usize {
    4096
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `path` if it exists and parses, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (JOBSTAGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

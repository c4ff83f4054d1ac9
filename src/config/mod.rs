//! Configuration module for jobstage
//!
//! Precedence, highest first:
//! 1. Environment variables (JOBSTAGE_*)
//! 2. Config file passed by the embedding engine
//! 3. Built-in defaults
//!
//! ```toml
//! [runner]
//! capture_stderr = true
//! stderr_limit = 4096
//! inherit_stdout = false
//! timeout_secs = 300
//! ```

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, RunnerConfig};

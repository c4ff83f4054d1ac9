//! jobstage - staging primitives for job setup workflows
//!
//! Every step that prepares a job's working directory needs the same two
//! things: a fixed place inside the job workspace for each fetched file, and
//! a way to run a short setup command and learn precisely how it failed.
//!
//! ```no_run
//! use jobstage::{EntityKind, FileCategory, LocalCommandRunner, TaskSupport};
//!
//! # fn main() -> jobstage::StageResult<()> {
//! let support = TaskSupport::new("/mnt/jobs/1234", LocalCommandRunner::default());
//! let setup = support.local_path(
//!     "spark",
//!     "s3://configs/spark/setup.sh",
//!     FileCategory::Setup,
//!     EntityKind::Application,
//! )?;
//! // /mnt/jobs/1234/applications/spark/setup_file/setup.sh
//! let script = setup.to_string_lossy().into_owned();
//! support.run_in(["sh".to_string(), script], support.workspace_root())?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::TaskSupport;
pub use config::{Config, ConfigWarning, RunnerConfig};
pub use domain::ports::CommandRunner;
pub use domain::services::{build_local_path, last_segment, LocalFileRequest};
pub use domain::value_objects::{CommandSpec, EntityKind, FileCategory};
pub use error::{StageError, StageResult};
pub use infrastructure::LocalCommandRunner;

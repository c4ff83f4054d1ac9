//! CommandRunner port - synchronous execution of external commands
//!
//! Workflow tasks depend on this trait rather than on `std::process`
//! directly, so tests can substitute a recording runner.

use crate::domain::value_objects::CommandSpec;
use crate::error::StageResult;

/// Runs an external command to completion.
///
/// Implementations:
/// - `LocalCommandRunner` - spawns a child process on this host
///
/// Contract:
/// - blocks until the child exits
/// - `Ok(())` only for exit code 0
/// - launch problems map to `StageError::CommandLaunchFailure`
/// - non-zero exits map to `StageError::CommandExecutionFailure`
/// - no caching: every call runs the command again
pub trait CommandRunner: Send + Sync {
    fn run(&self, spec: &CommandSpec) -> StageResult<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> StageResult<()> {
        (**self).run(spec)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    fn run(&self, spec: &CommandSpec) -> StageResult<()> {
        (**self).run(spec)
    }
}

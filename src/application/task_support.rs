//! Task Support
//!
//! The capability set every workflow task needs: place a staged file inside
//! the job workspace and run a setup command. Tasks hold a `TaskSupport`
//! rather than inheriting from a shared base.

use std::path::{Path, PathBuf};

use crate::domain::ports::CommandRunner;
use crate::domain::services::build_local_path;
use crate::domain::value_objects::{CommandSpec, EntityKind, FileCategory};
use crate::error::StageResult;

/// Path resolution and command execution bound to one job workspace.
#[derive(Debug, Clone)]
pub struct TaskSupport<R: CommandRunner> {
    workspace_root: PathBuf,
    runner: R,
}

impl<R: CommandRunner> TaskSupport<R> {
    pub fn new(workspace_root: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            runner,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Where the file behind `source_reference` is staged for this job
    pub fn local_path(
        &self,
        entity_id: &str,
        source_reference: &str,
        category: FileCategory,
        kind: EntityKind,
    ) -> StageResult<PathBuf> {
        build_local_path(
            &self.workspace_root,
            entity_id,
            source_reference,
            category,
            kind,
        )
    }

    /// Run `argv` from the caller's working directory
    pub fn run<I, S>(&self, argv: I) -> StageResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_spec(&CommandSpec::new(argv)?)
    }

    /// Run `argv` with `working_dir` as its current directory
    pub fn run_in<I, S>(&self, argv: I, working_dir: impl Into<PathBuf>) -> StageResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_spec(&CommandSpec::new(argv)?.with_working_dir(working_dir))
    }

    pub fn run_spec(&self, spec: &CommandSpec) -> StageResult<()> {
        self.runner.run(spec)
    }
}

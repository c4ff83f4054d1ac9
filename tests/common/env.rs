//! Isolated job workspace for jobstage tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use jobstage::{
    EntityKind, FileCategory, LocalCommandRunner, RunnerConfig, StageResult, TaskSupport,
};
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (RUST_LOG controls level).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A job workspace rooted in a fresh temp directory.
pub struct TestWorkspace {
    pub root: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        init_tracing();
        Self {
            root: tempfile::tempdir().expect("create temp workspace"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Task support with the default runner configuration
    pub fn support(&self) -> TaskSupport<LocalCommandRunner> {
        self.support_with(RunnerConfig::default())
    }

    pub fn support_with(&self, config: RunnerConfig) -> TaskSupport<LocalCommandRunner> {
        TaskSupport::new(self.path(), LocalCommandRunner::new(config))
    }

    /// Resolve the staged path for `reference` and write `content` there,
    /// standing in for the fetch layer.
    pub fn stage(
        &self,
        entity_id: &str,
        reference: &str,
        category: FileCategory,
        kind: EntityKind,
        content: &str,
    ) -> StageResult<PathBuf> {
        let path = self.support().local_path(entity_id, reference, category, kind)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }
}

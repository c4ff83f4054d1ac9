//! Scenario: Many Jobs at Once
//!
//! Journey: the engine runs several jobs' task chains on their own threads,
//! all sharing one runner.
//!
//! Success Criteria:
//! - Shared runner needs no locking
//! - Each job's files stay inside its own workspace
//! - One job's failure does not affect the others

#![cfg(unix)]

use std::sync::Arc;
use std::thread;

use jobstage::{EntityKind, FileCategory, LocalCommandRunner, StageError, TaskSupport};

use crate::common::*;

/// SCENARIO: parallel task chains with a shared runner
#[test]
fn scenario_parallel_jobs_share_runner() {
    init_tracing();
    let runner = Arc::new(LocalCommandRunner::default());
    let workspaces: Vec<_> = (0..8).map(|_| tempfile::tempdir().unwrap()).collect();

    let handles: Vec<_> = workspaces
        .iter()
        .enumerate()
        .map(|(job, dir)| {
            let runner = Arc::clone(&runner);
            let root = dir.path().to_path_buf();
            thread::spawn(move || {
                let support = TaskSupport::new(root, runner);
                let deps = support.local_path(
                    "hadoop",
                    "hdfs:///libs/hadoop/deps.tar.gz",
                    FileCategory::Dependencies,
                    EntityKind::Cluster,
                )?;
                let dir = deps.parent().unwrap().to_path_buf();
                std::fs::create_dir_all(&dir)?;

                // odd jobs fail on purpose
                let script = if job % 2 == 0 { "touch ok" } else { "exit 4" };
                support.run_in(["sh", "-c", script], &dir)?;
                Ok::<_, StageError>(dir.join("ok"))
            })
        })
        .collect();

    for (job, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().expect("task thread panicked");
        if job % 2 == 0 {
            let marker = outcome.unwrap();
            assert!(marker.is_file());
            assert!(marker.starts_with(workspaces[job].path()));
        } else {
            crate::assert_execution_failure!(outcome, 4);
        }
    }
}

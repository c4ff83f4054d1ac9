//! Scenario: Application Setup Script
//!
//! Journey: a job uses an application that ships a setup script.
//!
//! Steps:
//! 1. Task resolves where the script goes in the job workspace
//! 2. Fetch layer (simulated) writes it there
//! 3. Task runs the script from the workspace root
//!
//! Success Criteria:
//! - Script lands under `applications/<id>/setup_file/`
//! - Script runs with the workspace as its working directory
//! - A failing script surfaces its exit code and stderr

#![cfg(unix)]

use jobstage::{EntityKind, FileCategory, RunnerConfig, StageError};

use crate::common::*;

/// SCENARIO: setup script staged and executed
#[test]
fn scenario_stage_and_run_setup_script() {
    let ws = TestWorkspace::new();

    let script = ws
        .stage(
            "spark-2.4.3",
            "s3://artifacts/applications/spark/2.4.3/setup.sh",
            FileCategory::Setup,
            EntityKind::Application,
            MARKER_SETUP_SCRIPT,
        )
        .unwrap();
    crate::assert_staged!(ws, "applications/spark-2.4.3/setup_file/setup.sh");

    let support = ws.support();
    support
        .run_in(
            ["sh".to_string(), script.display().to_string()],
            ws.path(),
        )
        .unwrap();

    // the script wrote relative to its working directory
    crate::assert_staged!(ws, "setup.marker");
}

/// SCENARIO: a broken setup script stops the job with a useful reason
#[test]
fn scenario_failing_setup_script_reports_reason() {
    let ws = TestWorkspace::new();

    let script = ws
        .stage(
            "presto",
            "presto/setup.sh",
            FileCategory::Setup,
            EntityKind::Command,
            FAILING_SETUP_SCRIPT,
        )
        .unwrap();

    let err = ws
        .support()
        .run_in(["sh".to_string(), script.display().to_string()], ws.path())
        .unwrap_err();

    match &err {
        StageError::CommandExecutionFailure {
            exit_code, stderr, ..
        } => {
            assert_eq!(*exit_code, Some(7));
            assert_eq!(stderr.as_deref().map(str::trim), Some("missing JAVA_HOME"));
        }
        other => panic!("expected CommandExecutionFailure, got {:?}", other),
    }

    let reason = err.to_string();
    assert!(reason.contains("setup.sh"), "reason was {}", reason);
    assert!(reason.contains("exit code 7"), "reason was {}", reason);
    assert!(reason.ends_with("missing JAVA_HOME"), "reason was {}", reason);
}

/// SCENARIO: operators turned stderr capture off
#[test]
fn scenario_failure_without_stderr_capture() {
    let ws = TestWorkspace::new();
    let script = ws
        .stage(
            "presto",
            "presto/setup.sh",
            FileCategory::Setup,
            EntityKind::Command,
            FAILING_SETUP_SCRIPT,
        )
        .unwrap();

    let support = ws.support_with(RunnerConfig {
        capture_stderr: false,
        ..RunnerConfig::default()
    });
    let err = support
        .run(["sh".to_string(), script.display().to_string()])
        .unwrap_err();

    assert!(matches!(
        err,
        StageError::CommandExecutionFailure {
            exit_code: Some(7),
            stderr: None,
            ..
        }
    ));
}

/// SCENARIO: every entity contributes config for the same job
#[test]
fn scenario_configs_from_all_entities_do_not_collide() {
    let ws = TestWorkspace::new();

    for kind in EntityKind::ALL {
        ws.stage("shared-id", "conf/site.xml", FileCategory::Config, kind, kind.as_str())
            .unwrap();
    }

    crate::assert_staged!(ws, "applications/shared-id/config/site.xml");
    crate::assert_staged!(ws, "command/shared-id/config/site.xml");
    crate::assert_staged!(ws, "cluster/shared-id/config/site.xml");

    let cluster = std::fs::read_to_string(ws.path().join("cluster/shared-id/config/site.xml")).unwrap();
    assert_eq!(cluster, "CLUSTER");
}

//! Local Command Runner
//!
//! Implements the CommandRunner port with `std::process`.

use std::io::Read;
use std::process::{Child, ChildStderr, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::RunnerConfig;
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::CommandSpec;
use crate::error::{StageError, StageResult};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Longest wait for the stderr tail once the child has exited. Background
/// processes the child left behind can hold the pipe open indefinitely.
const STDERR_GRACE: Duration = Duration::from_secs(1);

/// Runs commands as child processes of the current process.
///
/// Holds only immutable configuration, so one instance can be shared by
/// every job's task chain.
#[derive(Debug, Clone, Default)]
pub struct LocalCommandRunner {
    config: RunnerConfig,
}

impl LocalCommandRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    fn build_command(&self, spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(spec.program());
        cmd.args(spec.args()).stdin(Stdio::null());

        if let Some(dir) = spec.working_dir() {
            cmd.current_dir(dir);
        }

        if self.config.inherit_stdout {
            cmd.stdout(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null());
        }

        if self.config.capture_stderr {
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stderr(Stdio::null());
        }

        cmd
    }

    /// Wait for `child`, killing it once `deadline` has passed.
    ///
    /// Returns `Ok(None)` when the child was killed.
    fn wait_with_deadline(child: &mut Child, deadline: Instant) -> StageResult<Option<ExitStatus>> {
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(Some(status)),
                Ok(None) => {}
                Err(e) => {
                    kill_and_reap(child);
                    return Err(e.into());
                }
            }

            let now = Instant::now();
            if now >= deadline {
                kill_and_reap(child);
                return Ok(None);
            }

            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}

impl CommandRunner for LocalCommandRunner {
    fn run(&self, spec: &CommandSpec) -> StageResult<()> {
        let command = spec.display_command();
        tracing::debug!(
            command = %command,
            working_dir = ?spec.working_dir(),
            "Spawning command"
        );

        let started = Instant::now();
        let mut child = self.build_command(spec).spawn().map_err(|source| {
            tracing::error!(command = %command, error = %source, "Failed to launch command");
            StageError::CommandLaunchFailure {
                program: spec.program().to_string(),
                source,
            }
        })?;

        // Drained on its own thread so a child filling the pipe cannot block on us.
        let stderr_reader = child
            .stderr
            .take()
            .map(|pipe| spawn_tail_reader(pipe, self.config.stderr_limit));

        let timeout = self.config.timeout();
        let deadline = timeout.map(|timeout| started + timeout);

        let status = match (timeout, deadline) {
            (Some(timeout), Some(deadline)) => match Self::wait_with_deadline(&mut child, deadline)? {
                Some(status) => status,
                None => {
                    // the drain thread is left to finish on its own
                    tracing::warn!(
                        command = %command,
                        timeout_secs = timeout.as_secs(),
                        "Command timed out and was killed"
                    );
                    return Err(StageError::CommandTimedOut { command, timeout });
                }
            },
            _ => child.wait()?,
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;

        if status.success() {
            tracing::info!(command = %command, elapsed_ms, "Command completed");
            return Ok(());
        }

        let stderr = stderr_reader.and_then(|reader| collect_tail(&command, &reader, deadline));

        tracing::warn!(
            command = %command,
            exit_code = ?status.code(),
            elapsed_ms,
            "Command exited unsuccessfully"
        );

        Err(StageError::CommandExecutionFailure {
            command,
            exit_code: status.code(),
            stderr,
        })
    }
}

/// Kill `child` and reap it. Kill fails if it already exited; reap either way.
fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Read `pipe` to the end on a background thread, keeping only its last
/// `limit` bytes. The tail is sent once the pipe closes.
fn spawn_tail_reader(mut pipe: ChildStderr, limit: usize) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut tail = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    tail.extend_from_slice(&buf[..n]);
                    keep_tail(&mut tail, limit);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
        // receiver is gone when run() stopped waiting
        let _ = tx.send(tail);
    });
    rx
}

/// Stderr tail of an exited child, waiting no longer than the deadline
/// allows (or `STDERR_GRACE` without one).
fn collect_tail(command: &str, reader: &Receiver<Vec<u8>>, deadline: Option<Instant>) -> Option<String> {
    let wait = match deadline {
        Some(deadline) => deadline
            .saturating_duration_since(Instant::now())
            .clamp(POLL_INTERVAL, STDERR_GRACE),
        None => STDERR_GRACE,
    };

    match reader.recv_timeout(wait) {
        Ok(tail) if tail.is_empty() => None,
        Ok(tail) => Some(String::from_utf8_lossy(&tail).into_owned()),
        Err(_) => {
            tracing::debug!(
                command = %command,
                wait_ms = wait.as_millis() as u64,
                "Stderr still held open after exit; dropping tail"
            );
            None
        }
    }
}

fn keep_tail(buf: &mut Vec<u8>, limit: usize) {
    if buf.len() > limit {
        let excess = buf.len() - limit;
        buf.drain(..excess);
    }
}

// Tue Jan 13 2026 - Alex

use crate::engine::availability::AvailabilityGate;
use crate::engine::result::TaskOutcome;
use crate::engine::task::{TaskExecutor, ToolTask};
use log::{error, info, warn};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(180);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Error, Debug)]
enum RunError {
    #[error("failed to spawn: {0}")]
    Spawn(std::io::Error),

    #[error("failed to wait for process: {0}")]
    Wait(std::io::Error),

    #[error("failed to read output: {0}")]
    Read(std::io::Error),

    #[error("stdout was not captured")]
    NoStdout,

    #[error("output reader exited without a result")]
    OutputLost,

    #[error("command exited with {0}")]
    Exit(ExitStatus),

    #[error("timed out")]
    TimedOut,
}

/// Subprocess executor: availability check, spawn, bounded wait.
#[derive(Debug, Clone)]
pub struct TaskRunner {
    timeout: Duration,
    gate: AvailabilityGate,
    poll_interval: Duration,
}

impl TaskRunner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            gate: AvailabilityGate::new(),
            poll_interval: POLL_INTERVAL,
        }
    }

    pub fn with_gate(mut self, gate: AvailabilityGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn run(&self, task: &ToolTask) -> TaskOutcome {
        let start = Instant::now();
        info!("Running: {}", task.name);

        let executable = match self.gate.resolve(&task.command.program) {
            Some(path) => path,
            None => {
                warn!("{} not found. Skipping...", task.name);
                return TaskOutcome::not_found(&task.name);
            }
        };

        match self.spawn_and_wait(&executable, &task.command.args) {
            Ok(output) => {
                let elapsed = start.elapsed();
                info!("Finished: {} in {}s", task.name, elapsed.as_secs());
                TaskOutcome::ok(&task.name, output, elapsed)
            }
            Err(RunError::TimedOut) => {
                let elapsed = start.elapsed();
                warn!("{} timed out after {}s", task.name, elapsed.as_secs());
                TaskOutcome::timed_out(&task.name, elapsed)
            }
            Err(e) => {
                error!("{} failed: {}", task.name, e);
                TaskOutcome::failed(&task.name, e.to_string(), start.elapsed())
            }
        }
    }

    fn spawn_and_wait(&self, executable: &Path, args: &[String]) -> Result<String, RunError> {
        let mut command = Command::new(executable);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let spawned_at = Instant::now();
        let mut child = command.spawn().map_err(RunError::Spawn)?;
        // None when the timeout does not fit in an Instant: wait without a deadline.
        let deadline = spawned_at.checked_add(self.timeout);

        let mut stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                kill_and_reap(&mut child);
                return Err(RunError::NoStdout);
            }
        };

        // Drain on a separate thread so a full pipe never stalls the child.
        let (tx, rx) = mpsc::channel();
        let reader = thread::Builder::new()
            .name("tool-stdout".to_string())
            .spawn(move || {
                let mut buf = Vec::new();
                let result = stdout.read_to_end(&mut buf).map(|_| buf);
                let _ = tx.send(result);
            });

        if let Err(e) = reader {
            kill_and_reap(&mut child);
            return Err(RunError::Spawn(e));
        }

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {}
                Err(e) => {
                    kill_and_reap(&mut child);
                    return Err(RunError::Wait(e));
                }
            }

            let pause = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        kill_and_reap(&mut child);
                        return Err(RunError::TimedOut);
                    }
                    self.poll_interval.min(deadline - now)
                }
                None => self.poll_interval,
            };
            thread::sleep(pause);
        };

        // A detached grandchild can keep the pipe open after the child exits.
        let received = match deadline {
            Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let bytes = match received {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => return Err(RunError::Read(e)),
            Err(RecvTimeoutError::Timeout) => {
                // Take down the grandchildren so the reader sees EOF and exits.
                kill_group(&child);
                return Err(RunError::TimedOut);
            }
            Err(RecvTimeoutError::Disconnected) => return Err(RunError::OutputLost),
        };

        if !status.success() {
            return Err(RunError::Exit(status));
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl TaskExecutor for TaskRunner {
    fn execute(&self, task: &ToolTask) -> TaskOutcome {
        self.run(task)
    }
}

fn kill_and_reap(child: &mut Child) {
    kill_group(child);
    let _ = child.kill();
    let _ = child.wait();
}

/// SIGKILL the child's process group; the child leads its own group.
#[cfg(unix)]
fn kill_group(child: &Child) {
    let Ok(pgid) = libc::pid_t::try_from(child.id()) else {
        return;
    };
    unsafe {
        libc::kill(-pgid, libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_group(_child: &Child) {}

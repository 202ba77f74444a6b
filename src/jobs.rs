//! Background job tracking and reaping.

use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::Child;

use log::{debug, warn};

#[derive(Default)]
pub struct BackgroundJobManager {
    jobs: Vec<BackgroundJob>,
}

impl BackgroundJobManager {
    pub fn has_jobs(&self) -> bool {
        !self.jobs.is_empty()
    }

    /// Registers a freshly spawned background child and announces its pid.
    pub fn add_job(&mut self, command: &str, child: Child) {
        println!("background pid is {}", child.id());
        debug!("tracking background pid {}: {}", child.id(), command);
        self.jobs.push(BackgroundJob {
            command: command.to_string(),
            child,
        });
    }

    /// Polls every tracked job without blocking, reporting and dropping the
    /// finished ones. Jobs still running are rechecked on the next cycle.
    pub fn check_jobs(&mut self) {
        self.jobs.retain_mut(|job| {
            let pid = job.child.id();
            match job.child.try_wait() {
                Ok(Some(status)) => {
                    if let Some(signal) = status.signal() {
                        println!("Background pid {} is done: terminated by signal {}", pid, signal);
                    } else {
                        println!(
                            "Background pid {} is done: exit value {}",
                            pid,
                            status.code().unwrap_or(1)
                        );
                    }
                    false
                }
                Ok(None) => true,
                Err(e) => {
                    warn!("failed to poll background pid {}: {}", pid, e);
                    true
                }
            }
        });
    }

    /// Forcefully terminates and reaps every outstanding job. Called once,
    /// on interpreter shutdown.
    pub fn kill_all(&mut self) {
        for mut job in self.jobs.drain(..) {
            let pid = job.child.id();
            debug!("killing background pid {}", pid);
            if let Err(e) = job.child.kill() {
                warn!("failed to kill background pid {}: {}", pid, e);
            }
            let temp_result = job.child.wait();
            log_if_err!(temp_result, "failed to reap background pid {}", pid);
        }
    }
}

impl fmt::Debug for BackgroundJobManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} jobs", self.jobs.len())?;
        for job in &self.jobs {
            write!(f, "{:?}", job)?;
        }

        Ok(())
    }
}

/// A process running in the background that the shell is responsible for.
struct BackgroundJob {
    command: String,
    child: Child,
}

impl fmt::Debug for BackgroundJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command: {}\tpid: {}", self.command, self.child.id())
    }
}

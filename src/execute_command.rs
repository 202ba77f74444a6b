//! Spawning and waiting on non-built-in commands.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::{Child, Command, ExitStatus, Stdio};

use failure::{Fail, ResultExt};

use crate::builtins;
use crate::core::parser;
use crate::errors::{Error, ErrorKind, Result};
use crate::shell::Shell;
use crate::signals;
use crate::util::SmashExitStatusExt;

#[derive(Debug)]
enum Input {
    Inherit,
    File(File),
}

#[derive(Debug)]
enum Output {
    Inherit,
    File(File),
}

impl Input {
    fn new(redirect: Option<&str>) -> Result<Self> {
        match redirect {
            Some(filename) => File::open(filename)
                .map(Input::File)
                .map_err(|_| Error::redirect(filename)),
            None => Ok(Input::Inherit),
        }
    }
}

impl Output {
    fn new(redirect: Option<&str>) -> Result<Self> {
        match redirect {
            Some(filename) => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(filename)
                .map(Output::File)
                .map_err(|_| Error::redirect(filename)),
            None => Ok(Output::Inherit),
        }
    }
}

impl From<Input> for Stdio {
    fn from(stdin: Input) -> Self {
        match stdin {
            Input::Inherit => Self::inherit(),
            Input::File(file) => file.into(),
        }
    }
}

impl From<Output> for Stdio {
    fn from(stdout: Output) -> Self {
        match stdout {
            Output::Inherit => Self::inherit(),
            Output::File(file) => file.into(),
        }
    }
}

/// Runs one parsed command to completion of the interpreter's part in it:
/// builtins execute synchronously, foreground commands are waited on,
/// background commands are registered with the job table.
pub fn run_command(shell: &mut Shell, command: &parser::Command) -> Result<()> {
    if builtins::is_builtin(&command.argv) {
        builtins::run(shell, &command.argv)
    } else {
        run_external_command(shell, command)
    }
}

fn run_external_command(shell: &mut Shell, command: &parser::Command) -> Result<()> {
    let program = &command.argv[0];
    let args = &command.argv[1..];

    let stdin = Input::new(command.infile.as_deref())?;
    let stdout = Output::new(command.outfile.as_deref())?;

    let mut process = Command::new(program);
    process.args(args);
    process.stdin(stdin);
    process.stdout(stdout);

    // Runs in the child between fork and exec. Background children keep the
    // interpreter's SIGINT-ignore disposition.
    let background = command.background;
    unsafe {
        process.pre_exec(move || {
            if !background {
                signals::restore_default_interrupt_handler();
            }
            Ok(())
        });
    }

    let child = match process.spawn() {
        Ok(child) => child,
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                return Err(Error::command_not_found(program));
            }
            return Err(e.context(ErrorKind::Io).into());
        }
    };

    if background {
        shell.job_manager_mut().add_job(&command.input, child);
        Ok(())
    } else {
        wait_for_foreground(shell, child)
    }
}

/// Blocks until `child` exits; the one blocking point in the interpreter.
fn wait_for_foreground(shell: &mut Shell, mut child: Child) -> Result<()> {
    let status = child.wait().context(ErrorKind::Io)?;
    if let Some(signal) = status.signal() {
        println!("terminated by signal {}", signal);
    }

    // A raw wait status of exactly zero counts as success, anything else as
    // failure; finer exit codes are not recorded.
    let last_exit_status = if status.success() {
        ExitStatus::from_success()
    } else {
        ExitStatus::from_failure()
    };
    shell.set_last_exit_status(last_exit_status);
    Ok(())
}

//! Smash - Shell Module
//!
//! The Shell drives one interpreter cycle: reap finished background jobs,
//! prompt, read a line, expand the pid variable, parse and dispatch either
//! to a builtin or to the process executor.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{self, ExitStatus};

use atty::Stream;
use failure::ResultExt;
use log::{error, info, warn};

use crate::core::{expansion, parser};
use crate::editor::Editor;
use crate::errors::{ErrorKind, Result};
use crate::execute_command;
use crate::jobs::BackgroundJobManager;
use crate::signals;
use crate::util::SmashExitStatusExt;

const PROMPT: &str = ": ";
const COMMENT_MARKER: char = '#';
const HISTORY_FILE_NAME: &str = ".smash_history";

/// Smash Shell
pub struct Shell {
    /// Responsible for readline and history.
    editor: Editor,
    history_file: Option<PathBuf>,
    job_manager: BackgroundJobManager,
    /// Exit status of the last foreground command executed.
    last_exit_status: ExitStatus,
    config: ShellConfig,
    is_interactive: bool,
}

impl Shell {
    /// Constructs a new Shell to manage running jobs and command history.
    pub fn new(config: ShellConfig) -> Result<Shell> {
        signals::initialize()?;

        let mut shell = Shell {
            editor: Editor::with_capacity(config.command_history_capacity),
            history_file: None,
            job_manager: Default::default(),
            last_exit_status: ExitStatus::from_success(),
            config,
            is_interactive: atty::is(Stream::Stdin),
        };

        if shell.config.enable_command_history && shell.is_interactive {
            shell.load_history()?;
        }

        info!("smash started up");
        Ok(shell)
    }

    pub fn is_interactive(&self) -> bool {
        self.is_interactive
    }

    /// Exit status of the last foreground command executed.
    pub fn last_exit_status(&self) -> ExitStatus {
        self.last_exit_status
    }

    pub(crate) fn set_last_exit_status(&mut self, status: ExitStatus) {
        self.last_exit_status = status;
    }

    pub(crate) fn job_manager_mut(&mut self) -> &mut BackgroundJobManager {
        &mut self.job_manager
    }

    fn load_history(&mut self) -> Result<()> {
        self.history_file = dirs::home_dir().map(|p| p.join(HISTORY_FILE_NAME));
        if let Some(history_file) = self.history_file.clone() {
            self.editor.load_history(&history_file)?;
        } else {
            warn!("unable to get home directory");
        }

        Ok(())
    }

    /// Runs one input line through expansion, parsing and dispatch.
    pub fn execute_command_string(&mut self, input: &str) -> Result<()> {
        // blank lines and comment lines reprompt without being parsed
        if input.is_empty() || input.starts_with(COMMENT_MARKER) {
            return Ok(());
        }

        if self.config.enable_command_history && self.is_interactive {
            self.editor.add_history_entry(input);
        }

        let expanded = expansion::expand_pid(input, process::id());
        let command = match parser::Command::parse(&expanded, signals::foreground_only()) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(e) => {
                if let ErrorKind::MissingRedirectTarget(_) = *e.kind() {
                    eprintln!("smash: {}", e);
                    return Ok(());
                }

                return Err(e);
            }
        };

        self.execute_command(&command)
    }

    /// Runs the commands in `path`, one per line, reaping background jobs
    /// between lines the way the interactive loop does.
    pub fn execute_commands_from_file(&mut self, path: &Path) -> Result<()> {
        let mut f = File::open(path).context(ErrorKind::Io)?;
        let mut buffer = String::new();
        f.read_to_string(&mut buffer).context(ErrorKind::Io)?;

        for line in buffer.split('\n') {
            self.job_manager.check_jobs();
            self.execute_command_string(line)?;
        }

        Ok(())
    }

    /// The interactive loop. Returns when end of file is read; the `exit`
    /// builtin terminates the process directly.
    pub fn execute_from_stdin(&mut self) {
        loop {
            // Report the background jobs that finished since the last cycle.
            self.job_manager.check_jobs();

            let input = match self.prompt() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                e => {
                    log_if_err!(e, "prompt");
                    continue;
                }
            };

            let temp_result = self.execute_command_string(&input);
            log_if_err!(temp_result, "execute_command_string");
        }
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        self.editor.readline(PROMPT)
    }

    fn execute_command(&mut self, command: &parser::Command) -> Result<()> {
        match execute_command::run_command(self, command) {
            Err(e) => match *e.kind() {
                ErrorKind::CommandNotFound(_) => {
                    eprintln!("smash: {}", e);
                    self.last_exit_status = ExitStatus::from_failure();
                    Ok(())
                }
                ErrorKind::Redirect(_) => {
                    eprintln!("{}", e);
                    if !command.background {
                        self.last_exit_status = ExitStatus::from_failure();
                    }
                    Ok(())
                }
                ErrorKind::BuiltinCommand { .. } => {
                    eprintln!("smash: {}", e);
                    Ok(())
                }
                _ => Err(e),
            },
            ok => ok,
        }
    }

    /// Terminates the interpreter, forcefully ending any outstanding
    /// background jobs first. Exits 0 unless an explicit status is given.
    pub fn exit(&mut self, n: Option<ExitStatus>) -> ! {
        if self.config.display_messages {
            println!("exit");
        }

        if self.job_manager.has_jobs() {
            self.job_manager.kill_all();
        }

        if self.config.enable_command_history {
            if let Some(ref history_file) = self.history_file {
                if let Err(e) = self.editor.save_history(history_file) {
                    error!("failed to save history to file during shutdown: {}", e);
                }
            }
        }

        let code = n.map(|status| status.code().unwrap_or(1)).unwrap_or(0);
        info!("smash has shut down");
        process::exit(code);
    }
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}\n{:?}", self.job_manager, self.editor)
    }
}

/// Policy object to control a Shell's behavior
#[derive(Debug, Copy, Clone)]
pub struct ShellConfig {
    /// Determines if new command entries will be added to the shell's command
    /// history.
    enable_command_history: bool,

    /// Number of entries to store in the shell's command history
    command_history_capacity: usize,

    /// Determines if some messages (e.g. "exit") should be displayed.
    display_messages: bool,
}

impl ShellConfig {
    /// Creates an interactive shell, e.g. command history and farewell
    /// messages.
    pub fn interactive(command_history_capacity: usize) -> Self {
        Self {
            enable_command_history: true,
            command_history_capacity,
            display_messages: true,
        }
    }

    /// Creates a noninteractive shell, e.g. no command history, fewer
    /// messages. Used when running a command string or script file.
    pub fn noninteractive() -> Self {
        Default::default()
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            enable_command_history: false,
            command_history_capacity: 0,
            display_messages: false,
        }
    }
}

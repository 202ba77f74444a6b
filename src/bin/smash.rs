use std::path::{Path, PathBuf};
use std::process::{self, ExitStatus};

use docopt::Docopt;
use log::debug;
use nix::unistd::Pid;
use serde_derive::Deserialize;

use smash_rs::errors::{Error, Result};
use smash_rs::{Shell, ShellConfig, SmashExitStatusExt};

const COMMAND_HISTORY_CAPACITY: usize = 10;
const LOG_FILE_NAME: &str = ".smash_log";

const USAGE: &str = "
smash.

Usage:
    smash [options]
    smash [options] -c <command>
    smash [options] <file>
    smash (-h | --help)
    smash --version

Options:
    -h --help       Show this screen.
    --version       Show version.
    -c              If the -c option is present, then commands are read from the first non-option
                        argument command_string.
    --log=<path>    File to write log to, defaults to ~/.smash_log
";

/// Docopts input arguments.
#[derive(Debug, Deserialize)]
struct Args {
    arg_command: Option<String>,
    arg_file: Option<String>,
    flag_version: bool,
    flag_c: bool,
    flag_log: Option<String>,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if let Err(e) = init_logger(&args.flag_log) {
        eprintln!("smash: failed to initialize logging: {}", e);
    }
    debug!("{:?}", args);

    if args.flag_version {
        println!("smash version {}", env!("CARGO_PKG_VERSION"));
    } else if args.flag_c || args.arg_file.is_some() {
        execute_from_command_string_or_file(&args);
    } else {
        execute_from_stdin();
    }
}

fn init_logger(path: &Option<String>) -> std::result::Result<(), fern::InitError> {
    let log_path = path
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(default_log_path);

    let pid = Pid::this();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                pid,
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(log_path)?)
        .apply()?;
    Ok(())
}

fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

fn execute_from_command_string_or_file(args: &Args) -> ! {
    let shell_config = ShellConfig::noninteractive();
    let mut shell = Shell::new(shell_config).unwrap_or_else(|e| display_error_and_exit(&e));

    let result = if let Some(ref command) = args.arg_command {
        shell.execute_command_string(command)
    } else if let Some(ref file_path) = args.arg_file {
        shell.execute_commands_from_file(Path::new(file_path))
    } else {
        unreachable!();
    };

    exit(result, &mut shell)
}

fn execute_from_stdin() -> ! {
    let shell_config = ShellConfig::interactive(COMMAND_HISTORY_CAPACITY);
    let mut shell = Shell::new(shell_config).unwrap_or_else(|e| display_error_and_exit(&e));
    shell.execute_from_stdin();
    shell.exit(None)
}

fn display_error_and_exit(error: &Error) -> ! {
    log::error!("failed to create shell: {}", error);
    eprintln!("smash: {}", error);
    process::exit(ExitStatus::from_failure().code().unwrap_or(1))
}

fn exit(result: Result<()>, shell: &mut Shell) -> ! {
    if let Err(e) = result {
        eprintln!("smash: {}", e);
        shell.exit(Some(ExitStatus::from_failure()));
    } else {
        shell.exit(None)
    }
}

//! Smash builtins
//!
//! The three commands the interpreter handles without spawning a process:
//! `cd`, `status` and `exit`.

use crate::errors::Result;
use crate::shell::Shell;

use self::cd::Cd;
use self::exit::Exit;
use self::status::Status;

mod cd;
mod exit;
mod status;

const CD_NAME: &str = "cd";
const EXIT_NAME: &str = "exit";
const STATUS_NAME: &str = "status";

/// A command dispatched inside the interpreter rather than to a child
/// process.
pub trait BuiltinCommand {
    /// The NAME of the command.
    const NAME: &'static str;
    /// Runs the command with the given arguments in the `shell` environment.
    fn run(shell: &mut Shell, args: &[String]) -> Result<()>;
}

pub fn is_builtin(argv: &[String]) -> bool {
    [CD_NAME, EXIT_NAME, STATUS_NAME].contains(&argv[0].as_str())
}

/// precondition: command is a builtin.
pub fn run(shell: &mut Shell, argv: &[String]) -> Result<()> {
    assert!(is_builtin(argv));
    match argv[0].as_str() {
        CD_NAME => Cd::run(shell, &argv[1..]),
        EXIT_NAME => Exit::run(shell, &argv[1..]),
        STATUS_NAME => Status::run(shell, &argv[1..]),
        _ => unreachable!(),
    }
}

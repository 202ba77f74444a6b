//! Smash - Small Shell
//!
//! A small interactive shell. Smash reads a command per line, expands `$$`
//! into its own pid, handles `<`/`>` redirection and trailing-`&`
//! backgrounding, dispatches the `cd`, `status` and `exit` builtins
//! internally and spawns an external process for everything else.
//! Background processes are tracked and reported at the top of each input
//! cycle.

#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

#[macro_use]
mod macros;

pub mod core;
pub mod errors;
pub mod shell;
pub mod util;

mod builtins;
mod editor;
mod execute_command;
mod jobs;
mod signals;

pub use crate::shell::{Shell, ShellConfig};
pub use crate::util::SmashExitStatusExt;

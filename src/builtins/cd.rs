use std::env;
use std::path::PathBuf;

use crate::builtins::{self, BuiltinCommand};
use crate::errors::{Error, Result};
use crate::shell::Shell;

pub struct Cd;

impl BuiltinCommand for Cd {
    const NAME: &'static str = builtins::CD_NAME;

    fn run(_shell: &mut Shell, args: &[String]) -> Result<()> {
        let dir = match args.first() {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .ok_or_else(|| Error::builtin_command("cd: HOME not set", 1))?,
        };

        env::set_current_dir(&dir)
            .map_err(|e| Error::builtin_command(format!("cd: {}: {}", dir.display(), e), 1))?;
        Ok(())
    }
}

use crate::builtins::{self, BuiltinCommand};
use crate::errors::Result;
use crate::shell::Shell;

pub struct Exit;

impl BuiltinCommand for Exit {
    const NAME: &'static str = builtins::EXIT_NAME;

    fn run(shell: &mut Shell, _args: &[String]) -> Result<()> {
        shell.exit(None)
    }
}

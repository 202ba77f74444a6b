use crate::builtins::{self, BuiltinCommand};
use crate::errors::Result;
use crate::shell::Shell;

pub struct Status;

impl BuiltinCommand for Status {
    const NAME: &'static str = builtins::STATUS_NAME;

    fn run(shell: &mut Shell, _args: &[String]) -> Result<()> {
        let exit_value = if shell.last_exit_status().success() {
            0
        } else {
            1
        };
        println!("exit value {}", exit_value);
        Ok(())
    }
}

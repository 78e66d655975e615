// Exit command

use crate::shell::commands::{Executable, Flow};
use crate::shell::context::ShellContext;
use crate::shell::error::Result;
use std::io::Write;

pub struct ExitCommand;

impl Executable for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        _ctx: &mut ShellContext,
        _stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow> {
        let Some(arg) = args.get(1) else {
            return Ok(Flow::Exit(0));
        };
        match arg.parse::<i32>() {
            Ok(code) => Ok(Flow::Exit(code)),
            Err(_) => {
                writeln!(stderr, "exit: {}: numeric argument required", arg)?;
                Ok(Flow::Exit(2))
            }
        }
    }
}

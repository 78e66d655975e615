// Pwd command

use crate::shell::commands::{Executable, Flow};
use crate::shell::context::ShellContext;
use crate::shell::error::Result;
use std::io::Write;

pub struct PwdCommand;

impl Executable for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        _ctx: &mut ShellContext,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow> {
        match std::env::current_dir() {
            Ok(cwd) => {
                writeln!(stdout, "{}", cwd.display())?;
                Ok(Flow::Continue(0))
            }
            Err(e) => {
                writeln!(stderr, "pwd: {}", e)?;
                Ok(Flow::Continue(1))
            }
        }
    }
}

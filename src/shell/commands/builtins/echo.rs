// Echo command

use crate::shell::commands::{Executable, Flow};
use crate::shell::context::ShellContext;
use crate::shell::error::Result;
use std::io::Write;

pub struct EchoCommand;

impl Executable for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        _ctx: &mut ShellContext,
        stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
    ) -> Result<Flow> {
        // Skip "echo" in args[0]
        let output = args[1..].join(" ");
        writeln!(stdout, "{}", output)?;
        Ok(Flow::Continue(0))
    }
}

// Type command

use crate::shell::commands::{Builtin, Executable, Flow};
use crate::shell::context::ShellContext;
use crate::shell::error::Result;
use crate::shell::path::resolve;
use std::io::Write;

pub struct TypeCommand;

impl Executable for TypeCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
    ) -> Result<Flow> {
        if args.len() < 2 {
            writeln!(stdout, "type: missing argument")?;
            return Ok(Flow::Continue(1));
        }

        let mut status = 0;
        for name in &args[1..] {
            if Builtin::from_name(name).is_some() {
                writeln!(stdout, "{} is a shell builtin", name)?;
            } else if let Some(path) = resolve(name, ctx) {
                writeln!(stdout, "{} is {}", name, path.display())?;
            } else {
                writeln!(stdout, "{}: not found", name)?;
                status = 1;
            }
        }
        Ok(Flow::Continue(status))
    }
}

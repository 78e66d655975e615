use crate::shell::commands::system::SystemCommand;
use crate::shell::commands::{Builtin, Executable, Flow};
use crate::shell::context::ShellContext;
use crate::shell::error::Result;
use log::debug;
use std::io::Write;

/// Route `tokens` to a builtin or to an external program and record the exit status.
///
/// An empty token list is a no-op.
pub fn dispatch(
    tokens: &[String],
    ctx: &mut ShellContext,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<Flow> {
    let Some(program) = tokens.first() else {
        return Ok(Flow::Continue(0));
    };

    let flow = match Builtin::from_name(program) {
        Some(builtin) => {
            debug!("Builtin {:?} with {:?}", builtin, &tokens[1..]);
            builtin.command().execute(tokens, ctx, stdout, stderr)?
        }
        None => SystemCommand.execute(tokens, ctx, stdout, stderr)?,
    };

    ctx.exit_code = flow.code();
    Ok(flow)
}

pub mod commands;
pub mod context;
pub mod error;
pub mod executor;
pub mod parser;
pub mod path;
pub mod redirect;

use commands::Flow;
use context::ShellContext;
use error::Result;
use log::debug;
use std::io;


/// The exact lines that end the session before any parsing happens.
fn is_plain_exit(line: &str) -> bool {
    line == "exit" || line == "exit 0"
}

/// Runs one input line: tokenize, pull out a redirection, install it, dispatch, restore.
///
/// The redirection (if any) is torn down before this returns, whatever the command did.
/// If the redirection cannot be installed the command does not run and the error is
/// returned.
pub fn run_command_line(line: &str, ctx: &mut ShellContext) -> Result<Flow> {
    if is_plain_exit(line) {
        return Ok(Flow::Exit(0));
    }

    let tokens = parser::parse_command(line);
    if tokens.is_empty() {
        return Ok(Flow::Continue(ctx.exit_code));
    }
    debug!("Tokens: {:?}", tokens);

    let (tokens, spec) = redirect::detect_and_strip(tokens);
    let redirection = redirect::install(spec.as_ref())?;

    let result = executor::dispatch(&tokens, ctx, &mut io::stdout(), &mut io::stderr());
    drop(redirection);
    result
}

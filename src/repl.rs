use crate::shell::commands::Flow;
use crate::shell::context::ShellContext;
use crate::shell::run_command_line;
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, BufRead, Write};

/// Runs one line, reporting recoverable errors on stderr. Only a fatal error comes back as `Err`.
pub fn execute_line(line: &str, ctx: &mut ShellContext) -> Result<Flow> {
    match run_command_line(line, ctx) {
        Ok(flow) => Ok(flow),
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            debug!("Line {:?} failed: {:?}", line, e);
            eprintln!("tsh: {}", e);
            ctx.exit_code = 1;
            Ok(Flow::Continue(1))
        }
    }
}

/// Prompt, read, run, until `exit` or end of input. Returns the status to exit with.
pub fn run_loop<R: BufRead>(mut input: R, ctx: &mut ShellContext, prompt: Option<&str>) -> Result<i32> {
    let mut buf = String::new();
    loop {
        if let Some(p) = prompt {
            let mut stdout = io::stdout();
            write!(stdout, "{}", p)?;
            stdout.flush()?;
        }

        buf.clear();
        if input.read_line(&mut buf).context("Failed to read input")? == 0 {
            debug!("End of input");
            return Ok(ctx.exit_code);
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Flow::Exit(code) = execute_line(line, ctx)? {
            return Ok(code);
        }
    }
}

pub fn run_interactive(ctx: &mut ShellContext, prompt: Option<&str>) -> Result<i32> {
    run_loop(io::stdin().lock(), ctx, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tests::{hold_stdout, serial};
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn test_exit_stops_reading() {
        let _guard = serial();
        let _stdout = hold_stdout();
        let dir = tempfile::tempdir().unwrap();
        let before = dir.path().join("before.txt");
        let after = dir.path().join("after.txt");
        let script = format!(
            "echo one > {}\nexit\necho two > {}\n",
            before.display(),
            after.display()
        );

        let mut ctx = ShellContext::default();
        let code = run_loop(Cursor::new(script), &mut ctx, None).unwrap();
        assert_eq!(code, 0);
        assert_eq!(fs::read_to_string(&before).unwrap(), "one\n");
        assert!(!after.exists());
    }

    #[test]
    fn test_exit_with_code() {
        let mut ctx = ShellContext::default();
        let code = run_loop(Cursor::new("exit 3\n"), &mut ctx, None).unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn test_eof_returns_last_status() {
        let mut ctx = ShellContext::default();
        ctx.vars.insert("PATH".to_string(), "/nonexistent-tsh-dir".to_string());
        let dir = tempfile::tempdir().unwrap();
        let sink = dir.path().join("sink.txt");

        let _guard = serial();
        let _stdout = hold_stdout();
        let script = format!("\n   \nmissing-cmd > {}", sink.display());
        let code = run_loop(Cursor::new(script), &mut ctx, None).unwrap();
        assert_eq!(code, 127);
        assert_eq!(fs::read_to_string(&sink).unwrap(), "missing-cmd: command not found\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let _guard = serial();
        let _stdout = hold_stdout();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let mut ctx = ShellContext::default();
        let script = format!("echo hi > {}\r\nexit\r\n", out.display());
        assert_eq!(run_loop(Cursor::new(script), &mut ctx, None).unwrap(), 0);
        assert_eq!(fs::read_to_string(&out).unwrap(), "hi\n");
    }

    #[test]
    fn test_redirect_failure_is_reported_not_fatal() {
        let _guard = serial();
        let mut ctx = ShellContext::default();
        let flow = execute_line("echo hi > /nonexistent-tsh-dir/x.txt", &mut ctx).unwrap();
        assert_eq!(flow, Flow::Continue(1));
        assert_eq!(ctx.exit_code, 1);
    }
}

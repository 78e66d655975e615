// System command
use crate::shell::commands::{Executable, Flow};
use crate::shell::context::ShellContext;
use crate::shell::error::{Result, ShellError};
use crate::shell::path::resolve;
use log::debug;
use nix::errno::Errno;
use std::io::{self, Write};
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Anything that is not a builtin: looked up on `PATH` and run as a child process.
pub struct SystemCommand;

impl SystemCommand {
    /// Spawns `path` with `args` and blocks until the child terminates.
    ///
    /// `args[0]` is handed to the child as `argv[0]`. The child inherits the current
    /// descriptors 0-2, so an installed redirection applies to it as well. If the child
    /// cannot start the program, the failure is reported on `stderr` and the status is 1;
    /// only a failure to create the process at all is returned as an error.
    pub fn run(
        &self,
        path: &Path,
        args: &[String],
        ctx: &ShellContext,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<i32> {
        let mut cmd = Command::new(path);
        if let Some(name) = args.first() {
            cmd.arg0(name);
        }
        cmd.args(args.get(1..).unwrap_or_default());
        cmd.envs(&ctx.vars);
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Whatever we buffered must land before the child's output.
        stdout.flush()?;
        stderr.flush()?;

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) if is_process_creation_failure(&e) => {
                return Err(ShellError::Spawn {
                    program: path.display().to_string(),
                    source: e,
                });
            }
            Err(e) => {
                debug!("exec of {} failed: {}", path.display(), e);
                writeln!(stderr, "tsh: {}: {}", path.display(), e)?;
                return Ok(1);
            }
        };

        debug!("Spawned {} as pid {}", path.display(), child.id());
        let status = child.wait()?;
        Ok(exit_code(status))
    }
}

impl Executable for SystemCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow> {
        let Some(program) = args.first() else {
            return Ok(Flow::Continue(0));
        };

        match resolve(program, ctx) {
            Some(path) => self.run(&path, args, ctx, stdout, stderr).map(Flow::Continue),
            None => {
                writeln!(stdout, "{}: command not found", program)?;
                Ok(Flow::Continue(127))
            }
        }
    }
}

fn is_process_creation_failure(e: &io::Error) -> bool {
    matches!(
        e.raw_os_error().map(Errno::from_raw),
        Some(Errno::EAGAIN | Errno::ENOMEM)
    )
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        code
    } else if let Some(signal) = status.signal() {
        128 + signal
    } else {
        -1
    }
}

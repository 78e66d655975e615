// Cd command

use crate::shell::commands::{Executable, Flow};
use crate::shell::context::ShellContext;
use crate::shell::error::Result;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

pub struct CdCommand;

impl Executable for CdCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        _stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow> {
        // args[0] is "cd". args[1] is path. Only a bare `~` or a `~/` prefix means HOME.
        let target = match args.get(1).map(String::as_str) {
            None | Some("~") => ctx.home(),
            Some(dir) => match dir.strip_prefix("~/") {
                Some(rest) => ctx.home().map(|home| home.join(rest)),
                None => Some(PathBuf::from(dir)),
            },
        };

        let Some(target) = target else {
            writeln!(stderr, "cd: HOME not set")?;
            return Ok(Flow::Continue(1));
        };

        match std::env::set_current_dir(&target) {
            Ok(()) => {
                debug!("Changed directory to {}", target.display());
                Ok(Flow::Continue(0))
            }
            Err(e) => {
                debug!("chdir({}) failed: {}", target.display(), e);
                writeln!(stderr, "cd: {}: No such file or directory", target.display())?;
                Ok(Flow::Continue(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tests::{CwdRestore, serial};
    use std::fs;

    fn run(args: &[&str], ctx: &mut ShellContext) -> (Flow, String) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut err = Vec::new();
        let flow = CdCommand.execute(&args, ctx, &mut Vec::new(), &mut err).unwrap();
        (flow, String::from_utf8(err).unwrap())
    }

    fn cwd() -> PathBuf {
        fs::canonicalize(std::env::current_dir().unwrap()).unwrap()
    }

    #[test]
    fn test_cd_tilde_goes_home() {
        let _guard = serial();
        let _restore = CwdRestore::new();
        let home = tempfile::tempdir().unwrap();
        let mut ctx = ShellContext::default();
        ctx.vars.insert("HOME".to_string(), home.path().to_string_lossy().into_owned());

        assert_eq!(run(&["cd", "~"], &mut ctx).0, Flow::Continue(0));
        assert_eq!(cwd(), fs::canonicalize(home.path()).unwrap());
    }

    #[test]
    fn test_cd_without_args_goes_home() {
        let _guard = serial();
        let _restore = CwdRestore::new();
        let home = tempfile::tempdir().unwrap();
        let mut ctx = ShellContext::default();
        ctx.vars.insert("HOME".to_string(), home.path().to_string_lossy().into_owned());

        assert_eq!(run(&["cd"], &mut ctx).0, Flow::Continue(0));
        assert_eq!(cwd(), fs::canonicalize(home.path()).unwrap());
    }

    #[test]
    fn test_cd_tilde_subdir() {
        let _guard = serial();
        let _restore = CwdRestore::new();
        let home = tempfile::tempdir().unwrap();
        fs::create_dir(home.path().join("projects")).unwrap();
        let mut ctx = ShellContext::default();
        ctx.vars.insert("HOME".to_string(), home.path().to_string_lossy().into_owned());

        assert_eq!(run(&["cd", "~/projects"], &mut ctx).0, Flow::Continue(0));
        assert_eq!(cwd(), fs::canonicalize(home.path().join("projects")).unwrap());
    }

    #[test]
    fn test_cd_relative_and_absolute() {
        let _guard = serial();
        let _restore = CwdRestore::new();
        let base = tempfile::tempdir().unwrap();
        fs::create_dir(base.path().join("inner")).unwrap();
        let mut ctx = ShellContext::default();

        let base_str = base.path().to_string_lossy().into_owned();
        assert_eq!(run(&["cd", &base_str], &mut ctx).0, Flow::Continue(0));
        assert_eq!(run(&["cd", "inner"], &mut ctx).0, Flow::Continue(0));
        assert_eq!(cwd(), fs::canonicalize(base.path().join("inner")).unwrap());
        assert_eq!(run(&["cd", ".."], &mut ctx).0, Flow::Continue(0));
        assert_eq!(cwd(), fs::canonicalize(base.path()).unwrap());
    }

    #[test]
    fn test_cd_missing_dir_keeps_cwd() {
        let _guard = serial();
        let _restore = CwdRestore::new();
        let before = cwd();
        let mut ctx = ShellContext::default();

        let (flow, err) = run(&["cd", "/nonexistent-tsh-dir"], &mut ctx);
        assert_eq!(flow, Flow::Continue(1));
        assert_eq!(err, "cd: /nonexistent-tsh-dir: No such file or directory\n");
        assert_eq!(cwd(), before);
    }

    #[test]
    fn test_cd_tilde_user_is_literal() {
        let _guard = serial();
        let _restore = CwdRestore::new();
        let home = tempfile::tempdir().unwrap();
        fs::create_dir(home.path().join("foo")).unwrap();
        let mut ctx = ShellContext::default();
        ctx.vars.insert("HOME".to_string(), home.path().to_string_lossy().into_owned());
        let before = cwd();

        let (flow, err) = run(&["cd", "~foo"], &mut ctx);
        assert_eq!(flow, Flow::Continue(1));
        assert_eq!(err, "cd: ~foo: No such file or directory\n");
        assert_eq!(cwd(), before);
    }

    #[test]
    fn test_cd_without_home() {
        let _guard = serial();
        let _restore = CwdRestore::new();
        let mut ctx = ShellContext::default();
        ctx.vars.insert("HOME".to_string(), String::new());

        let (flow, err) = run(&["cd"], &mut ctx);
        assert_eq!(flow, Flow::Continue(1));
        assert_eq!(err, "cd: HOME not set\n");
    }
}

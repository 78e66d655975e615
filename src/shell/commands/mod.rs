pub mod builtins;
pub mod system;

use crate::shell::context::ShellContext;
use crate::shell::error::Result;
use builtins::{cd::CdCommand, echo::EchoCommand, exit::ExitCommand, pwd::PwdCommand, type_cmd::TypeCommand};
use std::io::Write;

/// What the read loop does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(i32),
    Exit(i32),
}

impl Flow {
    pub fn code(self) -> i32 {
        match self {
            Flow::Continue(code) | Flow::Exit(code) => code,
        }
    }
}

pub trait Executable {
    /// `args[0]` is the command name. Output goes to whatever `stdout`/`stderr` currently are.
    fn execute(
        &self,
        args: &[String],
        ctx: &mut ShellContext,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Echo,
    Type,
    Pwd,
    Cd,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [Builtin::Exit, Builtin::Echo, Builtin::Type, Builtin::Pwd, Builtin::Cd];

    /// Case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Exit => "exit",
            Builtin::Echo => "echo",
            Builtin::Type => "type",
            Builtin::Pwd => "pwd",
            Builtin::Cd => "cd",
        }
    }

    pub fn command(self) -> &'static dyn Executable {
        match self {
            Builtin::Exit => &ExitCommand,
            Builtin::Echo => &EchoCommand,
            Builtin::Type => &TypeCommand,
            Builtin::Pwd => &PwdCommand,
            Builtin::Cd => &CdCommand,
        }
    }
}

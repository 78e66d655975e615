use crate::shell::error::{Result, ShellError};
use log::{debug, error, warn};
use nix::fcntl::{FcntlArg, fcntl};
use nix::libc::{STDERR_FILENO, STDOUT_FILENO};
use nix::unistd::{close, dup2};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStream {
    Stdout,
    Stderr,
}

impl TargetStream {
    fn fd(self) -> RawFd {
        match self {
            TargetStream::Stdout => STDOUT_FILENO,
            TargetStream::Stderr => STDERR_FILENO,
        }
    }

    fn flush(self) {
        let res = match self {
            TargetStream::Stdout => io::stdout().flush(),
            TargetStream::Stderr => io::stderr().flush(),
        };
        if let Err(e) = res {
            warn!("Failed to flush {:?} before switching descriptors: {}", self, e);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    Overwrite, // >
    Append,    // >>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSpec {
    pub stream: TargetStream,
    pub path: PathBuf,
    pub mode: RedirectMode,
}

const OPERATORS: &[(&str, TargetStream, RedirectMode)] = &[
    (">", TargetStream::Stdout, RedirectMode::Overwrite),
    ("1>", TargetStream::Stdout, RedirectMode::Overwrite),
    (">>", TargetStream::Stdout, RedirectMode::Append),
    ("1>>", TargetStream::Stdout, RedirectMode::Append),
    ("2>", TargetStream::Stderr, RedirectMode::Overwrite),
    ("2>>", TargetStream::Stderr, RedirectMode::Append),
];

fn operator(token: &str) -> Option<(TargetStream, RedirectMode)> {
    OPERATORS
        .iter()
        .find(|(op, _, _)| *op == token)
        .map(|&(_, stream, mode)| (stream, mode))
}

/// Pulls the first redirection (operator plus filename) out of `tokens`.
///
/// Scanning stops at the first operator that has a filename after it. The argument list ends
/// at that operator: words after the filename, later operators included, are dropped. An
/// operator in last position has no filename and is left alone as an ordinary argument.
pub fn detect_and_strip(mut tokens: Vec<String>) -> (Vec<String>, Option<RedirectSpec>) {
    let last = tokens.len().saturating_sub(1);
    let found = tokens[..last]
        .iter()
        .enumerate()
        .find_map(|(idx, tok)| operator(tok).map(|op| (idx, op)));

    let Some((idx, (stream, mode))) = found else {
        return (tokens, None);
    };

    let path = PathBuf::from(std::mem::take(&mut tokens[idx + 1]));
    tokens.truncate(idx);

    (tokens, Some(RedirectSpec { stream, path, mode }))
}

/// An installed redirection. The target stream points at the file until this is dropped,
/// at which point the original descriptor is put back and both spare descriptors are closed.
#[derive(Debug)]
pub struct Redirection {
    stream: TargetStream,
    backup: RawFd,
    _file: File,
}

impl Redirection {
    pub fn install(spec: &RedirectSpec) -> Result<Self> {
        let mut open_opts = OpenOptions::new();
        open_opts.write(true).create(true);
        match spec.mode {
            RedirectMode::Overwrite => open_opts.truncate(true),
            RedirectMode::Append => open_opts.append(true),
        };
        let file = open_opts
            .mode(0o644)
            .open(&spec.path)
            .map_err(|source| ShellError::Redirect { path: spec.path.clone(), source })?;

        let target = spec.stream.fd();
        spec.stream.flush();

        // Keep the backup out of spawned children.
        let backup = fcntl(target, FcntlArg::F_DUPFD_CLOEXEC(0))
            .map_err(|source| ShellError::Descriptor { op: "dup", fd: target, source })?;

        if let Err(source) = dup2(file.as_raw_fd(), target) {
            let _ = close(backup);
            return Err(ShellError::Descriptor { op: "dup2", fd: target, source });
        }

        debug!("Redirected {:?} to {} ({:?})", spec.stream, spec.path.display(), spec.mode);
        Ok(Self {
            stream: spec.stream,
            backup,
            _file: file,
        })
    }
}

impl Drop for Redirection {
    fn drop(&mut self) {
        let target = self.stream.fd();
        self.stream.flush();

        if let Err(e) = dup2(self.backup, target) {
            error!("Failed to restore descriptor {}: {}", target, e);
        }
        if let Err(e) = close(self.backup) {
            warn!("Failed to close backup descriptor {}: {}", self.backup, e);
        }
        debug!("Restored {:?}", self.stream);
    }
}

/// Installs `spec` when there is one. `None` means no redirection was requested.
pub fn install(spec: Option<&RedirectSpec>) -> Result<Option<Redirection>> {
    spec.map(Redirection::install).transpose()
}

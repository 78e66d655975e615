use crate::shell::context::ShellContext;
use log::debug;
use nix::unistd::{AccessFlags, access};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Resolve `name` against the `PATH` visible to `ctx`.
///
/// `PATH` is read fresh on every call; nothing is cached.
pub fn resolve(name: &str, ctx: &ShellContext) -> Option<PathBuf> {
    let search_paths = ctx.var("PATH");
    let found = resolve_in(name, search_paths.as_deref());
    debug!("Resolved {:?} -> {:?}", name, found);
    found
}

/// Walk `search_paths` (colon separated) in order and return the first `<dir>/<name>`
/// that is an executable file.
///
/// A name containing `/` is a path already and is checked as is. An unset search path,
/// an empty name and a miss in every directory all resolve to `None`.
pub fn resolve_in(name: &str, search_paths: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if name.contains('/') {
        let path = Path::new(name);
        return is_executable(path).then(|| path.to_path_buf());
    }

    search_paths?
        .as_bytes()
        .split(|&b| b == b':')
        .filter(|dir| !dir.is_empty())
        .map(|dir| Path::new(OsStr::from_bytes(dir)).join(name))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    // access(2) grants X_OK on searchable directories too.
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}

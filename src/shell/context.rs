use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Per-session interpreter state.
///
/// The working directory and the process environment are not copied in here: they stay
/// process state and are read live. `vars` only layers configured values on top.
#[derive(Debug, Clone, Default)]
pub struct ShellContext {
    pub vars: HashMap<String, String>,
    pub exit_code: i32,
}

impl ShellContext {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars, exit_code: 0 }
    }

    /// Looks the overlay up first, then the live process environment.
    pub fn var(&self, key: &str) -> Option<OsString> {
        self.vars
            .get(key)
            .map(OsString::from)
            .or_else(|| std::env::var_os(key))
    }

    pub fn home(&self) -> Option<PathBuf> {
        self.var("HOME").filter(|h| !h.is_empty()).map(PathBuf::from)
    }
}

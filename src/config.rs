use anyhow::{Context, Result, bail};
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT: &str = "$ ";
const CONFIG_FILE_NAME: &str = ".tshrc.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    /// Layered over the process environment for lookups and child processes.
    pub env: HashMap<String, String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            env: HashMap::new(),
        }
    }
}

/// Where to read the config from, and whether its absence is an error.
fn locate(
    explicit: Option<&Path>,
    tsh_config: Option<OsString>,
    home: Option<OsString>,
) -> Option<(PathBuf, bool)> {
    if let Some(p) = explicit {
        return Some((p.to_path_buf(), true));
    }
    if let Some(p) = tsh_config.filter(|p| !p.is_empty()) {
        return Some((PathBuf::from(p), true));
    }
    home.filter(|h| !h.is_empty())
        .map(|h| (PathBuf::from(h).join(CONFIG_FILE_NAME), false))
}

pub fn parse_config(content: &str) -> Result<ShellConfig> {
    toml::from_str(content).context("Invalid TOML")
}

pub fn load_config(explicit: Option<&Path>) -> Result<ShellConfig> {
    let Some((config_path, required)) = locate(explicit, env::var_os("TSH_CONFIG"), env::var_os("HOME")) else {
        return Ok(ShellConfig::default());
    };

    if !config_path.exists() {
        if required {
            bail!("Config file not found: {}", config_path.display());
        }
        return Ok(ShellConfig::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    info!("Loaded config from {} ({} env overrides)", config_path.display(), config.env.len());
    Ok(config)
}

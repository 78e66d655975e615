use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tsh", version, about = "tsh: a tiny interactive shell")]
pub struct Cli {
    /// Run a single command line and exit with its status
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,

    /// Configuration file (defaults to $TSH_CONFIG, then ~/.tshrc.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print the prompt before reading a line
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["tsh", "-c", "echo hi > x", "--config", "/tmp/c.toml", "--no-prompt"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("echo hi > x"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.no_prompt);

        let cli = Cli::try_parse_from(["tsh"]).unwrap();
        assert!(cli.command.is_none() && cli.config.is_none() && !cli.no_prompt);
    }
}

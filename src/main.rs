mod cli;
mod config;
mod repl;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::*;
use config::{ShellConfig, load_config};
use shell::context::ShellContext;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "tsh:".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<i32> {
    let ShellConfig { prompt, env } = load_config(cli.config.as_deref())?;
    let mut ctx = ShellContext::new(env);

    match &cli.command {
        Some(line) => Ok(repl::execute_line(line, &mut ctx)?.code()),
        None => {
            let prompt = (!cli.no_prompt).then_some(prompt.as_str());
            repl::run_interactive(&mut ctx, prompt)
        }
    }
}

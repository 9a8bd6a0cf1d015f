//! docseek CLI - find llms.txt documentation for a question
//!
//! This is the main entry point for the docseek command-line interface.
//! Command implementations live in separate modules under `commands`.

use anyhow::Result;
use clap::Parser;
use docseek_core::config::{LayeredEnv, resolve_skill_dir};
use std::process::ExitCode;

mod cli;
mod commands;
mod utils;

use cli::{Cli, Commands, join_query};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; help and version go to stdout and exit 0.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        },
    };

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let skill_dir = resolve_skill_dir(cli.skill_dir.as_deref())?;
    let env = utils::logging::with_flag_logging(&cli, || LayeredEnv::discover(&skill_dir));
    let settings = env.settings();

    utils::logging::initialize_logging(&cli, settings.debug)?;

    match cli.command {
        Commands::Detect { query } => commands::detect(&join_query(&query)),
        Commands::Fetch { query, base_url } => {
            commands::fetch(&join_query(&query), base_url.as_deref(), &settings).await
        },
        Commands::Analyze { input } => commands::analyze(&input),
        Commands::Config => commands::show_config(&skill_dir, &env),
    }
}

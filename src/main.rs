//! htmlconst CLI - embed HTML assets in firmware as header constants
//!
//! Usage: htmlconst <COMMAND>
//!
//! Commands:
//!   build   Generate one PROGMEM raw-string header per asset
//!   lines   Print line-by-line string statements for one file
//!   check   Verify generated headers match their inputs

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use htmlconst::presentation::{render_error_json, Cli, Commands};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init_from_env(Env::default().default_filter_or(cli.log_filter()));

    let json = cli.json;
    let command = cli.command.name();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            if json {
                println!("{}", render_error_json(command, &format!("{:#}", err)));
            }
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Build { assets, on_missing } => {
            commands::cmd_build(&assets, on_missing, cli.json)
        }
        Commands::Lines {
            file,
            config,
            variable,
            declare_type,
            no_declare,
        } => {
            commands::cmd_lines(
                &file,
                config.as_deref(),
                variable,
                declare_type,
                no_declare,
                cli.json,
            )?;
            Ok(true)
        }
        Commands::Check { assets } => commands::cmd_check(&assets, cli.json),
    }
}

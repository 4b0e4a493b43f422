mod cli;
mod config;
mod logging;
mod script;
mod session;
mod tmux;

use std::process::ExitCode;

use anstream::eprintln;
use clap::error::ErrorKind;
use clap::{
    CommandFactory,
    Parser,
};
use crossterm::style::Stylize;
use eyre::Result;

use crate::cli::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    logging::init();

    // A help flag wins wherever it appears, even after the positionals
    // where clap would fold it into the option tail.
    if std::env::args().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            });
        },
    };

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    match runtime.block_on(parsed.execute()) {
        Ok(exit_code) => Ok(exit_code),
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            Ok(ExitCode::FAILURE)
        },
    }
}

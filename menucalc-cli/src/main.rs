//! Interactive menu-driven calculator

use clap::Parser;
use menucalc_cli::{Cli, SessionEnd};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(SessionEnd::Exited) => ExitCode::SUCCESS,
        Ok(SessionEnd::InputClosed) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

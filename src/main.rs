use clap::Parser;
use std::process::ExitCode;

mod app;
mod cli;
mod config;
mod error;
mod tasks;
mod toolchain;

fn main() -> ExitCode {
    let cli = crate::cli::Cli::parse();
    match crate::app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

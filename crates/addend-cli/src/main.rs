//! `addend`: print the sum of the given operands.
//!
//! Exits 0 when the sum is computed and 1 on any error.

mod cli;
mod logger;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn run(cli: &Cli) -> Result<addend::Number> {
    let operands = cli.collect_operands()?;
    tracing::debug!(count = operands.len(), strict = cli.strict, "summing operands");
    let total = addend::sum(operands, &cli.context())?;
    Ok(total)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported as errors but print to stdout
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logger::init_cli_logger(cli.verbose);

    match run(&cli) {
        Ok(total) => {
            println!("{}", total);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("sum failed: {:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use clap::Parser;
use ionosctl::cli::Cli;
use ionosctl::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.global.verbose) {
        eprintln!("warning: {}", err);
    }

    match ionosctl::run(&cli, std::io::stdin().lock()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

//! Simparams CLI entry point.

use clap::Parser;

use simparams::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = simparams::cli::run(&cli) {
        simparams::cli::handle_error(err, cli.json);
    }
}

//! Solmod - solution module installer
//!
//! A command line tool that resolves a module from the module registry and adds
//! its NuGet and NPM packages to the matching projects of a .NET solution.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod installer;
mod logging;
mod operations;
mod progress;
mod resolver;
mod solution;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::SolmodError;

/// Process exit status for a failed command
fn exit_code(err: &SolmodError) -> i32 {
    if err.is_usage_error() { 2 } else { 1 }
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::AddModule(args) => commands::add_module::run(args, cli.quiet),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

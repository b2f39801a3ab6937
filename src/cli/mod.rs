//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add_module: Add-module command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod add_module;
pub mod completions;

pub use add_module::AddModuleArgs;
pub use completions::CompletionsArgs;

/// Solmod - solution module installer
///
/// Install registry modules into multi-project .NET solutions.
#[derive(Parser, Debug)]
#[command(
    name = "solmod",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install registry modules into multi-project .NET solutions",
    long_about = "Solmod resolves a module from the module registry and adds its NuGet packages \
                  to the matching projects of a solution and its NPM packages to the solution's \
                  MVC web hosts. Running it twice leaves the solution unchanged.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  solmod add-module Acme.Blogging                 \x1b[90m# Install into the .sln in this directory\x1b[0m\n   \
                  solmod add Acme.Blogging -s ./Acme.Blog.sln     \x1b[90m# Install into a specific solution\x1b[0m\n   \
                  solmod add Acme.Blogging --restore              \x1b[90m# Run dotnet restore on changed projects\x1b[0m\n   \
                  solmod -v add Acme.Blogging                     \x1b[90m# Show skipped targets\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a module into a solution
    #[command(visible_alias = "add")]
    AddModule(AddModuleArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

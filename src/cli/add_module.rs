use clap::Parser;
use std::path::PathBuf;

/// Arguments for the add-module command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install into the solution in the current directory:\n    solmod add-module Acme.Blogging\n\n\
                   Install into a specific solution:\n    solmod add-module Acme.Blogging --solution ./Acme.Blog.sln\n\n\
                   Use another registry:\n    solmod add-module Acme.Blogging --registry-url https://modules.example.com/api/app/module/byName/")]
pub struct AddModuleArgs {
    /// Module name as known to the registry (e.g. Acme.Blogging)
    pub module: String,

    /// Solution file to install into (defaults to the single .sln in the current directory)
    #[arg(long, short = 's', value_name = "PATH")]
    pub solution: Option<PathBuf>,

    /// Module registry lookup endpoint (overrides SOLMOD_REGISTRY_URL and config.yaml)
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Run `dotnet restore` on every project that received a new package
    #[arg(long)]
    pub restore: bool,
}

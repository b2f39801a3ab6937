use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Load bash completions for the current session:\n    source <(solmod completions bash)\n\n\
                  Install zsh completions, then restart the shell:\n    solmod completions zsh > \"${fpath[1]}/_solmod\"\n\n\
                  Enable PowerShell completions for every session:\n    solmod completions powershell >> $PROFILE")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

//! Completions command - generate shell completion scripts.
//!
//! Generates shell completion scripts for various shells that can be
//! installed to enable tab-completion of `ink` commands and options.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    ink completions bash > ~/.local/share/bash-completion/completions/ink\n    \
    ink completions zsh > ~/.zfunc/_ink\n    \
    ink completions fish > ~/.config/fish/completions/ink.fish\n\n\
INSTALLATION:\n    \
    Bash:       Save to ~/.local/share/bash-completion/completions/ink\n    \
    Zsh:        Save to a directory in your $fpath (e.g., ~/.zfunc/_ink)\n    \
    Fish:       Save to ~/.config/fish/completions/ink.fish\n    \
    PowerShell: Add output to your $PROFILE")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    #[arg(
        long_help = "The shell to generate completions for. Supported shells:\n  \
        - bash\n  \
        - zsh\n  \
        - fish\n  \
        - powershell\n  \
        - elvish"
    )]
    pub shell: Shell,
}

/// Writes the completion script for `shell` to stdout.
///
/// Called from main.rs, which owns the top-level `Cli` command.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "ink", &mut io::stdout());
}

//! Completions command - shell completion for moba-convert.
//!
//! Completes the three converter subcommands, their shared `--file` and
//! `--dry-run` flags and the PuTTY location flags. The script is written to
//! stdout so it can be redirected into the shell's completion directory.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    moba-convert completions bash > ~/.local/share/bash-completion/completions/moba-convert\n    \
    moba-convert completions zsh > ~/.zfunc/_moba-convert\n    \
    moba-convert completions fish > ~/.config/fish/completions/moba-convert.fish")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL", value_enum)]
    pub shell: Shell,
}

/// Writes the completion script for `shell` to stdout.
///
/// Takes the top-level command from main.rs, which owns the `Cli` struct.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    write_completions(cmd, shell, &mut io::stdout());
}

fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

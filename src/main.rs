use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::commands;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "moba-convert")]
#[command(version)]
#[command(about = "Convert MobaXterm bookmarks into Remmina, PuTTY and Rabbit sessions")]
#[command(long_about = "moba-convert reads a MobaXterm bookmarks export and writes every\n\
    SSH and Telnet bookmark as a saved session for another client.\n\n\
    Bookmark folders are carried over as groups, private key references\n\
    are rewritten to absolute paths under your home directory.")]
#[command(after_help = "EXAMPLES:\n    \
    moba-convert remmina                 Convert ./moba_bookmarks.txt for Remmina\n    \
    moba-convert putty --native -n       Preview PuTTY sessions (native install)\n    \
    moba-convert rabbit -f export.txt    Add bookmarks to Rabbit favorites\n    \
    moba-convert config                  Show where files will be written\n\n\
    For more information about a command, run 'moba-convert <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert bookmarks to Remmina profiles
    Remmina(commands::remmina::Args),

    /// Convert bookmarks to PuTTY saved sessions
    Putty(commands::putty::Args),

    /// Convert bookmarks to Rabbit Remote Control favorites
    Rabbit(commands::rabbit::Args),

    /// Show resolved paths and configuration
    Config(commands::config::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "moba_convert=debug"
    } else {
        "moba_convert=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Remmina(args) => commands::remmina::run(args),
        Commands::Putty(args) => commands::putty::run(args),
        Commands::Rabbit(args) => commands::rabbit::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Completions(args) => {
            commands::completions::generate_completions(&mut Cli::command(), args.shell);
            Ok(())
        }
    }
}

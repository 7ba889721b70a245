//! Config command - show resolved paths and configuration.

use anyhow::Result;
use colored::Colorize;

use moba_convert::config::Config;
use moba_convert::targets::putty::{
    flatpak_sessions_dir, legacy_sessions_dir, native_sessions_dir,
};
use moba_convert::targets::{PuttyLocation, RabbitLayout};

use crate::cli::load_environment;

#[derive(clap::Args)]
#[command(
    about = "Show resolved paths and configuration",
    long_about = "Shows the config file location and every directory the\n\
        conversion commands read from or write to."
)]
pub struct Args {}

pub fn run(_args: Args) -> Result<()> {
    let (paths, config) = load_environment()?;
    let config_path = Config::config_path(&paths);

    println!("{}", "moba-convert Configuration".bold());
    println!();

    let status = if config_path.is_file() {
        "loaded".green()
    } else {
        "not found, using defaults".dimmed()
    };
    println!(
        "  {}  {} ({})",
        "Config file:".dimmed(),
        config_path.display(),
        status
    );
    println!(
        "  {}  {}",
        "Source file:".dimmed(),
        config.source_file(None).display()
    );

    println!();
    println!("{}", "Targets:".bold());
    println!(
        "  {}  {}",
        "remmina:".dimmed(),
        config.remmina_dir(&paths).display()
    );

    let putty_default = PuttyLocation::from_flags(None, false, false, config.putty_target.clone());
    println!(
        "  {}  {}",
        "putty:".dimmed(),
        putty_default.resolve(&paths).display()
    );
    println!(
        "    {} {}",
        "--flatpak".dimmed(),
        flatpak_sessions_dir(&paths).display()
    );
    println!(
        "    {} {}",
        "--native ".dimmed(),
        native_sessions_dir(&paths).display()
    );
    println!(
        "    {} {}",
        "legacy   ".dimmed(),
        legacy_sessions_dir(&paths).display()
    );

    let layout = RabbitLayout::new(config.rabbit_dir(&paths));
    let marker = |exists: bool| {
        if exists {
            "✓".green()
        } else {
            "✗".red()
        }
    };
    println!(
        "  {}  {}",
        "rabbit:".dimmed(),
        config.rabbit_dir(&paths).display()
    );
    println!(
        "    {} {}",
        marker(layout.favorites_path().exists()),
        layout.favorites_path().display()
    );
    println!(
        "    {} {}",
        marker(layout.share_dir().exists()),
        layout.share_dir().display()
    );

    Ok(())
}

//! CLI tool for adding custom icons to a Loxone icon library.

mod commands;
mod exit_codes;
mod output;
mod progress;
mod prompt;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use iconlib::library::DEFAULT_TAG;
use iconlib::transfer::DEFAULT_REMOTE_PATH;

/// Add custom icons to the Loxone icon library
#[derive(Parser)]
#[command(name = "iconlib")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Icon files to add, named <index>.<name>.svg
    #[arg(long, default_value = "*.svg")]
    icons: String,

    /// Icon library to edit [default: library of the newest Loxone Config install]
    #[arg(long)]
    library: Option<PathBuf>,

    /// Catalog languages to update (the base catalog is always updated)
    #[arg(long, num_args = 1.., default_values = ["ENG", "DEU"])]
    languages: Vec<String>,

    /// Tags for the new icons
    #[arg(long, num_args = 1.., default_value = DEFAULT_TAG)]
    tags: Vec<String>,

    /// Overwrite existing SVGs and replace existing catalog entries
    #[arg(long)]
    force: bool,

    /// Edit the library in place instead of a copy in the current directory
    #[arg(long)]
    overwrite: bool,

    /// Upload the library to this Miniserver
    #[arg(long, value_name = "HOST")]
    miniserver: Option<String>,

    /// Upload destination on the Miniserver
    #[arg(long, default_value = DEFAULT_REMOTE_PATH)]
    remote_path: String,

    /// Also add files without a numeric prefix, numbered after the highest prefix
    #[arg(long)]
    auto_index: bool,

    /// Do not mark new icons as line icons
    #[arg(long)]
    no_line: bool,

    /// Do not mark new icons as filled icons
    #[arg(long)]
    no_filled: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "human")]
    format: OutputFormat,

    /// Show debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn main() {
    // Set up Ctrl+C handler
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted");
        std::process::exit(exit_codes::USER_INTERRUPT);
    })
    .ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = commands::run(&commands::RunConfig {
        icons: &cli.icons,
        library: cli.library.as_deref(),
        languages: &cli.languages,
        tags: &cli.tags,
        force: cli.force,
        overwrite: cli.overwrite,
        miniserver: cli.miniserver.as_deref(),
        remote_path: &cli.remote_path,
        auto_index: cli.auto_index,
        line: !cli.no_line,
        filled: !cli.no_filled,
        format: cli.format,
    });

    std::process::exit(exit_code.code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_schema() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["iconlib"]).unwrap();
        assert_eq!(cli.icons, "*.svg");
        assert_eq!(cli.library, None);
        assert_eq!(cli.languages, vec!["ENG", "DEU"]);
        assert_eq!(cli.tags, vec!["custom"]);
        assert!(!cli.force);
        assert!(!cli.overwrite);
        assert_eq!(cli.remote_path, "/sys/IconLibrary.zip");
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "iconlib",
            "--icons",
            "icons/*.svg",
            "--languages",
            "ENG",
            "--tags",
            "custom",
            "garden",
            "--force",
            "--miniserver",
            "192.168.1.7",
        ])
        .unwrap();
        assert_eq!(cli.icons, "icons/*.svg");
        assert_eq!(cli.languages, vec!["ENG"]);
        assert_eq!(cli.tags, vec!["custom", "garden"]);
        assert!(cli.force);
        assert_eq!(cli.miniserver.as_deref(), Some("192.168.1.7"));
    }
}

//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use rtimer_update::config::UpdaterConfig;
use rtimer_update::output::OutputMode;

/// rtimer-update - Keep a source-installed rtimer current
#[derive(Parser, Debug)]
#[command(
    name = "rtimer-update",
    version,
    about = "Update a source-installed rtimer from its git upstream",
    long_about = "Compare the local checkout with its upstream, pull or reset as needed, \
                  then rebuild and reinstall.\n\n\
                  Anything that could discard local work asks first; the default answer is no."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path inside the working copy to update
    #[arg(short = 'C', long = "repo", global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Configuration file
    #[arg(long, global = true, env = "RTIMER_UPDATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show how the checkout relates to upstream without changing anything
    Status {
        /// Do not refresh remote metadata first
        #[arg(long)]
        no_fetch: bool,
    },

    /// Install the already-built artifact (binary, menu entry, icon)
    Install,

    /// Remove the installed binary, menu entry and icon
    Uninstall {
        /// Also remove the application's configuration directory
        #[arg(long)]
        purge: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = UpdaterConfig::load(cli.config.as_deref())?;

    match cli.command {
        None => commands::update(&cli.repo, &config, output_mode),
        Some(Command::Status { no_fetch }) => commands::status(&cli.repo, !no_fetch, output_mode),
        Some(Command::Install) => commands::install(&cli.repo, &config, output_mode),
        Some(Command::Uninstall { purge }) => commands::uninstall(purge, &config, output_mode),
    }
}

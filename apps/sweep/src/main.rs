//! steamsweep entry point.

mod app;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// List installed Steam games, stalest first, and hand them to Steam for removal.
#[derive(Parser)]
#[command(name = "steamsweep", version)]
struct Cli {
    /// Steam install directory (skips auto-detection).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List installed games (default).
    List(app::ListArgs),

    /// Open Steam's uninstall dialog for one or more app ids.
    Uninstall {
        /// App ids to uninstall.
        #[arg(required = true)]
        ids: Vec<String>,

        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// Open the library folder holding a game's manifest.
    Reveal {
        /// App id of the game.
        id: String,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so table/JSON output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,steamsweep=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Any failure ends here as a message, never a panic.
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::Config::load()?;
    tracing::debug!(sort_by = %config.sort_by, descending = config.descending, "configuration loaded");

    let root = cli.root.or_else(|| config.steam_root.clone());
    let session = app::Session::new(root);

    match cli.command.unwrap_or(Command::List(app::ListArgs::default())) {
        Command::List(args) => session.list(&config, &args),
        Command::Uninstall { ids, yes } => session.uninstall(&ids, yes),
        Command::Reveal { id } => session.reveal(&id),
    }
}


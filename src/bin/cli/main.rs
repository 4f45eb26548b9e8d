mod app;
mod commands;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use commands::action::Action;

#[derive(Parser)]
#[command(name = "flashdrill", about = "Flashcard drill CLI and TUI", version)]
struct Cli {
    /// Config file (default: <config dir>/flashdrill/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Seed the shuffle for a reproducible order
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Keep state in memory only; nothing is read or written on disk
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current card
    Show,

    /// Flip between question and answer
    Flip,

    /// Mark the card as missed and move on
    Again,

    /// Mark the card as known (reveals the answer first if needed)
    GotIt,

    /// Reshuffle the deck and start from the top
    Shuffle,

    /// Show today's counters and the streak
    Stats,

    /// Detect the host container and signal readiness
    Env,

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let options = app::Options {
        config_path: cli.config,
        today: cli.today,
        seed: cli.seed,
        ephemeral: cli.ephemeral,
    };

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(&options)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Show) => {
            let mut app = app::App::new(&options)?;
            commands::action::run(&mut app, Action::Show, &cli.format, use_color)?;
        }
        Some(Command::Flip) => {
            let mut app = app::App::new(&options)?;
            commands::action::run(&mut app, Action::Flip, &cli.format, use_color)?;
        }
        Some(Command::Again) => {
            let mut app = app::App::new(&options)?;
            commands::action::run(&mut app, Action::Again, &cli.format, use_color)?;
        }
        Some(Command::GotIt) => {
            let mut app = app::App::new(&options)?;
            commands::action::run(&mut app, Action::GotIt, &cli.format, use_color)?;
        }
        Some(Command::Shuffle) => {
            let mut app = app::App::new(&options)?;
            commands::action::run(&mut app, Action::Shuffle, &cli.format, use_color)?;
        }
        Some(Command::Stats) => {
            let app = app::App::new(&options)?;
            commands::stats::run(&app, &cli.format)?;
        }
        Some(Command::Env) => {
            let config = app::load_config(&options)?;
            commands::env::run(&config, &cli.format)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(&options)?;
        }
    }

    Ok(())
}

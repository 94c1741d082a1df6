//! CLI frontend for the signaling-game payoff editor.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sg",
    about = "Signaling games: edit payoff tables and ask a solver for equilibria",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive editing session
    Session {
        /// Load a built-in game first (e.g. regulator)
        #[arg(short, long)]
        preset: Option<String>,

        /// Solver base URL (default: $SG_SOLVER_URL or http://127.0.0.1:5000)
        #[arg(short, long)]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Print the label of every case
    Cases {
        /// Nature's two states, comma-separated
        #[arg(short, long, default_value = "stable, unstable")]
        nature: String,

        /// Player 1's strategies, comma-separated
        #[arg(long, default_value = "Action 1, Action 2")]
        p1: String,

        /// Player 2's strategies, comma-separated
        #[arg(long, default_value = "Action 1, Action 2")]
        p2: String,
    },

    /// Print the JSON request a game would send to the solver
    Payload {
        /// Built-in game to print (e.g. regulator)
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// Send a built-in game to the solver and print the equilibria
    Solve {
        /// Built-in game to solve (e.g. regulator)
        #[arg(short, long)]
        preset: String,

        /// Solver base URL (default: $SG_SOLVER_URL or http://127.0.0.1:5000)
        #[arg(short, long)]
        url: Option<String>,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// List the built-in games
    Presets,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Session {
            preset,
            url,
            timeout,
        } => commands::session::run(preset.as_deref(), url.as_deref(), timeout),
        Commands::Cases { nature, p1, p2 } => commands::cases::run(&nature, &p1, &p2),
        Commands::Payload { preset } => commands::payload::run(preset.as_deref()),
        Commands::Solve {
            preset,
            url,
            timeout,
        } => commands::solve::run(&preset, url.as_deref(), timeout),
        Commands::Presets => commands::presets::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

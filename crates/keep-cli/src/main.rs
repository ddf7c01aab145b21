//! CLI for inspecting the ELDEN RING NIGHTREIGN objective catalog.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "keep",
    about = "Keymaster's Keep: inspect the ELDEN RING NIGHTREIGN objective catalog",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    options: OptionArgs,

    /// Log option resolution to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Option values the catalog is generated under.
#[derive(Args, Debug)]
struct OptionArgs {
    /// Load option values from a JSON file
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Owned hero (repeatable); replaces the owned-heroes option
    #[arg(long = "hero", global = true)]
    heroes: Vec<String>,

    /// Own no heroes at all
    #[arg(long, global = true, conflicts_with = "heroes")]
    no_heroes: bool,

    /// Unlock the Night Aspect
    #[arg(long, global = true)]
    night_aspect: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show game identity, platforms and option values
    Info,

    /// List the objective templates
    Templates,

    /// List every data pool and its values
    Pools,

    /// Describe the options schema
    Options,

    /// Export the catalog as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = commands::load_game(&cli.options).and_then(|game| match cli.command {
        Commands::Info => commands::info::run(&game),
        Commands::Templates => commands::templates::run(&game),
        Commands::Pools => commands::pools::run(&game),
        Commands::Options => commands::options::run(&game),
        Commands::Export { output } => commands::export::run(&game, output.as_deref()),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use samplepack::cli;
use samplepack::config::Settings;

#[derive(Parser)]
#[command(name = "samplepack")]
#[command(about = "Sample packing assistant - pack lab samples into grid-partitioned boxes")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to samplepack.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a default samplepack.toml configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Import a sample list and print it with the materialized box grid
    Show {
        /// Sample list spreadsheet (.xls/.xlsx)
        input: PathBuf,
    },

    /// Import a sample list and export the per-box packing map
    Map {
        /// Sample list spreadsheet (.xls/.xlsx)
        input: PathBuf,
        /// Output spreadsheet for the packing map
        output: PathBuf,
        /// Shipment number used to label the boxes
        #[arg(short, long, default_value = "N")]
        number: String,
    },

    /// Import a sample list and re-export it in the flat autosave format
    Autosave {
        /// Sample list spreadsheet (.xls/.xlsx)
        input: PathBuf,
        /// Output spreadsheet for the flat list
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from("samplepack.toml"));

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(&config_path, force)?;
        }
        Commands::Show { input } => {
            let settings = Settings::load(&config_path);
            cli::show::show_command(&input, &settings)?;
        }
        Commands::Map {
            input,
            output,
            number,
        } => {
            let settings = Settings::load(&config_path);
            cli::map::map_command(&input, &output, &number, &settings)?;
        }
        Commands::Autosave { input, output } => {
            let settings = Settings::load(&config_path);
            cli::autosave::autosave_command(&input, &output, &settings)?;
        }
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lunar phase calculator.
#[derive(Parser)]
#[command(name = "lunar", version, about = "Mean-synodic lunar phase calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: lunar.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Julian Day Number and Julian Date of a calendar date/time
    Jd(JdArgs),
    /// Lunar phase at a calendar date/time or Julian Date
    Phase(PhaseArgs),
    /// Tonight's lunar phase, with an exclamation and a quote
    Tonight(TonightArgs),
    /// Print one uniformly random line of a text file
    PickLine(PickLineArgs),
}

/// Arguments for the `jd` subcommand.
#[derive(clap::Args)]
pub struct JdArgs {
    /// Date/time (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)
    pub datetime: String,
}

/// Arguments for the `phase` subcommand.
#[derive(clap::Args)]
pub struct PhaseArgs {
    /// Date/time (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)
    #[arg(required_unless_present = "jd", conflicts_with = "jd")]
    pub datetime: Option<String>,

    /// Classify a Julian Date directly
    #[arg(long)]
    pub jd: Option<f64>,

    /// Use floored wrapping (correct for dates long before 2000)
    #[arg(long)]
    pub floored: bool,
}

/// Arguments for the `tonight` subcommand.
#[derive(clap::Args)]
pub struct TonightArgs {
    /// Today's date (YYYY-MM-DD); defaults to the current UTC date
    #[arg(long)]
    pub date: Option<String>,

    /// Use floored wrapping (correct for dates long before 2000)
    #[arg(long)]
    pub floored: bool,

    /// Skip the exclamation and quote
    #[arg(long)]
    pub plain: bool,

    /// Override the RNG seed from config
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `pick-line` subcommand.
#[derive(clap::Args)]
pub struct PickLineArgs {
    /// Text file to sample from
    pub file: PathBuf,

    /// Override the RNG seed from config
    #[arg(short, long)]
    pub seed: Option<u64>,
}

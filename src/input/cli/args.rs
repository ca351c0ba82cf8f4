//! CLI argument definitions for `sortviz`.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::config::session_config::DEFAULT_ARRAY_SIZE;
use crate::core::config::speed::SpeedPreset;
use crate::core::config::visual_mode::VisualMode;

#[derive(Parser)]
#[command(
    name = "sortviz",
    version,
    about = "Step through sorting algorithms one comparison at a time"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort one array and print the resulting metrics.
    Run(RunArgs),

    /// List the available algorithms with their complexity.
    Algorithms,
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: AlgorithmKind,

    /// Number of random values to generate.
    #[arg(short, long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Comma separated values to sort instead of a random array.
    #[arg(long, value_name = "LIST")]
    pub values: Option<String>,

    #[arg(long, default_value = "fast")]
    pub speed: SpeedPreset,

    #[arg(long, default_value = "bars")]
    pub mode: VisualMode,

    /// Print every frame, paced at the selected speed.
    #[arg(long)]
    pub frames: bool,

    #[arg(long)]
    pub no_sound: bool,

    /// Seed for the random array.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
}

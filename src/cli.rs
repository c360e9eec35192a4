use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "fww",
    version,
    about = "Convert exported design nodes into builder components"
)]
pub struct Cli {
    /// TOML config with conversion policy overrides
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print progress and debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a selection JSON file into a component tree
    Convert {
        /// Selection JSON (a node object or an array of nodes)
        #[arg(long)]
        input: PathBuf,

        /// Variables JSON (an array of variables or an id-keyed object)
        #[arg(long)]
        variables: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write output to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

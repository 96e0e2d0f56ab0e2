//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Computer build explorer: part hierarchy, price aggregation, and memory cost reports
#[derive(Parser, Debug)]
#[command(name = "rsbom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price report for memory-class parts (default)
    Report,

    /// Total price of the whole build
    Total,

    /// Price of a named sub-assembly
    Price {
        /// Assembly name: computer, memory, graphic-card
        assembly: String,
    },

    /// List atomic parts with prices
    Parts,

    /// Show the build hierarchy as a tree
    Tree,
}

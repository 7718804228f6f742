pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "exprscope",
    version,
    about = "Explore gene-expression fold changes and GO enrichment results",
    long_about = "exprscope compares two conditions of an expression table, flags genes whose \
                  fold change passes a threshold, highlights genes by annotation, and shows the \
                  topGO enrichment table and treemap bound to a condition."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(short = 'c', long, value_name = "FILE", env = "EXPRSCOPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the measurement columns of an expression table
    Columns(commands::columns::ColumnsArgs),

    /// Compare two conditions: fold change, significance and annotation highlights
    Scatter(commands::scatter::ScatterArgs),

    /// Show the GO enrichment table and treemap for a condition
    Enrichment(commands::enrichment::EnrichmentArgs),

    /// Write the default configuration to a file
    InitConfig(commands::init_config::InitConfigArgs),
}

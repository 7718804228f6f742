use clap::Parser;
use colored::*;
use exprscope::cli::{Cli, Commands};
use exprscope::ExprScopeError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // EXPRSCOPE_LOG wins over -v; logs go to stderr so reports stay pipeable
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let log_level = std::env::var("EXPRSCOPE_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<ExprScopeError>() {
            Some(ExprScopeError::Config(_)) | Some(ExprScopeError::UnknownColumn { .. }) => 2,
            Some(ExprScopeError::Io(_)) => 3,
            Some(ExprScopeError::Parse(_)) | Some(ExprScopeError::Csv(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = exprscope::core::config::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Columns(args) => exprscope::cli::commands::columns::run(args, &config),
        Commands::Scatter(args) => exprscope::cli::commands::scatter::run(args, &config),
        Commands::Enrichment(args) => exprscope::cli::commands::enrichment::run(args, &config),
        Commands::InitConfig(args) => exprscope::cli::commands::init_config::run(args),
    }
}

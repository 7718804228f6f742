use crate::bio::lookup::SequenceIndex;
use crate::cli::commands::{emit, resolve_path};
use crate::cli::output::{format_number, info, loading_spinner};
use crate::core::config::Config;
use crate::expression::table::ExpressionTable;
use crate::report::{Format, ReportGenerator, ReportOptions};
use crate::scatter::{ScatterSession, Selection, ThresholdLimits};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ScatterArgs {
    /// Tab-separated expression table (defaults to paths.data_file)
    #[arg(short = 'd', long, value_name = "TSV")]
    pub data: Option<PathBuf>,

    /// Protein sequences keyed by gene identifier (defaults to paths.fasta_file)
    #[arg(short = 'f', long, value_name = "FASTA")]
    pub fasta: Option<PathBuf>,

    /// Measurement column for condition A (x axis)
    #[arg(short = 'x', long = "x-column", value_name = "COLUMN")]
    pub x_column: Option<String>,

    /// Measurement column for condition B (y axis)
    #[arg(short = 'y', long = "y-column", value_name = "COLUMN")]
    pub y_column: Option<String>,

    /// |fold change| threshold for significance
    #[arg(short = 't', long)]
    pub threshold: Option<f64>,

    /// Highlight genes whose annotation contains this text (case-insensitive)
    #[arg(short = 'a', long, default_value = "")]
    pub annotation: String,

    /// Output format (text, json, tsv)
    #[arg(long, default_value = "text")]
    pub format: Format,

    /// Only list significant genes
    #[arg(long)]
    pub significant_only: bool,

    /// Only list genes matched by --annotation
    #[arg(long)]
    pub highlighted_only: bool,

    /// Maximum number of genes to list
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Load the expression table and optional sequences once for a session.
pub fn load_session(
    data: &Path,
    fasta: Option<&Path>,
    config: &Config,
) -> crate::Result<ScatterSession> {
    let spinner = loading_spinner(format!("Loading {}...", data.display()));
    let table = ExpressionTable::from_path(data);
    spinner.finish_and_clear();
    let table = table?;

    let sequences = match fasta {
        Some(path) => {
            let spinner = loading_spinner(format!("Indexing {}...", path.display()));
            let index = SequenceIndex::from_fasta(path);
            spinner.finish_and_clear();
            index?
        }
        None => {
            tracing::debug!("No FASTA given; sequence lookups use the sentinel");
            SequenceIndex::empty()
        }
    };

    info(&format!(
        "Loaded {} genes, {} conditions, {} sequences",
        format_number(table.len()),
        table.measurement_columns().len(),
        format_number(sequences.len())
    ));

    Ok(ScatterSession::new(
        table,
        sequences,
        ThresholdLimits::from(&config.scatter),
    ))
}

pub fn run(args: ScatterArgs, config: &Config) -> anyhow::Result<()> {
    let data = resolve_path(args.data, config.paths.data_file.as_deref(), "--data")?;
    let fasta = args.fasta.or_else(|| config.paths.fasta_file.clone());

    let session = load_session(&data, fasta.as_deref(), config)?;

    let mut selection = Selection::from_config(&config.scatter).with_annotation(&args.annotation);
    if let Some(x) = args.x_column {
        selection.x_column = x;
    }
    if let Some(y) = args.y_column {
        selection.y_column = y;
    }
    if let Some(threshold) = args.threshold {
        selection.threshold = threshold;
    }

    let view = session.view(&selection)?;

    let generator = ReportGenerator::new(ReportOptions {
        format: args.format,
        significant_only: args.significant_only,
        highlighted_only: args.highlighted_only,
        limit: args.limit,
    });
    let report = generator.scatter(&view)?;
    emit(&report, args.output.as_deref())?;

    Ok(())
}

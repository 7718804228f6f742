use crate::cli::commands::{emit, resolve_path};
use crate::cli::output::{section_header_with_line, warning};
use crate::core::config::Config;
use crate::enrichment::EnrichmentCatalog;
use crate::expression::table::ExpressionTable;
use crate::report::{Format, ReportGenerator, ReportOptions};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct EnrichmentArgs {
    /// Directory with <condition>.png treemaps and topgo_<condition>.txt tables
    #[arg(short = 's', long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Condition to show (defaults to enrichment.condition)
    #[arg(short = 'C', long)]
    pub condition: Option<String>,

    /// Expression table whose columns name the valid conditions
    #[arg(short = 'd', long, value_name = "TSV")]
    pub data: Option<PathBuf>,

    /// List conditions that have an enrichment table and exit
    #[arg(long)]
    pub list: bool,

    /// Output format (text, json, tsv)
    #[arg(long, default_value = "text")]
    pub format: Format,

    /// Maximum number of terms to list (text output)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: EnrichmentArgs, config: &Config) -> anyhow::Result<()> {
    let static_dir = resolve_path(
        args.static_dir,
        config.paths.static_dir.as_deref(),
        "--static-dir",
    )?;
    let catalog = EnrichmentCatalog::new(&static_dir, &config.enrichment);

    if args.list {
        let conditions = catalog.available_conditions()?;
        if args.format == Format::Json {
            println!("{}", serde_json::to_string_pretty(&conditions)?);
        } else {
            section_header_with_line(&format!("Conditions in {}", static_dir.display()));
            for condition in conditions {
                println!("{}", condition);
            }
        }
        return Ok(());
    }

    let condition = args
        .condition
        .unwrap_or_else(|| config.enrichment.condition.clone());

    let data = args.data.or_else(|| config.paths.data_file.clone());
    if let Some(data) = data {
        let table = ExpressionTable::from_path(&data)?;
        if !table.has_column(&condition) {
            warning(&format!(
                "'{}' is not a measurement column of {}",
                condition,
                data.display()
            ));
        }
    }

    let view = catalog.open(&condition)?;

    let generator = ReportGenerator::new(ReportOptions {
        format: args.format,
        limit: args.limit,
        ..ReportOptions::default()
    });
    let report = generator.enrichment(&view)?;
    emit(&report, args.output.as_deref())?;

    Ok(())
}

use crate::cli::commands::resolve_path;
use crate::core::config::Config;
use crate::expression::table::ExpressionTable;
use crate::report::Format;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Tab-separated expression table (defaults to paths.data_file)
    #[arg(short = 'd', long, value_name = "TSV")]
    pub data: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: Format,
}

pub fn run(args: ColumnsArgs, config: &Config) -> anyhow::Result<()> {
    let data = resolve_path(args.data, config.paths.data_file.as_deref(), "--data")?;
    let table = ExpressionTable::from_path(&data)?;
    let columns = table.measurement_columns();

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&columns)?),
        Format::Text | Format::Tsv => {
            for column in columns {
                println!("{}", column);
            }
        }
    }

    Ok(())
}

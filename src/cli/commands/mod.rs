pub mod columns;
pub mod enrichment;
pub mod init_config;
pub mod scatter;

use crate::ExprScopeError;
use std::path::{Path, PathBuf};

/// Pick the CLI path, else the configured one, else fail naming the flag.
pub(crate) fn resolve_path(
    cli: Option<PathBuf>,
    configured: Option<&Path>,
    flag: &str,
) -> Result<PathBuf, ExprScopeError> {
    cli.or_else(|| configured.map(Path::to_path_buf))
        .ok_or_else(|| {
            ExprScopeError::Config(format!(
                "no {} given and none set in the configuration",
                flag
            ))
        })
}

/// Print to stdout or write to `output` when given.
pub(crate) fn emit(report: &str, output: Option<&Path>) -> Result<(), ExprScopeError> {
    match output {
        Some(path) => {
            std::fs::write(path, report)?;
            crate::cli::output::success(&format!("Report written to {}", path.display()));
        }
        None => print!("{}", report),
    }
    Ok(())
}

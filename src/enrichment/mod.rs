//! GO enrichment results per condition.
//!
//! Each condition has a treemap image (`<condition>.png`) and a topGO result
//! table (`topgo_<condition>.txt`) side by side in one static directory.

pub mod table;

pub use table::{parse_p_value, EnrichmentTerm};

use crate::core::config::EnrichmentConfig;
use crate::ExprScopeError;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct EnrichmentCatalog {
    static_dir: PathBuf,
    table_prefix: String,
    image_extension: String,
    table_extension: String,
    fisher_cutoff: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichmentView {
    pub condition: String,
    pub image_path: PathBuf,
    pub image_exists: bool,
    pub table_path: PathBuf,
    pub fisher_cutoff: f64,
    pub terms: Vec<EnrichmentTerm>,
}

impl EnrichmentView {
    pub fn significant_count(&self) -> usize {
        self.terms
            .iter()
            .filter(|t| t.is_significant(self.fisher_cutoff))
            .count()
    }
}

impl EnrichmentCatalog {
    pub fn new<P: AsRef<Path>>(static_dir: P, config: &EnrichmentConfig) -> Self {
        Self {
            static_dir: static_dir.as_ref().to_path_buf(),
            table_prefix: config.table_prefix.clone(),
            image_extension: config.image_extension.clone(),
            table_extension: config.table_extension.clone(),
            fisher_cutoff: config.fisher_cutoff,
        }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    fn check_condition(condition: &str) -> Result<(), ExprScopeError> {
        if condition.is_empty()
            || condition.contains('/')
            || condition.contains('\\')
            || condition == "."
            || condition == ".."
        {
            return Err(ExprScopeError::Config(format!(
                "invalid condition name '{}'",
                condition
            )));
        }
        Ok(())
    }

    pub fn image_path(&self, condition: &str) -> PathBuf {
        self.static_dir
            .join(format!("{}.{}", condition, self.image_extension))
    }

    pub fn table_path(&self, condition: &str) -> PathBuf {
        self.static_dir.join(format!(
            "{}{}.{}",
            self.table_prefix, condition, self.table_extension
        ))
    }

    /// Load the table for `condition` from disk. Called again on every
    /// selection change, nothing is cached.
    pub fn open(&self, condition: &str) -> Result<EnrichmentView, ExprScopeError> {
        Self::check_condition(condition)?;

        let table_path = self.table_path(condition);
        let terms = table::read_terms(&table_path)?;

        let image_path = self.image_path(condition);
        let image_exists = image_path.is_file();
        if !image_exists {
            tracing::warn!("Treemap image {} not found", image_path.display());
        }

        tracing::info!(
            "Loaded {} GO terms for {} from {}",
            terms.len(),
            condition,
            table_path.display()
        );

        Ok(EnrichmentView {
            condition: condition.to_string(),
            image_path,
            image_exists,
            table_path,
            fisher_cutoff: self.fisher_cutoff,
            terms,
        })
    }

    /// Conditions with a result table in the static directory, sorted.
    pub fn available_conditions(&self) -> Result<Vec<String>, ExprScopeError> {
        let suffix = format!(".{}", self.table_extension);
        let mut conditions = Vec::new();

        for entry in std::fs::read_dir(&self.static_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(condition) = name
                .strip_prefix(self.table_prefix.as_str())
                .and_then(|rest| rest.strip_suffix(suffix.as_str()))
            {
                if !condition.is_empty() {
                    conditions.push(condition.to_string());
                }
            }
        }

        conditions.sort();
        Ok(conditions)
    }
}

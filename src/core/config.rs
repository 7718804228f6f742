use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scatter: ScatterConfig,
    pub enrichment: EnrichmentConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Default measurement column for condition A (x axis)
    pub x_column: String,
    /// Default measurement column for condition B (y axis)
    pub y_column: String,
    /// Default |fold change| threshold
    pub threshold: f64,
    pub threshold_min: f64,
    pub threshold_max: f64,
    /// Granularity offered to interactive front ends; not enforced on input
    pub threshold_step: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Condition shown when none is requested
    pub condition: String,
    /// File name prefix of the topGO result tables
    pub table_prefix: String,
    pub image_extension: String,
    pub table_extension: String,
    /// classicFisher p-values at or below this are highlighted
    pub fisher_cutoff: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Tab-separated expression table
    pub data_file: Option<PathBuf>,
    /// Protein sequences keyed by gene identifier
    pub fasta_file: Option<PathBuf>,
    /// Directory holding treemap images and topGO tables
    pub static_dir: Option<PathBuf>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            x_column: "wt_0min".to_string(),
            y_column: "wt_25min".to_string(),
            threshold: 2.0,
            threshold_min: 0.0,
            threshold_max: 10.0,
            threshold_step: 0.5,
        }
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            condition: "dhog_0min".to_string(),
            table_prefix: "topgo_".to_string(),
            image_extension: "png".to_string(),
            table_extension: "txt".to_string(),
            fisher_cutoff: 0.01,
        }
    }
}

impl Config {
    /// Check internal consistency of the loaded values.
    pub fn validate(&self) -> Result<(), crate::ExprScopeError> {
        let s = &self.scatter;
        if !(s.threshold_min.is_finite() && s.threshold_max.is_finite()) {
            return Err(crate::ExprScopeError::Config(
                "threshold bounds must be finite".to_string(),
            ));
        }
        if s.threshold_min > s.threshold_max {
            return Err(crate::ExprScopeError::Config(format!(
                "threshold_min ({}) exceeds threshold_max ({})",
                s.threshold_min, s.threshold_max
            )));
        }
        if !(s.threshold_min..=s.threshold_max).contains(&s.threshold) {
            return Err(crate::ExprScopeError::Config(format!(
                "default threshold {} outside [{}, {}]",
                s.threshold, s.threshold_min, s.threshold_max
            )));
        }
        if !(s.threshold_step.is_finite() && s.threshold_step > 0.0) {
            return Err(crate::ExprScopeError::Config(format!(
                "threshold_step must be a positive number, got {}",
                s.threshold_step
            )));
        }
        if !(self.enrichment.fisher_cutoff.is_finite() && self.enrichment.fisher_cutoff >= 0.0) {
            return Err(crate::ExprScopeError::Config(format!(
                "fisher_cutoff must be a non-negative number, got {}",
                self.enrichment.fisher_cutoff
            )));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::ExprScopeError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::ExprScopeError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::ExprScopeError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::ExprScopeError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load the file given on the command line, or fall back to built-in defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<Config, crate::ExprScopeError> {
    match path {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            load_config(path)
        }
        None => Ok(default_config()),
    }
}

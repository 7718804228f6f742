pub mod bio;
pub mod cli;
pub mod core;
pub mod enrichment;
pub mod expression;
pub mod report;
pub mod scatter;

pub use crate::enrichment::{EnrichmentCatalog, EnrichmentView};
pub use crate::expression::metrics::{compute, DerivedMetrics, FoldChange};
pub use crate::scatter::{ScatterSession, ScatterView, Selection};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExprScopeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown measurement column '{name}' (available: {available})")]
    UnknownColumn { name: String, available: String },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ExprScopeError>;

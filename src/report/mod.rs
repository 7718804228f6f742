use crate::enrichment::EnrichmentView;
use crate::expression::record::DerivedRecord;
use crate::scatter::{paper_blast_url, ScatterView};
use anyhow::Result;
use serde::Serialize;

pub mod json;
pub mod text;
pub mod tsv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Tsv,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "tsv" | "tab" => Ok(Format::Tsv),
            _ => Err(format!("Unknown report format: {} (expected text, json or tsv)", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: Format,
    pub significant_only: bool,
    pub highlighted_only: bool,
    pub limit: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: Format::Text,
            significant_only: false,
            highlighted_only: false,
            limit: None,
        }
    }
}

/// One scatter point as it appears in reports.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterRow<'a> {
    #[serde(flatten)]
    pub record: &'a DerivedRecord,
    pub paper_blast_url: String,
}

pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    pub fn scatter(&self, view: &ScatterView) -> Result<String> {
        let rows = self.scatter_rows(view);
        match self.options.format {
            Format::Text => text::scatter_report(view, &rows, &self.options),
            Format::Json => json::scatter_report(view, &rows),
            Format::Tsv => tsv::scatter_report(view, &rows),
        }
    }

    pub fn enrichment(&self, view: &EnrichmentView) -> Result<String> {
        match self.options.format {
            Format::Text => text::enrichment_report(view, &self.options),
            Format::Json => json::enrichment_report(view),
            Format::Tsv => tsv::enrichment_report(view),
        }
    }

    /// Rows left after the significance/highlight filters and the limit.
    pub fn scatter_rows<'a>(&self, view: &'a ScatterView) -> Vec<ScatterRow<'a>> {
        view.records
            .iter()
            .filter(|r| !self.options.significant_only || r.is_significant)
            .filter(|r| !self.options.highlighted_only || r.is_highlighted)
            .take(self.options.limit.unwrap_or(usize::MAX))
            .map(|record| ScatterRow {
                record,
                paper_blast_url: paper_blast_url(&record.record.sequence),
            })
            .collect()
    }
}

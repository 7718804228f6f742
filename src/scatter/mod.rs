//! Condition-vs-condition view of an expression table.
//!
//! A [`ScatterSession`] owns the inputs loaded once per session. Every call
//! to [`ScatterSession::view`] takes the full [`Selection`] explicitly and
//! derives a new [`ScatterView`]; nothing from a previous selection leaks
//! into the next one.

use crate::bio::lookup::SequenceIndex;
use crate::core::config::ScatterConfig;
use crate::expression::filter::AnnotationFilter;
use crate::expression::metrics::derive;
use crate::expression::record::DerivedRecord;
use crate::expression::table::ExpressionTable;
use crate::ExprScopeError;
use serde::Serialize;

const PAPER_BLAST_URL: &str = "http://papers.genomics.lbl.gov/cgi-bin/litSearch.cgi";

/// Literature search link for a protein sequence.
pub fn paper_blast_url(sequence: &str) -> String {
    format!("{}?query={}&Search=Search", PAPER_BLAST_URL, sequence)
}

/// Allowed range for the significance threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ThresholdLimits {
    fn default() -> Self {
        Self { min: 0.0, max: 10.0 }
    }
}

impl From<&ScatterConfig> for ThresholdLimits {
    fn from(config: &ScatterConfig) -> Self {
        Self {
            min: config.threshold_min,
            max: config.threshold_max,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Condition A, plotted on x
    pub x_column: String,
    /// Condition B, plotted on y
    pub y_column: String,
    pub threshold: f64,
    pub annotation: AnnotationFilter,
}

impl Selection {
    pub fn new(x_column: impl Into<String>, y_column: impl Into<String>, threshold: f64) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            threshold,
            annotation: AnnotationFilter::none(),
        }
    }

    pub fn with_annotation(mut self, text: &str) -> Self {
        self.annotation = AnnotationFilter::new(text);
        self
    }

    pub fn from_config(config: &ScatterConfig) -> Self {
        Self::new(config.x_column.clone(), config.y_column.clone(), config.threshold)
    }

    pub fn validate(&self, limits: &ThresholdLimits) -> Result<(), ExprScopeError> {
        if !self.threshold.is_finite() || self.threshold < limits.min || self.threshold > limits.max {
            return Err(ExprScopeError::Config(format!(
                "threshold {} outside [{}, {}]",
                self.threshold, limits.min, limits.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub threshold: f64,
    pub annotation_filter: Option<String>,
    pub records: Vec<DerivedRecord>,
}

impl ScatterView {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn significant(&self) -> impl Iterator<Item = &DerivedRecord> {
        self.records.iter().filter(|r| r.is_significant)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &DerivedRecord> {
        self.records.iter().filter(|r| r.is_highlighted)
    }

    pub fn significant_count(&self) -> usize {
        self.significant().count()
    }

    pub fn highlighted_count(&self) -> usize {
        self.highlighted().count()
    }

    /// Hover fields for one point, labelled the way the axes are.
    pub fn tooltip(&self, record: &DerivedRecord) -> Vec<(String, String)> {
        vec![
            ("GeneID".to_string(), record.id().to_string()),
            ("Annotation".to_string(), record.annotation().to_string()),
            ("fold change".to_string(), record.fold_change.to_string()),
            (format!("FPKM ({})", self.x_label), record.record.value_a.to_string()),
            (format!("FPKM ({})", self.y_label), record.record.value_b.to_string()),
        ]
    }
}

pub struct ScatterSession {
    table: ExpressionTable,
    sequences: SequenceIndex,
    limits: ThresholdLimits,
}

impl ScatterSession {
    pub fn new(table: ExpressionTable, sequences: SequenceIndex, limits: ThresholdLimits) -> Self {
        Self {
            table,
            sequences,
            limits,
        }
    }

    pub fn table(&self) -> &ExpressionTable {
        &self.table
    }

    pub fn sequences(&self) -> &SequenceIndex {
        &self.sequences
    }

    pub fn limits(&self) -> ThresholdLimits {
        self.limits
    }

    pub fn view(&self, selection: &Selection) -> Result<ScatterView, ExprScopeError> {
        selection.validate(&self.limits)?;

        let records = self
            .table
            .records(&selection.x_column, &selection.y_column, &self.sequences)?;
        let derived = derive(&records, selection.threshold, &selection.annotation);

        let x_label = selection.x_column.to_lowercase();
        let y_label = selection.y_column.to_lowercase();

        let view = ScatterView {
            title: format!("{} vs {}", x_label, y_label),
            x_label,
            y_label,
            threshold: selection.threshold,
            annotation_filter: selection.annotation.text().map(str::to_string),
            records: derived,
        };

        tracing::info!(
            "{}: {} genes, {} significant, {} highlighted",
            view.title,
            view.total(),
            view.significant_count(),
            view.highlighted_count()
        );

        Ok(view)
    }
}

use crate::expression::metrics::FoldChange;
use serde::Serialize;

/// One gene row paired on two measurement columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub annotation: String,
    pub value_a: f64,
    pub value_b: f64,
    /// Protein sequence, or the sentinel when none is known
    pub sequence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub fold_change: FoldChange,
    pub is_significant: bool,
    pub is_highlighted: bool,
}

impl DerivedRecord {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn annotation(&self) -> &str {
        &self.record.annotation
    }
}

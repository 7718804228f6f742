use crate::ExprScopeError;
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentTerm {
    pub go_id: String,
    pub term: String,
    pub annotated: Option<u32>,
    pub significant: Option<u32>,
    pub expected: Option<f64>,
    /// Cell text as written by topGO, e.g. `0.0023` or `< 1e-30`
    pub classic_fisher: String,
    pub p_value: Option<f64>,
}

impl EnrichmentTerm {
    /// Inclusive: a p-value equal to the cutoff counts.
    pub fn is_significant(&self, cutoff: f64) -> bool {
        self.p_value.is_some_and(|p| p <= cutoff)
    }
}

/// topGO writes p-values below its print limit as `< 1e-30`.
pub fn parse_p_value(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    let cell = cell.strip_prefix('<').map(str::trim_start).unwrap_or(cell);
    cell.parse::<f64>().ok().filter(|p| p.is_finite())
}

struct Columns {
    go_id: usize,
    term: usize,
    classic_fisher: usize,
    annotated: Option<usize>,
    significant: Option<usize>,
    expected: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, ExprScopeError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                ExprScopeError::Parse(format!("enrichment table has no '{}' column", name))
            })
        };

        Ok(Self {
            go_id: require("GO.ID")?,
            term: require("Term")?,
            classic_fisher: require("classicFisher")?,
            annotated: find("Annotated"),
            significant: find("Significant"),
            expected: find("Expected"),
        })
    }
}

pub fn read_terms(path: &Path) -> Result<Vec<EnrichmentTerm>, ExprScopeError> {
    let file = File::open(path)?;
    parse_terms(BufReader::new(file))
}

/// Parse a tab-separated topGO table.
///
/// R's `write.table` leaves the row-name column out of the header, so data
/// rows may be one field longer than the header. Either layout is accepted.
pub fn parse_terms<R: Read>(reader: R) -> Result<Vec<EnrichmentTerm>, ExprScopeError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::locate(&headers)?;

    let mut terms = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let shift = record.len().saturating_sub(headers.len()).min(1);
        let cell = |idx: usize| record.get(idx + shift).unwrap_or("").trim();
        let optional = |idx: Option<usize>| idx.map(cell).filter(|c| !c.is_empty());

        let classic_fisher = cell(columns.classic_fisher).to_string();
        terms.push(EnrichmentTerm {
            go_id: cell(columns.go_id).to_string(),
            term: cell(columns.term).to_string(),
            annotated: optional(columns.annotated).and_then(|c| c.parse().ok()),
            significant: optional(columns.significant).and_then(|c| c.parse().ok()),
            expected: optional(columns.expected).and_then(|c| c.parse().ok()),
            p_value: parse_p_value(&classic_fisher),
            classic_fisher,
        });
    }

    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_p_value() {
        assert_eq!(parse_p_value("0.0023"), Some(0.0023));
        assert_eq!(parse_p_value("< 1e-30"), Some(1e-30));
        assert_eq!(parse_p_value("<1e-30"), Some(1e-30));
        assert_eq!(parse_p_value(""), None);
        assert_eq!(parse_p_value("n/a"), None);
    }

    #[test]
    fn test_header_without_row_name_column() {
        let input = "GO.ID\tTerm\tclassicFisher\n1\tGO:0006412\ttranslation\t0.001\n";
        let terms = parse_terms(input.as_bytes()).unwrap();
        assert_eq!(terms[0].go_id, "GO:0006412");
        assert_eq!(terms[0].term, "translation");
        assert_eq!(terms[0].p_value, Some(0.001));
        assert_eq!(terms[0].annotated, None);
    }

    #[test]
    fn test_header_with_row_name_column() {
        let input = "\tGO.ID\tTerm\tAnnotated\tclassicFisher\n1\tGO:0006811\tion transport\t80\t0.5\n";
        let terms = parse_terms(input.as_bytes()).unwrap();
        assert_eq!(terms[0].go_id, "GO:0006811");
        assert_eq!(terms[0].annotated, Some(80));
        assert_eq!(terms[0].classic_fisher, "0.5");
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let term = EnrichmentTerm {
            go_id: "GO:1".to_string(),
            term: "t".to_string(),
            annotated: None,
            significant: None,
            expected: None,
            classic_fisher: "0.01".to_string(),
            p_value: Some(0.01),
        };
        assert!(term.is_significant(0.01));
        assert!(!term.is_significant(0.005));
    }

    #[test]
    fn test_missing_required_column() {
        let input = "GO.ID\tTerm\tweight01\n1\tGO:1\tt\t0.1\n";
        assert!(matches!(
            parse_terms(input.as_bytes()),
            Err(ExprScopeError::Parse(_))
        ));
    }
}

use crate::bio::lookup::SequenceIndex;
use crate::expression::record::Record;
use crate::ExprScopeError;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One gene row with its measurements in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionRow {
    pub id: String,
    pub annotation: String,
    pub values: Vec<f64>,
}

/// Tab-separated expression matrix.
///
/// Column 0 holds the gene identifier, column 1 the annotation; every
/// further column is one measured condition.
#[derive(Debug, Clone)]
pub struct ExpressionTable {
    id_header: String,
    annotation_header: String,
    columns: Vec<String>,
    rows: Vec<ExpressionRow>,
}

/// Cell texts read as missing values, the same set pandas treats as NA.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read a measurement cell. Missing values count as 0.0.
fn parse_measurement(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if NA_TOKENS.contains(&cell) {
        return Some(0.0);
    }
    cell.parse::<f64>()
        .ok()
        .map(|v| if v.is_nan() { 0.0 } else { v })
}

impl ExpressionTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExprScopeError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            "Loaded {} genes x {} conditions from {}",
            table.len(),
            table.columns.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ExprScopeError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.len() < 3 {
            return Err(ExprScopeError::Parse(format!(
                "Expression table needs an identifier, an annotation and at least one \
                 measurement column; found {} column(s)",
                headers.len()
            )));
        }

        let id_header = headers[0].trim().to_string();
        let annotation_header = headers[1].trim().to_string();
        let columns: Vec<String> = headers.iter().skip(2).map(|h| h.trim().to_string()).collect();

        let mut rows = Vec::new();
        let mut seen = HashSet::new();

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let id = record.get(0).unwrap_or("").trim().to_string();
            let annotation = record.get(1).unwrap_or("").trim().to_string();

            let mut values = Vec::with_capacity(columns.len());
            for (offset, column) in columns.iter().enumerate() {
                let cell = record.get(offset + 2).unwrap_or("");
                let value = parse_measurement(cell).ok_or_else(|| {
                    ExprScopeError::Parse(format!(
                        "line {}: column '{}' has non-numeric value '{}'",
                        line, column, cell
                    ))
                })?;
                values.push(value);
            }

            if !seen.insert(id.clone()) {
                tracing::warn!("line {}: duplicate gene identifier '{}'", line, id);
            }

            rows.push(ExpressionRow {
                id,
                annotation,
                values,
            });
        }

        Ok(Self {
            id_header,
            annotation_header,
            columns,
            rows,
        })
    }

    pub fn id_header(&self) -> &str {
        &self.id_header
    }

    pub fn annotation_header(&self) -> &str {
        &self.annotation_header
    }

    /// Measurement columns sorted by name, as offered for selection.
    pub fn measurement_columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    fn column_index(&self, name: &str) -> Result<usize, ExprScopeError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ExprScopeError::UnknownColumn {
                name: name.to_string(),
                available: self.measurement_columns().join(", "),
            })
    }

    pub fn column_values(&self, name: &str) -> Result<Vec<f64>, ExprScopeError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row.values[idx]).collect())
    }

    /// Pair two measurement columns into records, resolving sequences.
    pub fn records(
        &self,
        column_a: &str,
        column_b: &str,
        sequences: &SequenceIndex,
    ) -> Result<Vec<Record>, ExprScopeError> {
        let a = self.column_index(column_a)?;
        let b = self.column_index(column_b)?;

        Ok(self
            .rows
            .iter()
            .map(|row| Record {
                id: row.id.clone(),
                annotation: row.annotation.clone(),
                value_a: row.values[a],
                value_b: row.values[b],
                sequence: sequences.get_or_sentinel(&row.id).to_string(),
            })
            .collect())
    }

    pub fn rows(&self) -> &[ExpressionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TABLE: &str = "AlternateID\tAnnotation\twt_25min\twt_0min\tdhog_0min\n\
                         g1\tkinase\t4\t2\t1.5\n\
                         g2\ttransporter\t\tNA\t3\n\
                         g3\thypothetical protein\t10\n";

    #[test]
    fn test_headers_and_sorted_columns() {
        let table = ExpressionTable::from_reader(TABLE.as_bytes()).unwrap();
        assert_eq!(table.id_header(), "AlternateID");
        assert_eq!(table.annotation_header(), "Annotation");
        assert_eq!(
            table.measurement_columns(),
            vec!["dhog_0min", "wt_0min", "wt_25min"]
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_missing_cells_are_zero() {
        let table = ExpressionTable::from_reader(TABLE.as_bytes()).unwrap();
        assert_eq!(table.column_values("wt_25min").unwrap(), vec![4.0, 0.0, 10.0]);
        assert_eq!(table.column_values("wt_0min").unwrap(), vec![2.0, 0.0, 0.0]);
        assert_eq!(table.column_values("dhog_0min").unwrap(), vec![1.5, 3.0, 0.0]);
    }

    #[rstest]
    #[case("")]
    #[case("#N/A")]
    #[case("#N/A N/A")]
    #[case("#NA")]
    #[case("-1.#IND")]
    #[case("-1.#QNAN")]
    #[case("-NaN")]
    #[case("-nan")]
    #[case("1.#IND")]
    #[case("1.#QNAN")]
    #[case("<NA>")]
    #[case("N/A")]
    #[case("NA")]
    #[case("NULL")]
    #[case("NaN")]
    #[case("None")]
    #[case("n/a")]
    #[case("nan")]
    #[case("null")]
    #[case("NAN")]
    fn test_na_tokens_load_as_zero(#[case] token: &str) {
        let input = format!("id\tannotation\tc1\tc2\ng1\tx\t{}\t7\n", token);
        let table = ExpressionTable::from_reader(input.as_bytes()).unwrap();
        assert_eq!(table.column_values("c1").unwrap(), vec![0.0]);
        assert_eq!(table.column_values("c2").unwrap(), vec![7.0]);
    }

    #[test]
    fn test_unknown_column() {
        let table = ExpressionTable::from_reader(TABLE.as_bytes()).unwrap();
        match table.column_values("mut_5min") {
            Err(ExprScopeError::UnknownColumn { name, available }) => {
                assert_eq!(name, "mut_5min");
                assert!(available.contains("wt_0min"));
            }
            other => panic!("expected unknown column, got {:?}", other),
        }
    }

    #[test]
    fn test_records_resolve_sequences() {
        let table = ExpressionTable::from_reader(TABLE.as_bytes()).unwrap();
        let index = SequenceIndex::from_sequences(vec![crate::bio::Sequence::new(
            "g1".to_string(),
            b"MKV".to_vec(),
        )]);

        let records = table.records("wt_0min", "wt_25min", &index).unwrap();
        assert_eq!(records[0].value_a, 2.0);
        assert_eq!(records[0].value_b, 4.0);
        assert_eq!(records[0].sequence, "MKV");
        assert_eq!(records[1].sequence, "*");
    }

    #[test]
    fn test_non_numeric_cell_is_parse_error() {
        let input = "id\tannotation\tc1\ng1\tx\tabc\n";
        match ExpressionTable::from_reader(input.as_bytes()) {
            Err(ExprScopeError::Parse(msg)) => {
                assert!(msg.contains("c1"));
                assert!(msg.contains("abc"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_columns() {
        let input = "id\tannotation\ng1\tx\n";
        assert!(matches!(
            ExpressionTable::from_reader(input.as_bytes()),
            Err(ExprScopeError::Parse(_))
        ));
    }
}

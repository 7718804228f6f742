use crate::enrichment::EnrichmentView;
use crate::report::ScatterRow;
use crate::scatter::ScatterView;
use anyhow::Result;
use csv::WriterBuilder;

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn scatter_report(view: &ScatterView, rows: &[ScatterRow<'_>]) -> Result<String> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(Vec::new());

    writer.write_record([
        "GeneID",
        "Annotation",
        view.x_label.as_str(),
        view.y_label.as_str(),
        "fold_change",
        "significant",
        "highlighted",
        "seq",
        "paper_blast_url",
    ])?;

    for row in rows {
        let record = row.record;
        writer.write_record([
            record.id().to_string(),
            record.annotation().to_string(),
            record.record.value_a.to_string(),
            record.record.value_b.to_string(),
            record.fold_change.to_string(),
            record.is_significant.to_string(),
            record.is_highlighted.to_string(),
            record.record.sequence.clone(),
            row.paper_blast_url.clone(),
        ])?;
    }

    into_string(writer)
}

pub fn enrichment_report(view: &EnrichmentView) -> Result<String> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(Vec::new());

    writer.write_record(["GO.ID", "Term", "classicFisher", "passes_cutoff"])?;
    for term in &view.terms {
        writer.write_record([
            term.go_id.as_str(),
            term.term.as_str(),
            term.classic_fisher.as_str(),
            if term.is_significant(view.fisher_cutoff) { "true" } else { "false" },
        ])?;
    }

    into_string(writer)
}

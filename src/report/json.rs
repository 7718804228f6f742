use crate::enrichment::EnrichmentView;
use crate::report::ScatterRow;
use crate::scatter::ScatterView;
use anyhow::Result;
use serde_json::json;

pub fn scatter_report(view: &ScatterView, rows: &[ScatterRow<'_>]) -> Result<String> {
    let report = json!({
        "title": view.title,
        "x_label": view.x_label,
        "y_label": view.y_label,
        "threshold": view.threshold,
        "annotation_filter": view.annotation_filter,
        "total_genes": view.total(),
        "significant_genes": view.significant_count(),
        "highlighted_genes": view.highlighted_count(),
        "genes": rows,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn enrichment_report(view: &EnrichmentView) -> Result<String> {
    let terms: Vec<_> = view
        .terms
        .iter()
        .map(|term| {
            json!({
                "go_id": term.go_id,
                "term": term.term,
                "annotated": term.annotated,
                "significant": term.significant,
                "expected": term.expected,
                "classic_fisher": term.classic_fisher,
                "p_value": term.p_value,
                "passes_cutoff": term.is_significant(view.fisher_cutoff),
            })
        })
        .collect();

    let report = json!({
        "condition": view.condition,
        "image_path": view.image_path,
        "image_exists": view.image_exists,
        "table_path": view.table_path,
        "fisher_cutoff": view.fisher_cutoff,
        "significant_terms": view.significant_count(),
        "terms": terms,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

use crate::enrichment::EnrichmentView;
use crate::report::{ReportOptions, ScatterRow};
use crate::scatter::ScatterView;
use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color as TableColor, ContentArrangement, Table};
use std::fmt::Write;

fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(TableColor::Cyan)
}

pub fn scatter_report(view: &ScatterView, rows: &[ScatterRow<'_>], options: &ReportOptions) -> Result<String> {
    let mut output = String::new();

    writeln!(&mut output, "{}", view.title)?;
    writeln!(&mut output, "{}", "=".repeat(view.title.chars().count()))?;
    writeln!(&mut output)?;
    writeln!(&mut output, "|fold change| > {}", view.threshold)?;
    if let Some(filter) = &view.annotation_filter {
        writeln!(&mut output, "Gene annotation contains: {}", filter)?;
    }
    writeln!(&mut output)?;
    writeln!(&mut output, "- Genes:       {:6}", view.total())?;
    writeln!(&mut output, "- sig. genes:  {:6}", view.significant_count())?;
    if view.annotation_filter.is_some() {
        writeln!(&mut output, "- sel. genes:  {:6}", view.highlighted_count())?;
    }
    writeln!(&mut output)?;

    if rows.is_empty() {
        writeln!(&mut output, "No genes match the current selection.")?;
        return Ok(output);
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("GeneID"),
        header_cell("Annotation"),
        header_cell(&format!("FPKM ({})", view.x_label)),
        header_cell(&format!("FPKM ({})", view.y_label)),
        header_cell("fold change"),
        header_cell("sig."),
        header_cell("sel."),
    ]);

    for row in rows {
        let record = row.record;
        let mut id_cell = Cell::new(record.id());
        if record.is_significant {
            id_cell = id_cell.fg(TableColor::Red);
        }
        if record.is_highlighted {
            id_cell = id_cell.add_attribute(Attribute::Bold).fg(TableColor::Yellow);
        }

        table.add_row(vec![
            id_cell,
            Cell::new(record.annotation()),
            Cell::new(record.record.value_a),
            Cell::new(record.record.value_b),
            Cell::new(format!("{:.3}", record.fold_change)),
            Cell::new(if record.is_significant { "yes" } else { "" }),
            Cell::new(if record.is_highlighted { "yes" } else { "" }),
        ]);
    }

    writeln!(&mut output, "{}", table)?;

    let filtered = options.significant_only || options.highlighted_only;
    if let Some(limit) = options.limit {
        if rows.len() == limit && !filtered && view.total() > limit {
            writeln!(&mut output, "  ... and {} more", view.total() - limit)?;
        }
    }

    Ok(output)
}

pub fn enrichment_report(view: &EnrichmentView, options: &ReportOptions) -> Result<String> {
    let mut output = String::new();

    writeln!(&mut output, "TopGO results - significant BP processes ({})", view.condition)?;
    writeln!(&mut output, "===========================================")?;
    writeln!(&mut output)?;
    let image_state = if view.image_exists { "" } else { " (missing)" };
    writeln!(&mut output, "Treemap: {}{}", view.image_path.display(), image_state)?;
    writeln!(&mut output, "Table:   {}", view.table_path.display())?;
    writeln!(
        &mut output,
        "Terms:   {} ({} with classicFisher <= {})",
        view.terms.len(),
        view.significant_count(),
        view.fisher_cutoff
    )?;
    writeln!(&mut output)?;

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("GO.ID"),
        header_cell("Term"),
        header_cell("classicFisher"),
    ]);

    let limit = options.limit.unwrap_or(usize::MAX);
    for term in view.terms.iter().take(limit) {
        let fisher = Cell::new(&term.classic_fisher);
        let fisher = if term.is_significant(view.fisher_cutoff) {
            fisher.fg(TableColor::White).bg(TableColor::Green)
        } else {
            fisher.fg(TableColor::White).bg(TableColor::Grey)
        };
        table.add_row(vec![Cell::new(&term.go_id), Cell::new(&term.term), fisher]);
    }

    writeln!(&mut output, "{}", table)?;
    if view.terms.len() > limit {
        writeln!(&mut output, "  ... and {} more", view.terms.len() - limit)?;
    }

    Ok(output)
}

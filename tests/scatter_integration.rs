/// End-to-end checks of the scatter view: files on disk, one session,
/// several selections.
mod common;

use exprscope::bio::SequenceIndex;
use exprscope::expression::ExpressionTable;
use exprscope::scatter::{paper_blast_url, ThresholdLimits};
use exprscope::{ExprScopeError, FoldChange, ScatterSession, Selection};
use pretty_assertions::assert_eq;

fn load_session(data: &common::TestData) -> ScatterSession {
    let table = ExpressionTable::from_path(&data.data).unwrap();
    let sequences = SequenceIndex::from_fasta(&data.fasta).unwrap();
    ScatterSession::new(table, sequences, ThresholdLimits::default())
}

#[test]
fn test_measurement_columns_are_sorted() {
    let data = common::setup();
    let table = ExpressionTable::from_path(&data.data).unwrap();
    assert_eq!(
        table.measurement_columns(),
        vec!["dhog_0min", "wt_0min", "wt_25min"]
    );
}

#[test]
fn test_default_selection_view() {
    let data = common::setup();
    let session = load_session(&data);

    let view = session
        .view(&Selection::new("wt_0min", "wt_25min", 2.0))
        .unwrap();

    assert_eq!(view.title, "wt_0min vs wt_25min");
    assert_eq!(view.total(), 6);

    let significant: Vec<&str> = view.significant().map(|r| r.id()).collect();
    assert_eq!(significant, vec!["g_up", "g_rise"]);

    let fold_changes: Vec<FoldChange> = view.records.iter().map(|r| r.fold_change).collect();
    assert_eq!(
        fold_changes,
        vec![
            FoldChange::Value(-4.0),
            FoldChange::Value(1.0),
            FoldChange::Value(4.0),
            FoldChange::Value(4.0),
            FoldChange::Undefined,
            FoldChange::Undefined,
        ]
    );
}

#[test]
fn test_sequences_and_sentinel() {
    let data = common::setup();
    let session = load_session(&data);
    let view = session
        .view(&Selection::new("wt_0min", "wt_25min", 2.0))
        .unwrap();

    assert_eq!(view.records[0].record.sequence, "MKVLAAGIVGLLAAQ");
    assert_eq!(view.records[1].record.sequence, "*");
    assert_eq!(
        paper_blast_url(&view.records[1].record.sequence),
        "http://papers.genomics.lbl.gov/cgi-bin/litSearch.cgi?query=*&Search=Search"
    );
}

#[test]
fn test_swapping_axes_flips_sign() {
    let data = common::setup();
    let session = load_session(&data);

    let forward = session
        .view(&Selection::new("wt_0min", "wt_25min", 2.0))
        .unwrap();
    let reverse = session
        .view(&Selection::new("wt_25min", "wt_0min", 2.0))
        .unwrap();

    assert_eq!(forward.records[0].fold_change, FoldChange::Value(-4.0));
    assert_eq!(reverse.records[0].fold_change, FoldChange::Value(4.0));
    // g_up: 2 vs 8 passes only through the second clause once swapped, sum 10 is not > 10
    assert!(!reverse.records[0].is_significant);
}

#[test]
fn test_annotation_filter_highlights_case_insensitively() {
    let data = common::setup();
    let session = load_session(&data);

    let view = session
        .view(&Selection::new("wt_0min", "wt_25min", 2.0).with_annotation("kinase"))
        .unwrap();
    let highlighted: Vec<&str> = view.highlighted().map(|r| r.id()).collect();
    assert_eq!(highlighted, vec!["g_up", "g_off"]);

    let view = session
        .view(&Selection::new("wt_0min", "wt_25min", 2.0).with_annotation(""))
        .unwrap();
    assert_eq!(view.highlighted_count(), 0);
}

#[test]
fn test_each_view_is_fresh() {
    let data = common::setup();
    let session = load_session(&data);

    let first = session
        .view(&Selection::new("wt_0min", "wt_25min", 0.0).with_annotation("protein"))
        .unwrap();
    let second = session
        .view(&Selection::new("wt_0min", "wt_25min", 5.0))
        .unwrap();

    assert_eq!(first.significant_count(), 4);
    assert_eq!(first.highlighted_count(), 2);
    assert_eq!(second.significant_count(), 0);
    assert_eq!(second.highlighted_count(), 0);
    // The earlier view is untouched by the later derivation
    assert_eq!(first.significant_count(), 4);
}

#[test]
fn test_unknown_column_is_reported() {
    let data = common::setup();
    let session = load_session(&data);

    match session.view(&Selection::new("wt_0min", "mut_5min", 2.0)) {
        Err(ExprScopeError::UnknownColumn { name, .. }) => assert_eq!(name, "mut_5min"),
        other => panic!("expected unknown column error, got {:?}", other.map(|v| v.title)),
    }
}

#[test]
fn test_custom_threshold_limits() {
    let data = common::setup();
    let table = ExpressionTable::from_path(&data.data).unwrap();
    let session = ScatterSession::new(
        table,
        SequenceIndex::empty(),
        ThresholdLimits { min: 1.0, max: 3.0 },
    );

    assert!(session.view(&Selection::new("wt_0min", "wt_25min", 3.0)).is_ok());
    assert!(matches!(
        session.view(&Selection::new("wt_0min", "wt_25min", 0.5)),
        Err(ExprScopeError::Config(_))
    ));
}

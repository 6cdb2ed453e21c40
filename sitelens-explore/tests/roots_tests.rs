// Tests for root candidate listing

use sitelens_core::build::build;
use sitelens_core::model::{Entry, NodeKind, SiteGraph};
use sitelens_explore::root_candidates;

// ============================================================================
// Root Candidate Tests
// ============================================================================

#[test]
fn test_candidates_are_site_sections() {
    let graph = build(&[
        Entry::new("https://ex.com/docs/intro/"),
        Entry::new("https://ex.com/blog/a/"),
    ]);

    let candidates = root_candidates(&graph);
    let labels: Vec<&str> = candidates.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["blog", "docs"]);
}

#[test]
fn test_candidates_sorted_by_label() {
    let graph = build(&[
        Entry::new("https://ex.com/zeta/a/"),
        Entry::new("https://ex.com/alpha/b/"),
        Entry::new("https://ex.com/mid/c/"),
    ]);

    let labels: Vec<String> = root_candidates(&graph)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_candidates_exclude_grouping_sections() {
    let graph = build(&[Entry::new("https://ex.com/blog/a/")]);

    let candidates = root_candidates(&graph);
    assert_eq!(candidates.len(), 1);
    let candidate = graph.node(&candidates[0].id).unwrap();
    assert_eq!(candidate.kind, NodeKind::Section);
    assert!(!candidate.grouping);
}

#[test]
fn test_candidates_unique_per_section() {
    let graph = build(&[
        Entry::new("https://ex.com/blog/a/"),
        Entry::new("https://ex.com/blog/b/"),
    ]);
    assert_eq!(root_candidates(&graph).len(), 1);
}

#[test]
fn test_no_site_node_yields_no_candidates() {
    let graph = SiteGraph::default();
    assert!(root_candidates(&graph).is_empty());
}

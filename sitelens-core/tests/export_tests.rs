// Tests for graph document export, import and validation

use sitelens_core::build::build;
use sitelens_core::error::GraphError;
use sitelens_core::export::{self, GraphDocument};
use sitelens_core::model::{Edge, EdgeKind, Entry, Node, NodeKind, SiteGraph};
use tempfile::tempdir;

fn node(id: &str, kind: NodeKind) -> Node {
    Node {
        id: id.to_string(),
        label: id.to_string(),
        kind,
        grouping: false,
        url: None,
        image_url: None,
        section: None,
        category: None,
        date: None,
    }
}

fn edge(id: &str, source: &str, target: &str, kind: EdgeKind) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        kind,
    }
}

fn sample_graph() -> SiteGraph {
    build(&[
        Entry::with_images(
            "https://ex.com/blog/2024/01/a/",
            vec!["https://cdn.ex.com/1.jpg".to_string()],
        ),
        Entry::new("https://ex.com/docs/category/rust/intro/"),
    ])
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

#[test]
fn test_json_round_trip_identity() {
    let graph = sample_graph();
    let json = export::to_json(&graph).unwrap();
    let restored = export::from_json(&json).unwrap();
    assert_eq!(graph, restored);
}

#[test]
fn test_file_round_trip_identity() {
    let graph = sample_graph();
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");

    export::write_document(&graph, &path).unwrap();
    let restored = export::read_document(&path).unwrap();
    assert_eq!(graph, restored);
}

#[test]
fn test_document_metadata() {
    let graph = sample_graph();
    let json = export::to_json(&graph).unwrap();

    let doc: GraphDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.generator, "sitelens");
    assert_eq!(doc.version, env!("CARGO_PKG_VERSION"));
    assert!(!doc.generated_at.is_empty());
}

#[test]
fn test_missing_optional_node_fields_default() {
    // Hand-written documents may omit grouping and the optional facets
    let json = r#"{
        "generator": "sitelens",
        "version": "0.0.0",
        "generated_at": "2024-01-01T00:00:00Z",
        "graph": {
            "nodes": [{"id": "site-x", "label": "ex.com", "kind": "site"}],
            "edges": []
        }
    }"#;
    let graph = export::from_json(json).unwrap();
    assert!(!graph.nodes[0].grouping);
    assert_eq!(graph.nodes[0].url, None);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_validate_accepts_built_graph() {
    export::validate(&sample_graph()).unwrap();
}

#[test]
fn test_validate_rejects_duplicate_node_id() {
    let graph = SiteGraph {
        nodes: vec![node("site-x", NodeKind::Site), node("site-x", NodeKind::Page)],
        edges: vec![],
    };
    assert!(matches!(
        export::validate(&graph),
        Err(GraphError::DuplicateNodeId(id)) if id == "site-x"
    ));
}

#[test]
fn test_validate_rejects_duplicate_edge_id() {
    let graph = SiteGraph {
        nodes: vec![node("site-x", NodeKind::Site), node("page-a", NodeKind::Page)],
        edges: vec![
            edge("e-pg-1", "site-x", "page-a", EdgeKind::Page),
            edge("e-pg-1", "page-a", "site-x", EdgeKind::Page),
        ],
    };
    assert!(matches!(
        export::validate(&graph),
        Err(GraphError::DuplicateEdgeId(id)) if id == "e-pg-1"
    ));
}

#[test]
fn test_validate_rejects_duplicate_edge_triple() {
    let graph = SiteGraph {
        nodes: vec![node("site-x", NodeKind::Site), node("page-a", NodeKind::Page)],
        edges: vec![
            edge("e-pg-1", "site-x", "page-a", EdgeKind::Page),
            edge("e-pg-2", "site-x", "page-a", EdgeKind::Page),
        ],
    };
    let err = export::validate(&graph).unwrap_err();
    assert!(matches!(
        &err,
        GraphError::DuplicateEdgeTriple { kind, source_id, target_id }
            if kind == "page" && source_id == "site-x" && target_id == "page-a"
    ));
    assert_eq!(
        err.to_string(),
        "duplicate edge triple: page site-x -> page-a"
    );
}

#[test]
fn test_validate_allows_same_endpoints_different_kind() {
    let graph = SiteGraph {
        nodes: vec![node("site-x", NodeKind::Site), node("page-a", NodeKind::Page)],
        edges: vec![
            edge("e-pg-1", "site-x", "page-a", EdgeKind::Page),
            edge("e-rel-1", "site-x", "page-a", EdgeKind::Related),
        ],
    };
    export::validate(&graph).unwrap();
}

#[test]
fn test_validate_rejects_missing_endpoint() {
    let graph = SiteGraph {
        nodes: vec![node("site-x", NodeKind::Site)],
        edges: vec![edge("e-pg-1", "site-x", "page-gone", EdgeKind::Page)],
    };
    assert!(matches!(
        export::validate(&graph),
        Err(GraphError::MissingEndpoint { node, .. }) if node == "page-gone"
    ));
}

#[test]
fn test_validate_rejects_missing_site_node() {
    let graph = SiteGraph {
        nodes: vec![node("page-a", NodeKind::Page)],
        edges: vec![],
    };
    assert!(matches!(
        export::validate(&graph),
        Err(GraphError::MissingSiteNode)
    ));
}

#[test]
fn test_validate_rejects_multiple_site_nodes() {
    let graph = SiteGraph {
        nodes: vec![node("site-x", NodeKind::Site), node("site-y", NodeKind::Site)],
        edges: vec![],
    };
    assert!(matches!(
        export::validate(&graph),
        Err(GraphError::MultipleSiteNodes(2))
    ));
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(export::from_json("{ not json").is_err());
}

#[test]
fn test_from_json_validates_content() {
    // Well-formed JSON that fails the structural checks must be rejected
    let json = r#"{
        "generator": "sitelens",
        "version": "0.0.0",
        "generated_at": "2024-01-01T00:00:00Z",
        "graph": {"nodes": [], "edges": []}
    }"#;
    assert!(matches!(
        export::from_json(json),
        Err(GraphError::MissingSiteNode)
    ));
}

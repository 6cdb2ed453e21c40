//! Graph export/import as a JSON document. The builder can never
//! produce a structurally broken graph, but an imported document may
//! have been edited by hand, so the import path validates and rejects
//! rather than letting broken references crash traversal downstream.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::model::{NodeKind, SiteGraph};

/// Serialized wrapper around a [`SiteGraph`], with generator metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub generator: String,
    pub version: String,
    pub generated_at: String,
    pub graph: SiteGraph,
}

impl GraphDocument {
    pub fn new(graph: SiteGraph) -> Self {
        Self {
            generator: "sitelens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            graph,
        }
    }
}

/// Serialize a graph to a pretty-printed JSON document.
pub fn to_json(graph: &SiteGraph) -> Result<String> {
    let doc = GraphDocument::new(graph.clone());
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse and validate a JSON graph document.
pub fn from_json(json: &str) -> Result<SiteGraph> {
    let doc: GraphDocument = serde_json::from_str(json)?;
    validate(&doc.graph)?;
    Ok(doc.graph)
}

/// Write a graph document to disk.
pub fn write_document(graph: &SiteGraph, path: &Path) -> Result<()> {
    let json = to_json(graph)?;
    fs::write(path, json)?;
    debug!("wrote graph document to {}", path.display());
    Ok(())
}

/// Read and validate a graph document from disk.
pub fn read_document(path: &Path) -> Result<SiteGraph> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

/// Structural integrity checks: unique node ids, unique edge ids and
/// `(kind, source, target)` triples, both endpoints of every edge
/// present, and exactly one site node.
pub fn validate(graph: &SiteGraph) -> Result<()> {
    let mut node_ids = HashSet::new();
    for node in &graph.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(GraphError::DuplicateNodeId(node.id.clone()));
        }
    }

    let mut edge_ids = HashSet::new();
    let mut triples = HashSet::new();
    for edge in &graph.edges {
        if !edge_ids.insert(edge.id.as_str()) {
            return Err(GraphError::DuplicateEdgeId(edge.id.clone()));
        }
        if !triples.insert((edge.kind, edge.source.as_str(), edge.target.as_str())) {
            return Err(GraphError::DuplicateEdgeTriple {
                kind: edge.kind.as_str().to_string(),
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
            });
        }
        for endpoint in [&edge.source, &edge.target] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(GraphError::MissingEndpoint {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
    }

    let site_count = graph
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Site)
        .count();
    match site_count {
        0 => Err(GraphError::MissingSiteNode),
        1 => Ok(()),
        n => Err(GraphError::MultipleSiteNodes(n)),
    }
}

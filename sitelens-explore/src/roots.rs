//! Legal root candidates for a selector UI: the non-scaffolding
//! sections directly under the site node, sorted by label.

use serde::Serialize;
use sitelens_core::model::{NodeKind, SiteGraph};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootCandidate {
    pub id: String,
    pub label: String,
}

pub fn root_candidates(graph: &SiteGraph) -> Vec<RootCandidate> {
    let Some(site) = graph.site_node() else {
        return Vec::new();
    };

    let mut candidates: Vec<RootCandidate> = graph
        .edges
        .iter()
        .filter(|e| e.source == site.id)
        .filter_map(|e| graph.node(&e.target))
        .filter(|n| n.kind == NodeKind::Section && !n.grouping)
        .map(|n| RootCandidate {
            id: n.id.clone(),
            label: n.label.clone(),
        })
        .collect();

    candidates.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.id.cmp(&b.id)));
    candidates.dedup();
    candidates
}

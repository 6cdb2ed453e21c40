//! Undirected adjacency index over an immutable [`SiteGraph`]. Built
//! once per graph; every extraction walks it read-only.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use sitelens_core::model::{Node, SiteGraph};

use crate::error::{ExploreError, Result};

pub struct GraphIndex<'g> {
    graph: &'g SiteGraph,
    /// Node weights are positions into `graph.nodes`; edge weights are
    /// positions into `graph.edges`.
    adjacency: UnGraph<usize, usize>,
    by_id: HashMap<&'g str, NodeIndex>,
}

impl<'g> GraphIndex<'g> {
    /// Index a graph. Fails on duplicate node ids or edges whose
    /// endpoints are missing, which can only come from imported or
    /// hand-edited documents.
    pub fn new(graph: &'g SiteGraph) -> Result<Self> {
        let mut adjacency = UnGraph::new_undirected();
        let mut by_id = HashMap::with_capacity(graph.nodes.len());

        for (pos, node) in graph.nodes.iter().enumerate() {
            let idx = adjacency.add_node(pos);
            if by_id.insert(node.id.as_str(), idx).is_some() {
                return Err(ExploreError::DuplicateNode(node.id.clone()));
            }
        }

        for (pos, edge) in graph.edges.iter().enumerate() {
            let source = *by_id.get(edge.source.as_str()).ok_or_else(|| {
                ExploreError::BrokenEdge {
                    edge: edge.id.clone(),
                    node: edge.source.clone(),
                }
            })?;
            let target = *by_id.get(edge.target.as_str()).ok_or_else(|| {
                ExploreError::BrokenEdge {
                    edge: edge.id.clone(),
                    node: edge.target.clone(),
                }
            })?;
            adjacency.add_edge(source, target, pos);
        }

        Ok(Self {
            graph,
            adjacency,
            by_id,
        })
    }

    pub fn graph(&self) -> &'g SiteGraph {
        self.graph
    }

    pub fn resolve(&self, id: &str) -> Option<NodeIndex> {
        self.by_id.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &'g Node {
        &self.graph.nodes[self.adjacency[idx]]
    }

    /// All adjacent nodes, ignoring edge direction.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.adjacency.neighbors(idx)
    }
}

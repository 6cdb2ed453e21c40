//! Display policy: turn an extraction into per-element visual state
//! for a renderer. Distance from the focus point is made legible by a
//! geometric size decay per hop rather than numeric depth labels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sitelens_core::model::SiteGraph;

use crate::extract::Extraction;

/// What happens to elements outside the extracted neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Outside elements are hidden entirely.
    HideOutside,
    /// Outside elements stay visible but dimmed, preserving global
    /// context around the focused neighborhood.
    DimOutside,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::HideOutside => "hide-outside",
            DisplayMode::DimOutside => "dim-outside",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hide-outside" | "hide" => Some(DisplayMode::HideOutside),
            "dim-outside" | "dim" => Some(DisplayMode::DimOutside),
            _ => None,
        }
    }
}

/// Visual scale parameters. Sizes decay geometrically with BFS depth
/// and are floored at `min_size`; nodes outside the neighborhood get
/// the fixed `background_size`.
#[derive(Debug, Clone)]
pub struct ScaleOptions {
    pub base_size: f32,
    pub label_base: f32,
    pub decay: f32,
    pub min_size: f32,
    pub background_size: f32,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            base_size: 40.0,
            label_base: 14.0,
            decay: 0.62,
            min_size: 8.0,
            background_size: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub visible: bool,
    pub dimmed: bool,
    pub size: f32,
    pub label_size: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub visible: bool,
    pub dimmed: bool,
}

/// Per-element visual state for one exploration, keyed by id. Every
/// node and edge of the graph has an entry, so a renderer can apply
/// the view without special-casing absences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationView {
    pub root: String,
    pub max_depth: usize,
    pub mode: DisplayMode,
    pub nodes: BTreeMap<String, NodeView>,
    pub edges: BTreeMap<String, EdgeView>,
}

/// Mark every element shown / dimmed / hidden and assign scales. The
/// root is always rendered at the base size regardless of computed
/// depth.
pub fn apply_policy(
    graph: &SiteGraph,
    extraction: &Extraction,
    max_depth: usize,
    mode: DisplayMode,
    scale: &ScaleOptions,
) -> ExplorationView {
    let mut nodes = BTreeMap::new();
    for node in &graph.nodes {
        let view = if let Some(&hops) = extraction.depth.get(&node.id) {
            let (size, label_size) = if node.id == extraction.root {
                (scale.base_size, scale.label_base)
            } else {
                (
                    decayed(scale.base_size, scale.decay, hops, scale.min_size),
                    decayed(scale.label_base, scale.decay, hops, scale.min_size),
                )
            };
            NodeView {
                visible: true,
                dimmed: false,
                size,
                label_size,
                depth: Some(hops),
            }
        } else {
            NodeView {
                visible: mode == DisplayMode::DimOutside,
                dimmed: mode == DisplayMode::DimOutside,
                size: scale.background_size,
                label_size: scale.background_size,
                depth: None,
            }
        };
        nodes.insert(node.id.clone(), view);
    }

    let mut edges = BTreeMap::new();
    for edge in &graph.edges {
        let in_view =
            extraction.keep.contains(&edge.source) && extraction.keep.contains(&edge.target);
        let view = if in_view {
            EdgeView {
                visible: true,
                dimmed: false,
            }
        } else {
            EdgeView {
                visible: mode == DisplayMode::DimOutside,
                dimmed: mode == DisplayMode::DimOutside,
            }
        };
        edges.insert(edge.id.clone(), view);
    }

    ExplorationView {
        root: extraction.root.clone(),
        max_depth,
        mode,
        nodes,
        edges,
    }
}

fn decayed(base: f32, decay: f32, hops: usize, min: f32) -> f32 {
    (base * decay.powi(hops as i32)).max(min)
}

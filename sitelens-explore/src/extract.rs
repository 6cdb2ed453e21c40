//! Bounded-depth neighborhood extraction: a breadth-first walk over
//! the undirected view of the graph, pruning classification
//! scaffolding and section boundaries as it expands.

use std::collections::{HashMap, HashSet, VecDeque};

use sitelens_core::model::NodeKind;
use tracing::{debug, warn};

use crate::error::{ExploreError, Result};
use crate::index::GraphIndex;
use crate::policy::{DisplayMode, ExplorationView, ScaleOptions, apply_policy};

/// Allowed depth range for exploration requests. Depth is a UI
/// convenience, so out-of-range values are clamped, not rejected.
pub const MIN_DEPTH: usize = 1;
pub const MAX_DEPTH: usize = 10;

/// One user interaction: drill into `root_id`, view `max_depth` hops,
/// render outside elements per `mode`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreRequest {
    pub root_id: String,
    pub max_depth: usize,
    pub mode: DisplayMode,
}

/// Result of a BFS pass: which nodes are in view and how far from the
/// root each one sits.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub root: String,
    pub keep: HashSet<String>,
    pub depth: HashMap<String, usize>,
}

/// BFS from `root_id` up to `max_depth` hops, edges traversed in
/// either direction. Pruning rules, evaluated on each neighbor
/// candidate before admission:
///
/// - grouping scaffolding is never admitted and never expanded
///   through, whether flagged explicitly or grouping by kind
/// - a section root never walks its edge back up to the site node
/// - from a section or path-segment, a section neighbor is never
///   followed (no leaking into siblings; the root itself is already
///   visited, so this only ever blocks other sections)
///
/// Fails closed on an unknown root: no partial extraction.
pub fn extract(index: &GraphIndex, root_id: &str, max_depth: usize) -> Result<Extraction> {
    let root_idx = index
        .resolve(root_id)
        .ok_or_else(|| ExploreError::UnknownRoot(root_id.to_string()))?;
    let root = index.node(root_idx);
    let root_is_section = root.kind == NodeKind::Section;

    let mut keep = HashSet::new();
    let mut depth = HashMap::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    keep.insert(root.id.clone());
    depth.insert(root.id.clone(), 0);
    visited.insert(root_idx);
    queue.push_back((root_idx, 0usize));

    while let Some((idx, hops)) = queue.pop_front() {
        if hops >= max_depth {
            continue;
        }
        let from = index.node(idx);
        for neighbor_idx in index.neighbors(idx) {
            if visited.contains(&neighbor_idx) {
                continue;
            }
            let candidate = index.node(neighbor_idx);

            // The flag covers grouping-flavored section nodes; the
            // kind check covers always-scaffolding kinds even when an
            // imported document omits the flag.
            if candidate.grouping || candidate.kind.is_grouping() {
                continue;
            }
            if root_is_section && candidate.kind == NodeKind::Site {
                continue;
            }
            if matches!(from.kind, NodeKind::Section | NodeKind::PathSegment)
                && candidate.kind == NodeKind::Section
            {
                continue;
            }

            visited.insert(neighbor_idx);
            keep.insert(candidate.id.clone());
            depth.insert(candidate.id.clone(), hops + 1);
            queue.push_back((neighbor_idx, hops + 1));
        }
    }

    debug!(
        "extracted {} nodes within {} hops of {}",
        keep.len(),
        max_depth,
        root_id
    );

    Ok(Extraction {
        root: root.id.clone(),
        keep,
        depth,
    })
}

/// Serve one exploration request: clamp the depth, extract, apply the
/// display policy. The view reports the effective (clamped) depth.
pub fn explore(
    index: &GraphIndex,
    request: &ExploreRequest,
    scale: &ScaleOptions,
) -> Result<ExplorationView> {
    let effective_depth = request.max_depth.clamp(MIN_DEPTH, MAX_DEPTH);
    if effective_depth != request.max_depth {
        warn!(
            "requested depth {} clamped to {}",
            request.max_depth, effective_depth
        );
    }
    let extraction = extract(index, &request.root_id, effective_depth)?;
    Ok(apply_policy(
        index.graph(),
        &extraction,
        effective_depth,
        request.mode,
        scale,
    ))
}

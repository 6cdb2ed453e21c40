//! One-shot graph construction. A [`GraphBuilder`] owns every lookup
//! table it needs for a single build (path-prefix memo, dimension-group
//! memo, edge dedup set) and is consumed by [`GraphBuilder::build`], so
//! no state survives between builds.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, info};

use crate::classify;
use crate::ident::{edge_id, node_id};
use crate::model::{Edge, EdgeKind, Entry, Node, NodeKind, SiteGraph};

/// Options for configuring a build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Image nodes emitted per page; further associated images are
    /// ignored.
    pub max_images_per_page: usize,
    /// Cap on cross-link `related` edges per page. Dimension groups are
    /// visited in key order and members in id order, so which relations
    /// win the cap is deterministic: earlier groups claim the budget
    /// first.
    pub max_related_per_page: usize,
    /// Run the cross-linking pass over dimension groups.
    pub cross_link: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_images_per_page: 4,
            max_related_per_page: 3,
            cross_link: true,
        }
    }
}

/// Builds a [`SiteGraph`] from a batch of entries. Create one per
/// build; all memo tables die with it.
pub struct GraphBuilder {
    options: BuildOptions,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<String, usize>,
    edge_ids: HashSet<String>,
    /// Group key -> member page ids, in key order for the cross-link
    /// pass.
    group_members: BTreeMap<String, Vec<String>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: HashMap::new(),
            edge_ids: HashSet::new(),
            group_members: BTreeMap::new(),
        }
    }

    pub fn with_max_images_per_page(mut self, max: usize) -> Self {
        self.options.max_images_per_page = max;
        self
    }

    pub fn with_max_related_per_page(mut self, max: usize) -> Self {
        self.options.max_related_per_page = max;
        self
    }

    pub fn with_cross_link(mut self, cross_link: bool) -> Self {
        self.options.cross_link = cross_link;
        self
    }

    /// Build the full graph. Entries with duplicate canonical URLs are
    /// dropped (first occurrence wins); entries with unparseable URLs
    /// are kept under the `"(root)"` section with degraded attributes.
    pub fn build(mut self, entries: &[Entry]) -> SiteGraph {
        let mut seen = HashSet::new();
        let deduped: Vec<&Entry> = entries
            .iter()
            .filter(|e| seen.insert(e.url.as_str()))
            .collect();
        if deduped.len() < entries.len() {
            debug!(
                "deduplicated {} entries down to {}",
                entries.len(),
                deduped.len()
            );
        }

        let site_label = deduped
            .iter()
            .find_map(|e| classify::url_host(&e.url))
            .unwrap_or_else(|| "site".to_string());
        let site_id = self.ensure_node(NodeKind::Site, "site", |id| Node {
            id,
            label: site_label,
            kind: NodeKind::Site,
            grouping: false,
            url: None,
            image_url: None,
            section: None,
            category: None,
            date: None,
        });

        for entry in &deduped {
            self.add_entry(&site_id, entry);
        }

        if self.options.cross_link {
            self.cross_link_groups();
        }

        info!(
            "built graph: {} entries -> {} nodes, {} edges",
            deduped.len(),
            self.nodes.len(),
            self.edges.len()
        );

        SiteGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn add_entry(&mut self, site_id: &str, entry: &Entry) {
        let facets = classify::classify(&entry.url);
        debug!("entry {} -> section {}", entry.url, facets.section);

        let section = facets.section.clone();
        let section_id = self.ensure_node(NodeKind::Section, &section, |id| Node {
            id,
            label: section.clone(),
            kind: NodeKind::Section,
            grouping: false,
            url: None,
            image_url: None,
            section: Some(section.clone()),
            category: None,
            date: None,
        });
        self.add_edge(EdgeKind::Contains, site_id, &section_id);

        // Chain the remaining segments under the section; siblings that
        // share a prefix share the node.
        let mut parent_id = section_id;
        let mut prefix = facets.section.clone();
        for segment in facets.segments.iter().skip(1) {
            prefix = format!("{}/{}", prefix, segment);
            let section = facets.section.clone();
            let label = segment.clone();
            let segment_id = self.ensure_node(NodeKind::PathSegment, &prefix, |id| Node {
                id,
                label,
                kind: NodeKind::PathSegment,
                grouping: false,
                url: None,
                image_url: None,
                section: Some(section),
                category: None,
                date: None,
            });
            self.add_edge(EdgeKind::Contains, &parent_id, &segment_id);
            parent_id = segment_id;
        }

        let page_id = self.ensure_node(NodeKind::Page, &entry.url, |id| Node {
            id,
            label: facets.title.clone(),
            kind: NodeKind::Page,
            grouping: false,
            url: Some(entry.url.clone()),
            image_url: entry.images.first().cloned(),
            section: Some(facets.section.clone()),
            category: facets.category.clone(),
            date: facets.year_month.clone(),
        });
        self.add_edge(EdgeKind::Page, &parent_id, &page_id);

        self.join_group(
            NodeKind::Section,
            &format!("type:{}", facets.section),
            &facets.section,
            &page_id,
        );
        if let Some(cat) = &facets.category {
            self.join_group(NodeKind::Category, &format!("category:{}", cat), cat, &page_id);
        }
        if let Some(ym) = &facets.year_month {
            self.join_group(NodeKind::Date, &format!("date:{}", ym), ym, &page_id);
        }

        self.add_images(entry, &page_id);
    }

    fn add_images(&mut self, entry: &Entry, page_id: &str) {
        let page_host = classify::url_host(&entry.url);
        for image_url in entry.images.iter().take(self.options.max_images_per_page) {
            let label = image_label(image_url);
            let image_id = self.ensure_node(NodeKind::Image, image_url, |id| Node {
                id,
                label,
                kind: NodeKind::Image,
                grouping: false,
                url: None,
                image_url: Some(image_url.clone()),
                section: None,
                category: None,
                date: None,
            });
            self.add_edge(EdgeKind::Asset, page_id, &image_id);

            // A distinct external host links the page (not the image)
            // into the asset-host dimension: pages sharing a CDN, not
            // images sharing a CDN.
            if let Some(host) = classify::url_host(image_url)
                && page_host.as_deref() != Some(host.as_str())
            {
                let host_gid =
                    self.ensure_group(NodeKind::AssetHost, &format!("host:{}", host), &host);
                if self.add_edge(EdgeKind::Related, &host_gid, page_id) {
                    self.record_membership(&format!("host:{}", host), page_id);
                }
            }
        }
    }

    /// Lazily create a dimension-group node and link the page into it.
    /// Idempotent: a second page with the same key reuses the node.
    fn join_group(&mut self, kind: NodeKind, key: &str, label: &str, page_id: &str) {
        let group_id = self.ensure_group(kind, key, label);
        if self.add_edge(EdgeKind::Member, &group_id, page_id) {
            self.record_membership(key, page_id);
        }
    }

    fn ensure_group(&mut self, kind: NodeKind, key: &str, label: &str) -> String {
        let label = label.to_string();
        self.ensure_node(kind, key, |id| Node {
            id,
            label,
            kind,
            grouping: true,
            url: None,
            image_url: None,
            section: None,
            category: None,
            date: None,
        })
    }

    fn record_membership(&mut self, group_key: &str, page_id: &str) {
        self.group_members
            .entry(group_key.to_string())
            .or_default()
            .push(page_id.to_string());
    }

    /// Add `related` edges between consecutive pages (sorted by id) of
    /// each dimension group with at least two members, capped per page.
    fn cross_link_groups(&mut self) {
        let cap = self.options.max_related_per_page;
        let mut related_count: HashMap<String, usize> = HashMap::new();
        let groups = std::mem::take(&mut self.group_members);

        for (key, mut members) in groups {
            if members.len() < 2 {
                continue;
            }
            members.sort();
            debug!("cross-linking group {} ({} members)", key, members.len());
            for i in 0..members.len() - 1 {
                let a = members[i].clone();
                let b = members[i + 1].clone();
                if related_count.get(&a).copied().unwrap_or(0) >= cap
                    || related_count.get(&b).copied().unwrap_or(0) >= cap
                {
                    continue;
                }
                if self.add_edge(EdgeKind::Related, &a, &b) {
                    *related_count.entry(a).or_insert(0) += 1;
                    *related_count.entry(b).or_insert(0) += 1;
                }
            }
        }
    }

    fn ensure_node(
        &mut self,
        kind: NodeKind,
        key: &str,
        make: impl FnOnce(String) -> Node,
    ) -> String {
        let id = node_id(kind, key);
        if !self.node_index.contains_key(&id) {
            self.node_index.insert(id.clone(), self.nodes.len());
            self.nodes.push(make(id.clone()));
        }
        id
    }

    /// Returns true if the edge was newly inserted; a duplicate
    /// `(kind, source, target)` triple is suppressed.
    fn add_edge(&mut self, kind: EdgeKind, source: &str, target: &str) -> bool {
        let id = edge_id(kind, source, target);
        if !self.edge_ids.insert(id.clone()) {
            return false;
        }
        self.edges.push(Edge {
            id,
            source: source.to_string(),
            target: target.to_string(),
            kind,
        });
        true
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a graph with default options.
pub fn build(entries: &[Entry]) -> SiteGraph {
    GraphBuilder::new().build(entries)
}

fn image_label(image_url: &str) -> String {
    classify::classify(image_url)
        .segments
        .last()
        .cloned()
        .unwrap_or_else(|| image_url.to_string())
}

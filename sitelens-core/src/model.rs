use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a vertex represents. `Category`, `Date` and `AssetHost` nodes are
/// always classification scaffolding; `Section` nodes come in both a
/// navigable (hierarchy) and a grouping (section-as-type dimension)
/// flavor, which is why [`Node::grouping`] exists as an explicit field
/// rather than being derivable from the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Site,
    Section,
    PathSegment,
    Page,
    Image,
    Category,
    Date,
    AssetHost,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Site => "site",
            NodeKind::Section => "section",
            NodeKind::PathSegment => "path-segment",
            NodeKind::Page => "page",
            NodeKind::Image => "image",
            NodeKind::Category => "category",
            NodeKind::Date => "date",
            NodeKind::AssetHost => "asset-host",
        }
    }

    /// Short readable id prefix, so an id hints at what it names.
    pub fn prefix(&self) -> &'static str {
        match self {
            NodeKind::Site => "site",
            NodeKind::Section => "section",
            NodeKind::PathSegment => "seg",
            NodeKind::Page => "page",
            NodeKind::Image => "img",
            NodeKind::Category => "cat",
            NodeKind::Date => "date",
            NodeKind::AssetHost => "host",
        }
    }

    /// True for kinds that can only ever be grouping scaffolding.
    pub fn is_grouping(&self) -> bool {
        matches!(self, NodeKind::Category | NodeKind::Date | NodeKind::AssetHost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// Hierarchical containment: site -> section -> path segments.
    Contains,
    /// Deepest prefix node -> the page that lives there.
    Page,
    /// Dimension group -> member page.
    Member,
    /// Page -> attached image.
    Asset,
    /// Cross-link: shared dimension membership or external asset host.
    Related,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Contains => "contains",
            EdgeKind::Page => "page",
            EdgeKind::Member => "member",
            EdgeKind::Asset => "asset",
            EdgeKind::Related => "related",
        }
    }

    /// Id prefix. Distinct from every node prefix so node and edge ids
    /// never read alike.
    pub fn prefix(&self) -> &'static str {
        match self {
            EdgeKind::Contains => "e-in",
            EdgeKind::Page => "e-pg",
            EdgeKind::Member => "e-mb",
            EdgeKind::Asset => "e-as",
            EdgeKind::Related => "e-rel",
        }
    }
}

/// A typed vertex. Ids are a pure function of `(kind, semantic key)`,
/// so rebuilding from identical input reproduces them byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    /// Explicit scaffolding flag. The extractor and the display policy
    /// consult this, never the label text.
    #[serde(default)]
    pub grouping: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A typed, directed arc. At most one edge exists per
/// `(kind, source, target)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

/// One input unit: a canonical URL plus its associated image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Entry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            images: Vec::new(),
        }
    }

    pub fn with_images(url: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            url: url.into(),
            images,
        }
    }
}

/// The built graph. Constructed in one pass and read-only afterwards;
/// exploration only ever computes derived views over it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl SiteGraph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn site_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Site)
    }

    /// Node counts per kind, for summaries.
    pub fn node_kind_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.kind.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Edge counts per kind, for summaries.
    pub fn edge_kind_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for edge in &self.edges {
            *counts.entry(edge.kind.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("duplicate edge id: {0}")]
    DuplicateEdgeId(String),

    // Field names avoid `source`, which thiserror reserves for error
    // chaining.
    #[error("duplicate edge triple: {kind} {source_id} -> {target_id}")]
    DuplicateEdgeTriple {
        kind: String,
        source_id: String,
        target_id: String,
    },

    #[error("edge {edge} references missing node: {node}")]
    MissingEndpoint { edge: String, node: String },

    #[error("graph has no site node")]
    MissingSiteNode,

    #[error("graph has {0} site nodes, expected exactly one")]
    MultipleSiteNodes(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;

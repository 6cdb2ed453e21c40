use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExploreError {
    #[error("unknown root node id: {0}")]
    UnknownRoot(String),

    #[error("duplicate node id in graph: {0}")]
    DuplicateNode(String),

    #[error("edge {edge} references missing node: {node}")]
    BrokenEdge { edge: String, node: String },
}

pub type Result<T> = std::result::Result<T, ExploreError>;

pub mod error;
pub mod extract;
pub mod index;
pub mod policy;
pub mod roots;

pub use error::ExploreError;
pub use extract::{ExploreRequest, Extraction, MAX_DEPTH, MIN_DEPTH, explore, extract};
pub use index::GraphIndex;
pub use policy::{DisplayMode, ExplorationView, ScaleOptions, apply_policy};
pub use roots::{RootCandidate, root_candidates};

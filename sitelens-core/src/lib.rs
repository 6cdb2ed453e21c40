pub mod build;
pub mod classify;
pub mod error;
pub mod export;
pub mod ident;
pub mod model;

pub use build::{BuildOptions, GraphBuilder};
pub use classify::{UrlFacets, classify};
pub use error::GraphError;
pub use model::{Edge, EdgeKind, Entry, Node, NodeKind, SiteGraph};

pub fn print_banner() {
    println!(
        r#"
           _ __       __
    _____ (_) /____  / /__  ____  _____
   / ___// / __/ _ \/ / _ \/ __ \/ ___/
  (__  )/ / /_/  __/ /  __/ / / (__  )
 /____//_/\__/\___/_/\___/_/ /_/____/

  sitelens v{} - sitemaps, as graphs
"#,
        env!("CARGO_PKG_VERSION")
    );
}

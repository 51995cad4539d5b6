//! Semantic graph model: nodes, typed edges, mutations and path queries.
//!
//! [`SemanticGraph`] is the pure in-memory structure; persistence lives in
//! [`store`](crate::store).

pub mod logging;
mod paths;
mod semantic_graph;

pub use paths::Connectivity;
pub use semantic_graph::{EdgeAttributes, EdgeRef, SemanticGraph};

//! # Store: persistence for the semantic network
//!
//! [`GraphStore`] owns a [`SemanticGraph`](crate::SemanticGraph) and its data file. Every
//! mutating call saves the whole graph before it returns (write-through).
//!
//! | Piece | Role |
//! |-------|------|
//! | [`GraphSerializer`] / [`JsonAdjacency`] | graph <-> adjacency-map JSON bytes |
//! | [`load`] / [`save`] | file I/O, corrupt-file recovery, atomic replace |
//! | [`GraphStore`] | all-or-nothing mutations over the above |

mod graph_store;
mod persistence;
mod serializer;

pub use graph_store::GraphStore;
pub use persistence::{load, save, LoadWarning, Loaded};
pub use serializer::{GraphSerializer, JsonAdjacency};

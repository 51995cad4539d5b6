//! # semnet
//!
//! A small semantic network store: named nodes joined by directed edges, each edge typed
//! with one of seventeen [`LinkType`]s and carrying a free-text description.
//!
//! ## Design Principles
//!
//! - **Label is identity**: a node is its (case-sensitive, non-empty) label.
//! - **One edge per ordered pair**: adding `A -> B` again overwrites its attributes.
//! - **Insertion order everywhere**: node listings, saved files and path enumeration follow
//!   the order things were added, so results are deterministic.
//! - **All-or-nothing**: a failed call changes nothing, in memory or on disk.
//!
//! ## Main Modules
//!
//! - [`graph`]: [`SemanticGraph`], edge attributes, mutations and [`Connectivity`] queries.
//! - [`store`]: [`GraphStore`] (write-through persistence), the JSON adjacency serializer
//!   and corrupt-file recovery.
//! - [`link_type`]: the closed relation vocabulary.
//! - [`error`]: [`GraphError`].
//!
//! ## Features
//!
//! - `tracing` (default): log through the `tracing` crate instead of stderr.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use semnet::{GraphStore, LinkType};
//!
//! # fn main() -> Result<(), semnet::GraphError> {
//! let mut store = GraphStore::open("semantic_network.json")?;
//! store.add_or_update_edge("Cat", "Animal", LinkType::Generative, "cat is an animal")?;
//! store.add_or_update_edge("Animal", "Thing", LinkType::Generative, "")?;
//!
//! let paths = store.find_paths("Thing", "Cat")?;
//! assert!(paths.directed.is_empty());
//! assert_eq!(paths.undirected, vec![vec!["Thing", "Animal", "Cat"]]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod link_type;
pub mod store;

pub use error::{GraphError, Result};
pub use graph::{Connectivity, EdgeAttributes, EdgeRef, SemanticGraph};
pub use link_type::{LinkType, ParseLinkTypeError};
pub use store::{GraphStore, JsonAdjacency, LoadWarning};

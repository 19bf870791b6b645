//! # `frozen_graph` - Build-Once Edge Store
//!
//! A directed weighted graph over integer vertices that is filled once through a
//! bounded builder and then frozen into a sorted, immutable structure-of-arrays
//! layout answering point lookups in logarithmic time.
//!
//! ## Guarantees
//!
//! ### Ordering
//! - Rows of a built [`Graph`] are sorted by source, then by destination.
//! - No two rows share the same `(source, destination)` pair; a duplicate is
//!   rejected when the graph is built, never when an edge is added.
//!
//! ### Immutability
//! - A [`GraphBuilder`] is single-use: building hands its buffers to the graph
//!   and every later add or build fails with [`GraphError::InvalidState`].
//! - A [`Graph`] exposes no mutating method. It is `Send + Sync`, so one frozen
//!   graph can be shared by any number of reader threads without locking.
//!
//! ### Bounded construction
//! - Builder buffers are allocated once, at the declared capacity. Adding past
//!   it fails with [`GraphError::CapacityExceeded`].
//! - Freezing sorts in place with row swaps and allocates no per-row scratch.
//!
//! ## Architecture
//!
//! 1. **Edge** ([`Edge`]): an immutable `(source, destination, weight)` value.
//! 2. **Builder** ([`GraphBuilder`]): three parallel fixed-size columns and a count.
//! 3. **Freeze** (inside [`GraphBuilder::build`]): a quicksort of all rows by
//!    source, a quicksort of every equal-source run by destination, then one
//!    adjacent scan for duplicate endpoints.
//! 4. **Graph** ([`Graph`]): leftmost/rightmost binary searches locate a
//!    source run; a third search inside the run finds the destination.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while freezing and on rejected edges.
//! - `parallel`: rayon-backed `Graph::par_iter` and `Graph::par_lookup`.
//!
//! ## Example
//!
//! ```rust
//! use frozen_graph::{Edge, GraphBuilder};
//!
//! # fn main() -> Result<(), frozen_graph::GraphError> {
//! let edges = [
//!     Edge::new(3, 5, 13.98),
//!     Edge::new(1, 2, 2.53),
//!     Edge::new(3, 2, 56.33),
//! ];
//!
//! let graph = GraphBuilder::new(edges.len()).add_edges(edges)?.build()?;
//!
//! assert_eq!(graph.get_edge_value(3, 5), Some(13.98));
//! assert_eq!(graph.get_edge_value(5, 3), None);
//!
//! let out_of_3: Vec<_> = graph.vertex_iter(3).map(|e| e.destination()).collect();
//! assert_eq!(out_of_3, vec![2, 5]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod edge;
pub mod error;
pub mod graph;

pub use edge::{Edge, Vertex, Weight};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use graph::{Edges, Graph, GraphBuilder, VertexEdges};

// Compile-time assertions for layout and sharing claims
const _: () = {
    use core::mem;

    // An edge is exactly its three 4-byte fields.
    assert!(mem::size_of::<Edge>() == 12);

    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph>();
    assert_send_sync::<Edge>();
};

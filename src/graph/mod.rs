//! A frozen, sorted structure-of-arrays edge store.
//!
//! Vertical split:
//! - `builder`: bounded accumulation before freezing
//! - `freeze`: in-place two-pass sort and duplicate validation
//! - `search`: leftmost/rightmost binary search over a sorted column
//! - `iter`: full and per-vertex edge iteration
//! - `serde_impl`: serialization through the builder
//! - `parallel`: rayon reads over a shared graph (feature `parallel`)
//!
//! Memory layout:
//! - `sources`: `Box<[i32]>`, ascending
//! - `destinations`: `Box<[i32]>`, ascending within each run of equal sources
//! - `weights`: `Box<[f32]>`, row-aligned with the two columns above

mod builder;
mod freeze;
mod iter;
#[cfg(feature = "parallel")]
mod parallel;
mod rows;
mod search;
mod serde_impl;

pub use builder::GraphBuilder;
pub use iter::{Edges, VertexEdges};

use rows::Rows;
use search::Bias;

use crate::edge::{Edge, Vertex, Weight};
use crate::error::GraphResult;

/// An immutable directed weighted graph with unique `(source, destination)` pairs.
///
/// Rows are ordered by source, then destination. Nothing mutates a graph once
/// it exists, so a `&Graph` can be read from many threads without locking.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `GraphBuilder::build` | \(O(m \log m)\) expected | Two in-place quicksorts + one scan |
/// | `get_edge_value` | \(O(\log m)\) | Three binary searches |
/// | `out_degree` | \(O(\log m)\) | Two binary searches |
/// | `vertex_iter` | \(O(\log m + d)\) | One binary search, then linear |
/// | `iter` | \(O(m)\) | Edges materialized on demand |
#[derive(Clone, Debug)]
pub struct Graph {
    rows: Rows,
}

impl Graph {
    /// Shorthand for [`GraphBuilder::new`].
    #[inline]
    pub fn builder(capacity: usize) -> GraphBuilder {
        GraphBuilder::new(capacity)
    }

    /// Builds a graph from every edge in `edges`.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`](crate::GraphError::InvalidArgument)
    /// if two edges share both source and destination.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().collect();
        GraphBuilder::new(edges.len()).add_edges(edges)?.build()
    }

    pub(crate) fn freeze(rows: Rows) -> GraphResult<Self> {
        freeze::freeze(rows).map(|rows| Self { rows })
    }

    /// Number of edges.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Number of edges; same as [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the graph holds no edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.len() == 0
    }

    /// Weight of the edge `source -> destination`, if present.
    pub fn get_edge_value(&self, source: Vertex, destination: Vertex) -> Option<Weight> {
        let (first, last) = self.source_run(source)?;
        let index = search::find(self.destinations(), destination, first..last + 1, Bias::Leftmost)?;
        Some(self.rows.weights()[index])
    }

    /// Returns `true` if the edge `source -> destination` exists.
    #[inline]
    pub fn contains_edge(&self, source: Vertex, destination: Vertex) -> bool {
        self.get_edge_value(source, destination).is_some()
    }

    /// Number of edges leaving `vertex`.
    pub fn out_degree(&self, vertex: Vertex) -> usize {
        self.source_run(vertex).map_or(0, |(first, last)| last - first + 1)
    }

    /// Edge stored at row `index` of the sorted order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Edge> {
        (index < self.size()).then(|| self.rows.edge(index))
    }

    /// Iterates all edges by ascending `(source, destination)`.
    #[inline]
    pub fn iter(&self) -> Edges<'_> {
        Edges::new(self)
    }

    /// Iterates the edges leaving `vertex` by ascending destination.
    ///
    /// Yields nothing if `vertex` has no outgoing edge.
    #[inline]
    pub fn vertex_iter(&self, vertex: Vertex) -> VertexEdges<'_> {
        VertexEdges::new(self, vertex)
    }

    /// Source column in sorted row order.
    #[inline]
    pub fn sources(&self) -> &[Vertex] {
        self.rows.sources()
    }

    /// Destination column in sorted row order.
    #[inline]
    pub fn destinations(&self) -> &[Vertex] {
        self.rows.destinations()
    }

    /// Weight column in sorted row order.
    #[inline]
    pub fn weights(&self) -> &[Weight] {
        self.rows.weights()
    }

    /// Inclusive row range `[first, last]` whose source is `vertex`.
    fn source_run(&self, vertex: Vertex) -> Option<(usize, usize)> {
        let size = self.size();
        let sources = self.sources();
        let first = search::find(sources, vertex, 0..size, Bias::Leftmost)?;
        let last = search::find(sources, vertex, first..size, Bias::Rightmost)?;
        Some((first, last))
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = Edge;
    type IntoIter = Edges<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Edge>> for Graph {
    type Error = crate::GraphError;

    fn try_from(edges: Vec<Edge>) -> GraphResult<Self> {
        Self::from_edges(edges)
    }
}

impl TryFrom<&[Edge]> for Graph {
    type Error = crate::GraphError;

    fn try_from(edges: &[Edge]) -> GraphResult<Self> {
        Self::from_edges(edges.iter().copied())
    }
}

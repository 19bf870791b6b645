//! Bounded accumulation phase that precedes a frozen [`Graph`].

use super::rows::Rows;
use super::Graph;
use crate::edge::{Edge, Vertex, Weight};
use crate::error::{GraphError, GraphResult};

/// Collects edges into buffers sized once, up front, then freezes them into a [`Graph`].
///
/// A builder is single-use: [`build`](Self::build) hands its buffers to the
/// graph, after which every add and every further build fails with
/// [`GraphError::InvalidState`].
///
/// Methods take `&mut self`; callers sharing a builder across threads must
/// serialize access themselves.
///
/// ### Example
/// ```rust
/// use frozen_graph::{Edge, GraphBuilder};
///
/// # fn main() -> Result<(), frozen_graph::GraphError> {
/// let graph = GraphBuilder::new(3)
///     .add(4, 2, 10.0)?
///     .add_edge(Edge::new(1, 2, 2.53))?
///     .add(1, 3, 4.23)?
///     .build()?;
///
/// assert_eq!(graph.get_edge_value(1, 3), Some(4.23));
/// assert_eq!(graph.get_edge_value(2, 1), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    rows: Option<Rows>,
    capacity: usize,
    len: usize,
}

impl GraphBuilder {
    /// Creates a builder accepting at most `capacity` edges.
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: Some(Rows::zeroed(capacity)),
            capacity,
            len: 0,
        }
    }

    /// Creates a builder from a signed capacity.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if `capacity < 0`.
    pub fn try_new(capacity: isize) -> GraphResult<Self> {
        usize::try_from(capacity)
            .map(Self::new)
            .map_err(|_| GraphError::negative_capacity(capacity))
    }

    /// Maximum number of edges this builder accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of edges added so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no edge has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Edges that can still be added before the capacity is reached.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    /// Returns `true` once [`build`](Self::build) has been called.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.rows.is_none()
    }

    /// Appends the edge `source -> destination` with `weight`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidState`] if the builder was already built.
    /// - [`GraphError::CapacityExceeded`] if the capacity is reached.
    pub fn add(&mut self, source: Vertex, destination: Vertex, weight: Weight) -> GraphResult<&mut Self> {
        let Some(rows) = self.rows.as_mut() else {
            return Err(GraphError::InvalidState("adding edge after build()"));
        };
        if self.len == self.capacity {
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = self.capacity, source, destination, "edge rejected, builder full");
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        rows.set(self.len, source, destination, weight);
        self.len += 1;
        Ok(self)
    }

    /// Appends `edge`; `None` stands for an absent edge.
    ///
    /// # Errors
    /// [`GraphError::NullInput`] for `None`, otherwise as [`add`](Self::add).
    pub fn add_edge(&mut self, edge: impl Into<Option<Edge>>) -> GraphResult<&mut Self> {
        let edge = edge.into().ok_or(GraphError::NullInput)?;
        self.add(edge.source(), edge.destination(), edge.weight())
    }

    /// Appends every edge in order, stopping at the first failure.
    ///
    /// Edges appended before a failing one stay in the builder.
    ///
    /// # Errors
    /// The first error returned by [`add_edge`](Self::add_edge).
    pub fn add_edges<I>(&mut self, edges: I) -> GraphResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<Edge>>,
    {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(self)
    }

    /// Freezes the collected edges into a [`Graph`], consuming the buffers.
    ///
    /// The builder is spent after the first call, whether or not freezing succeeds.
    ///
    /// # Errors
    /// - [`GraphError::InvalidState`] if the builder was already built.
    /// - [`GraphError::InvalidArgument`] if two edges share both source and destination.
    pub fn build(&mut self) -> GraphResult<Graph> {
        let rows = self
            .rows
            .take()
            .ok_or(GraphError::InvalidState("build() after build()"))?;
        Graph::freeze(rows.truncate(self.len))
    }
}

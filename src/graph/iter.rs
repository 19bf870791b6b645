use core::iter::FusedIterator;

use super::search::{self, Bias};
use super::Graph;
use crate::edge::{Edge, Vertex};
use crate::error::{GraphError, GraphResult};

/// Iterator over every edge of a [`Graph`] in `(source, destination)` order.
///
/// Edges are materialized on demand from the graph's columns.
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    graph: &'a Graph,
    index: usize,
}

impl<'a> Edges<'a> {
    #[inline]
    pub(super) fn new(graph: &'a Graph) -> Self {
        Self { graph, index: 0 }
    }

    /// Returns `true` while another edge remains.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index < self.graph.size()
    }

    /// Like [`Iterator::next`], but reports exhaustion as an error.
    ///
    /// # Errors
    /// [`GraphError::EndOfSequence`] on every call once the iterator is exhausted.
    pub fn try_next(&mut self) -> GraphResult<Edge> {
        self.next().ok_or(GraphError::EndOfSequence)
    }

    /// Graphs are immutable, so removal through an iterator is never possible.
    ///
    /// # Errors
    /// Always [`GraphError::UnsupportedOperation`].
    pub fn remove(&mut self) -> GraphResult<()> {
        Err(GraphError::UnsupportedOperation("remove"))
    }
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.graph.get(self.index)?;
        self.index += 1;
        Some(edge)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.size() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl FusedIterator for Edges<'_> {}

/// Iterator over the outgoing edges of one vertex, by ascending destination.
#[derive(Clone, Debug)]
pub struct VertexEdges<'a> {
    graph: &'a Graph,
    vertex: Vertex,
    index: usize,
}

impl<'a> VertexEdges<'a> {
    pub(super) fn new(graph: &'a Graph, vertex: Vertex) -> Self {
        let size = graph.size();
        let index = search::find(graph.sources(), vertex, 0..size, Bias::Leftmost).unwrap_or(size);
        Self {
            graph,
            vertex,
            index,
        }
    }

    /// Vertex whose outgoing edges are produced.
    #[inline]
    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    /// Returns `true` while another edge of this vertex remains.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.graph
            .sources()
            .get(self.index)
            .is_some_and(|&source| source == self.vertex)
    }

    /// Like [`Iterator::next`], but reports exhaustion as an error.
    ///
    /// # Errors
    /// [`GraphError::EndOfSequence`] on every call once the iterator is exhausted.
    pub fn try_next(&mut self) -> GraphResult<Edge> {
        self.next().ok_or(GraphError::EndOfSequence)
    }

    /// Graphs are immutable, so removal through an iterator is never possible.
    ///
    /// # Errors
    /// Always [`GraphError::UnsupportedOperation`].
    pub fn remove(&mut self) -> GraphResult<()> {
        Err(GraphError::UnsupportedOperation("remove"))
    }
}

impl Iterator for VertexEdges<'_> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let edge = self.graph.get(self.index)?;
        self.index += 1;
        Some(edge)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.size().saturating_sub(self.index)))
    }
}

impl FusedIterator for VertexEdges<'_> {}

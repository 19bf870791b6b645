use crate::edge::{Edge, Vertex, Weight};

/// Which column a sort pass orders rows by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Column {
    Source,
    Destination,
}

/// Three parallel columns sharing one index space.
///
/// Row `i` is `(sources[i], destinations[i], weights[i])`. Every reordering
/// goes through [`Rows::swap`], which moves all three cells together.
#[derive(Clone, Debug)]
pub(crate) struct Rows {
    sources: Box<[Vertex]>,
    destinations: Box<[Vertex]>,
    weights: Box<[Weight]>,
}

impl Rows {
    /// Allocates `capacity` zeroed rows up front.
    pub(crate) fn zeroed(capacity: usize) -> Self {
        Self {
            sources: vec![0; capacity].into_boxed_slice(),
            destinations: vec![0; capacity].into_boxed_slice(),
            weights: vec![0.0; capacity].into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.sources.len()
    }

    /// Overwrites row `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`; callers bound it by the builder's capacity.
    #[inline]
    pub(crate) fn set(&mut self, index: usize, source: Vertex, destination: Vertex, weight: Weight) {
        self.sources[index] = source;
        self.destinations[index] = destination;
        self.weights[index] = weight;
    }

    /// Drops every row at or after `len`, leaving columns of exactly `len` entries.
    pub(crate) fn truncate(self, len: usize) -> Self {
        if len >= self.len() {
            return self;
        }
        let shrink = |column: Box<[Vertex]>| {
            let mut v = column.into_vec();
            v.truncate(len);
            v.into_boxed_slice()
        };
        let mut weights = self.weights.into_vec();
        weights.truncate(len);
        Self {
            sources: shrink(self.sources),
            destinations: shrink(self.destinations),
            weights: weights.into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn key(&self, column: Column, index: usize) -> Vertex {
        match column {
            Column::Source => self.sources[index],
            Column::Destination => self.destinations[index],
        }
    }

    /// Exchanges two whole rows.
    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.sources.swap(a, b);
        self.destinations.swap(a, b);
        self.weights.swap(a, b);
    }

    #[inline]
    pub(crate) fn edge(&self, index: usize) -> Edge {
        Edge::new(
            self.sources[index],
            self.destinations[index],
            self.weights[index],
        )
    }

    #[inline]
    pub(crate) fn sources(&self) -> &[Vertex] {
        &self.sources
    }

    #[inline]
    pub(crate) fn destinations(&self) -> &[Vertex] {
        &self.destinations
    }

    #[inline]
    pub(crate) fn weights(&self) -> &[Weight] {
        &self.weights
    }
}

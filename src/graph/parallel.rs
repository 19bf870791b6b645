//! Parallel reads over a frozen graph.

use rayon::prelude::*;

use super::Graph;
use crate::edge::{Edge, Vertex, Weight};

impl Graph {
    /// Parallel iterator over all edges, indexed by sorted row.
    pub fn par_iter(&self) -> impl IndexedParallelIterator<Item = Edge> + '_ {
        (0..self.size()).into_par_iter().map(move |i| self.rows.edge(i))
    }

    /// Answers a batch of point lookups in parallel, in the order of `pairs`.
    pub fn par_lookup(&self, pairs: &[(Vertex, Vertex)]) -> Vec<Option<Weight>> {
        pairs
            .par_iter()
            .map(|&(source, destination)| self.get_edge_value(source, destination))
            .collect()
    }
}

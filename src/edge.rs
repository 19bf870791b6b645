//! The directed, weighted edge value handed to and produced by a graph.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Integer identifier of a graph node.
pub type Vertex = i32;

/// Weight carried by an edge.
pub type Weight = f32;

/// A directed edge `source -> destination` carrying a weight.
///
/// Equality and hashing cover all three fields. Weights compare by exact
/// bit pattern with every NaN treated as the same value, so `Eq` and `Hash`
/// agree with each other and an edge always equals itself.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    source: Vertex,
    destination: Vertex,
    weight: Weight,
}

impl Edge {
    /// Creates an edge. No validation happens here; a graph rejects duplicates when it is built.
    #[inline]
    pub const fn new(source: Vertex, destination: Vertex, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Vertex the edge leaves.
    #[inline]
    pub const fn source(&self) -> Vertex {
        self.source
    }

    /// Vertex the edge enters.
    #[inline]
    pub const fn destination(&self) -> Vertex {
        self.destination
    }

    /// Weight of the edge.
    #[inline]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// `(source, destination)`, the key a graph indexes by.
    #[inline]
    pub const fn endpoints(&self) -> (Vertex, Vertex) {
        (self.source, self.destination)
    }

    #[inline]
    fn weight_bits(&self) -> u32 {
        if self.weight.is_nan() {
            Weight::NAN.to_bits()
        } else {
            self.weight.to_bits()
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.destination == other.destination
            && self.weight_bits() == other.weight_bits()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
        self.weight_bits().hash(state);
    }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    #[inline]
    fn from((source, destination, weight): (Vertex, Vertex, Weight)) -> Self {
        Self::new(source, destination, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge{{source={}, destination={}, weight={}}}",
            self.source, self.destination, self.weight
        )
    }
}

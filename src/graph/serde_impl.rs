//! A graph serializes as its edge sequence and deserializes through a builder,
//! so a decoded graph satisfies the same ordering and uniqueness rules as a built one.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::Graph;
use crate::edge::Edge;

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let edges = Vec::<Edge>::deserialize(deserializer)?;
        Graph::from_edges(edges).map_err(de::Error::custom)
    }
}

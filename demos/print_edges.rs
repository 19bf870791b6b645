//! Builds a small graph and prints its edges before and after freezing.

use anyhow::Result;
use frozen_graph::{Edge, GraphBuilder};

fn main() -> Result<()> {
    let edges = vec![
        Edge::new(1, 2, 2.53),
        Edge::new(4, 2, 10.00),
        Edge::new(2, 1, 5.64),
        Edge::new(1, 3, 4.23),
        Edge::new(4, 1, 4.44),
        Edge::new(5, 3, 90.44),
        Edge::new(4, 5, 88.34),
        Edge::new(5, 2, 33.21),
        Edge::new(3, 5, 13.98),
        Edge::new(3, 2, 56.33),
    ];

    let graph = GraphBuilder::new(edges.len())
        .add_edges(edges.iter().copied())?
        .build()?;

    println!("In list:");
    for edge in &edges {
        println!("{edge}");
    }

    println!("In graph:");
    for edge in &graph {
        println!("{edge}");
    }

    println!("(2, 1) value = {:?}", graph.get_edge_value(2, 1));
    Ok(())
}

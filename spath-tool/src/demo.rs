//! Built-in sample graph.

use spath_graph::{Graph, Result};

/// Six cities joined by one-way roads, with a loopback 6 -> 4 and a wrap around 6 -> 1.
///
/// Shortest distances from city 1: 1 -> 4 is 15 (via 2, 5), 1 -> 6 is 16 (via 2, 5, 4).
pub fn demo_graph() -> Result<Graph> {
    let mut g = Graph::with_capacity(6);
    let city = g.create_vertex(1);
    let second = g.create_vertex(2);
    let third = g.create_vertex(3);
    let fourth = g.create_vertex(4);
    let fifth = g.create_vertex(5);
    let sixth = g.create_vertex(6);

    g.add_edge(city, third, 10)?;
    g.add_edge(city, second, 7)?;
    g.add_edge(second, third, 2)?;
    g.add_edge(second, fifth, 6)?;
    g.add_edge(third, fourth, 15)?;
    g.add_edge(fifth, sixth, 9)?;
    g.add_edge(fifth, fourth, 2)?;
    g.add_edge(fourth, sixth, 1)?;

    g.add_edge(sixth, fourth, 1)?;
    g.add_edge(sixth, city, 40)?;

    Ok(g)
}

#[test]
fn test_demo_graph() {
    let g = demo_graph().expect("demo graph");
    assert_eq!(g.len(), 6);
    let edge_count: usize = g.vertices().filter_map(|v| g.vertex(v)).map(|v| v.edges().len()).sum();
    assert_eq!(edge_count, 10);
}

//! Dijkstra shortest distance implementation.

use std::fmt;

use log::{debug, log_enabled, trace, warn, Level};

use spath_graph::{Distance, Edge, Graph, Result, Vertex, VertexHandle, VertexId};

use super::frontier::Frontier;

/// Outcome of a shortest distance query.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PathDistance {
    /// Sum of edge weights along the shortest directed path.
    Distance(u64),
    /// No directed path leads from the source to the destination.
    Unreachable,
}

impl PathDistance {
    pub fn distance(&self) -> Option<u64> {
        match *self {
            PathDistance::Distance(d) => Some(d),
            PathDistance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance().is_some()
    }
}

impl From<Distance> for PathDistance {
    fn from(d: Distance) -> Self {
        match d {
            Distance::Finite(d) => PathDistance::Distance(d),
            Distance::Unset => PathDistance::Unreachable,
        }
    }
}

impl fmt::Display for PathDistance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathDistance::Distance(d) => write!(f, "{}", d),
            PathDistance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Progress of the most recent query.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QueryState {
    /// No query has run yet.
    Uninitialized,
    /// Scratch distances reset and the source seeded.
    Initialized,
    /// Extraction/relaxation loop in progress.
    Relaxing,
    /// Frontier drained, scratch distances are final.
    Finalized,
}

/// Work done by the most recent query.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct QueryStats {
    /// Vertices taken out of the frontier.
    pub extractions: usize,
    /// Tentative distances improved.
    pub relaxations: usize,
    /// Relaxations dropped because the distance sum did not fit into `u64`.
    pub overflows: usize,
}

/// Single pair shortest distance search over a `Graph`.
///
/// Uses the per-vertex scratch distances of the graph as working storage,
/// hence the graph is taken mutably. After a finished query every vertex holds
/// its shortest distance from the source.
///
/// `compute()` runs a whole query. The same query can be driven one extraction
/// at a time with `begin()` and `step()`, and `state()` tells where it stands.
/// Stepping must use the graph passed to `begin()`.
#[derive(Debug)]
pub struct ShortestPathEngine {
    state: QueryState,
    stats: QueryStats,
    frontier: Frontier,
    destination: Option<VertexHandle>,
}

impl ShortestPathEngine {
    pub fn new() -> Self {
        ShortestPathEngine {
            state: QueryState::Uninitialized,
            stats: QueryStats::default(),
            frontier: Frontier::new(),
            destination: None,
        }
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    pub fn stats(&self) -> QueryStats {
        self.stats
    }

    /// Shortest distance from the vertex at `source_index` to the vertex at `destination_index`.
    ///
    /// Both indices are positions in `graph.vertices()`. An out of range index is
    /// reported before the graph is touched.
    pub fn compute(&mut self, graph: &mut Graph, source_index: usize, destination_index: usize) -> Result<PathDistance> {
        let destination = graph.check_index(destination_index)?;
        self.begin(graph, source_index, destination_index)?;
        while self.step(graph) {}

        let res = PathDistance::from(graph.tentative_distance(destination));
        debug!("shortest distance {} -> {} is {} ({:?})", source_index, destination_index, res, self.stats);
        Ok(res)
    }

    /// Reset the scratch distances, seed the source and fill the frontier.
    /// On an out of range index nothing changes, including `state()`.
    pub fn begin(&mut self, graph: &mut Graph, source_index: usize, destination_index: usize) -> Result<()> {
        let source = graph.check_index(source_index)?;
        let destination = graph.check_index(destination_index)?;
        debug!("shortest distance query {} -> {} over {} vertices", source_index, destination_index, graph.len());

        self.stats = QueryStats::default();
        graph.reset_scratch_distances();
        graph.set_tentative_distance(source, Distance::ZERO);
        self.frontier = Frontier::with_members(graph.vertices().map(|v| v.index()));
        self.destination = Some(destination);
        self.state = QueryState::Initialized;

        if log_enabled!(Level::Trace) {
            trace!("not visited: [{}]", frontier_ids(graph, &self.frontier));
        }
        Ok(())
    }

    /// Extract the closest unfinished vertex and relax its edges.
    /// Returns `false` when there was nothing to extract.
    pub fn step(&mut self, graph: &mut Graph) -> bool {
        match self.state {
            QueryState::Initialized | QueryState::Relaxing => {}
            QueryState::Uninitialized | QueryState::Finalized => return false,
        }
        self.state = QueryState::Relaxing;

        let current = match self.frontier.pop_min_by_key(|i| scratch_distance(graph, i)) {
            Some(current) => current,
            None => {
                self.state = QueryState::Finalized;
                return false;
            }
        };
        self.stats.extractions += 1;
        self.relax_edges(graph, current);
        if log_enabled!(Level::Trace) {
            trace!("not visited: [{}]", frontier_ids(graph, &self.frontier));
        }

        if self.frontier.is_empty() {
            self.state = QueryState::Finalized;
        }
        true
    }

    /// Distance to the destination once the query is finalized.
    pub fn result(&self, graph: &Graph) -> Option<PathDistance> {
        match (self.state, self.destination) {
            (QueryState::Finalized, Some(destination)) => Some(PathDistance::from(graph.tentative_distance(destination))),
            _ => None,
        }
    }

    fn relax_edges(&mut self, graph: &mut Graph, current: usize) {
        let (id, distance, edge_count) = match graph.vertex_at(current) {
            Some(v) => (v.id(), v.tentative_distance(), v.edges().len()),
            None => return,
        };

        // An unreached vertex cannot improve anything
        if !distance.is_finite() {
            trace!("vertex {} is not reachable, skipping its edges", id);
            return;
        }

        trace!("calculating distances from {} ({}) to its neighbours", id, distance);
        for i in 0..edge_count {
            let edge = match graph.vertex_at(current).and_then(|v| v.edges().get(i)) {
                Some(&edge) => edge,
                None => break,
            };
            let candidate = match distance.checked_extend(edge.weight()) {
                Some(c) => c,
                None => {
                    warn!("distance from vertex {} over edge of weight {} overflows, edge ignored", id, edge.weight());
                    self.stats.overflows += 1;
                    continue;
                }
            };
            let target = edge.target();
            if candidate < graph.tentative_distance(target) {
                trace!("{}", relaxation_line(graph, id, &edge, candidate));
                graph.set_tentative_distance(target, candidate);
                self.stats.relaxations += 1;
            }
        }
    }
}

impl Default for ShortestPathEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot query with a throwaway engine.
pub fn shortest_distance(graph: &mut Graph, source_index: usize, destination_index: usize) -> Result<PathDistance> {
    ShortestPathEngine::new().compute(graph, source_index, destination_index)
}

fn scratch_distance(graph: &Graph, index: usize) -> Distance {
    graph.vertex_at(index).map_or(Distance::Unset, Vertex::tentative_distance)
}

fn frontier_ids(graph: &Graph, frontier: &Frontier) -> String {
    frontier
        .iter()
        .filter_map(|i| graph.vertex_at(i))
        .map(|v| v.id().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn relaxation_line(graph: &Graph, from: VertexId, edge: &Edge, candidate: Distance) -> String {
    match graph.edge_target_id(edge) {
        Some(to) => format!("\t{} to {} is {} NEW SHORTEST", from, to, candidate),
        None => format!("\t{} to <foreign> is {} NEW SHORTEST", from, candidate),
    }
}

#[cfg(test)]
mod tests {
    use spath_graph::{EdgeDefect, Error};

    use super::*;

    /// Six cities, with a loopback 6 -> 4 and a wrap around 6 -> 1.
    fn cities() -> Graph {
        let mut g = Graph::new();
        let v = (1..=6).map(|id| g.create_vertex(id)).collect::<Vec<_>>();
        let links = [(0, 2, 10), (0, 1, 7), (1, 2, 2), (1, 4, 6), (2, 3, 15), (4, 5, 9), (4, 3, 2), (3, 5, 1), (5, 3, 1), (5, 0, 40)];
        for &(from, to, w) in links.iter() {
            g.add_edge(v[from], v[to], w).unwrap();
        }
        g
    }

    fn scratch(g: &Graph) -> Vec<Distance> {
        g.vertices().map(|v| g.tentative_distance(v)).collect()
    }

    #[test]
    fn test_cities() {
        let mut g = cities();
        assert_eq!(shortest_distance(&mut g, 0, 5), Ok(PathDistance::Distance(16)));
        assert_eq!(shortest_distance(&mut g, 0, 3), Ok(PathDistance::Distance(15)));
        assert_eq!(shortest_distance(&mut g, 0, 2), Ok(PathDistance::Distance(9)));
        assert_eq!(shortest_distance(&mut g, 5, 4), Ok(PathDistance::Distance(53)));
        assert_eq!(shortest_distance(&mut g, 3, 0), Ok(PathDistance::Distance(41)));
    }

    #[test]
    fn test_all_distances_final() {
        let mut g = cities();
        shortest_distance(&mut g, 0, 5).unwrap();
        let d = |n| Distance::Finite(n);
        assert_eq!(scratch(&g), vec![d(0), d(7), d(9), d(15), d(13), d(16)]);
    }

    #[test]
    fn test_self_distance() {
        let mut g = cities();
        for i in 0..g.len() {
            assert_eq!(shortest_distance(&mut g, i, i), Ok(PathDistance::Distance(0)));
        }
    }

    #[test]
    fn test_isolated_vertex() {
        let mut g = cities();
        let lonely = g.create_vertex(7);
        for i in 0..g.len() - 1 {
            assert_eq!(shortest_distance(&mut g, i, lonely.index()), Ok(PathDistance::Unreachable));
            assert_eq!(shortest_distance(&mut g, lonely.index(), i), Ok(PathDistance::Unreachable));
        }
    }

    #[test]
    fn test_one_way_edge() {
        let mut g = Graph::new();
        let a = g.create_vertex(1);
        let b = g.create_vertex(2);
        g.add_edge(a, b, 3).unwrap();
        assert_eq!(shortest_distance(&mut g, 0, 1), Ok(PathDistance::Distance(3)));
        assert_eq!(shortest_distance(&mut g, 1, 0), Ok(PathDistance::Unreachable));
        assert_eq!(scratch(&g), vec![Distance::Unset, Distance::ZERO]);
    }

    #[test]
    fn test_idempotent() {
        let mut g = cities();
        let mut engine = ShortestPathEngine::new();
        let first = engine.compute(&mut g, 1, 0);
        let first_scratch = scratch(&g);
        let first_stats = engine.stats();
        assert_eq!(engine.compute(&mut g, 1, 0), first);
        assert_eq!(scratch(&g), first_scratch);
        assert_eq!(engine.stats(), first_stats);
    }

    #[test]
    fn test_queries_do_not_leak() {
        let mut g = cities();
        assert_eq!(shortest_distance(&mut g, 0, 5), Ok(PathDistance::Distance(16)));
        // Vertex 5 is reachable from 1 but must not keep its old distance when querying from 4
        assert_eq!(shortest_distance(&mut g, 3, 4), Ok(PathDistance::Distance(54)));
        assert_eq!(shortest_distance(&mut g, 3, 1), Ok(PathDistance::Distance(48)));
    }

    #[test]
    fn test_index_out_of_range() {
        let mut g = cities();
        let mut engine = ShortestPathEngine::new();
        engine.compute(&mut g, 0, 5).unwrap();
        let before = scratch(&g);

        assert_eq!(engine.compute(&mut g, 6, 0), Err(Error::IndexOutOfRange { index: 6, len: 6 }));
        assert_eq!(engine.compute(&mut g, 0, 6), Err(Error::IndexOutOfRange { index: 6, len: 6 }));
        assert_eq!(engine.compute(&mut g, usize::MAX, 0), Err(Error::IndexOutOfRange { index: usize::MAX, len: 6 }));
        assert_eq!(scratch(&g), before);
        assert_eq!(engine.state(), QueryState::Finalized);

        let mut empty = Graph::new();
        assert_eq!(shortest_distance(&mut empty, 0, 0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut g = cities();
        let (a, b) = (g.handle_at(0).unwrap(), g.handle_at(5).unwrap());
        assert_eq!(g.add_edge(a, b, -3), Err(Error::InvalidEdge(EdgeDefect::NegativeWeight(-3))));
        assert_eq!(shortest_distance(&mut g, 0, 5), Ok(PathDistance::Distance(16)));
    }

    #[test]
    fn test_state_and_stats() {
        let mut g = cities();
        let mut engine = ShortestPathEngine::new();
        assert_eq!(engine.state(), QueryState::Uninitialized);
        assert_eq!(engine.stats(), QueryStats::default());

        assert_eq!(engine.compute(&mut g, 1, 3), Ok(PathDistance::Distance(8)));
        assert_eq!(engine.state(), QueryState::Finalized);
        let stats = engine.stats();
        assert_eq!(stats.extractions, 6);
        assert!(stats.relaxations >= 4);
        assert_eq!(stats.overflows, 0);
    }

    #[test]
    fn test_zero_weights_and_parallel_edges() {
        let mut g = Graph::new();
        let v = (0..3).map(|id| g.create_vertex(id)).collect::<Vec<VertexHandle>>();
        g.add_edge(v[0], v[1], 5).unwrap();
        g.add_edge(v[0], v[1], 3).unwrap();
        g.add_edge(v[0], v[1], 4).unwrap();
        g.add_edge(v[1], v[2], 0).unwrap();
        g.add_edge(v[2], v[2], 0).unwrap();
        assert_eq!(shortest_distance(&mut g, 0, 2), Ok(PathDistance::Distance(3)));
    }

    #[test]
    fn test_overflowing_sum_is_ignored() {
        let mut g = Graph::new();
        let v = (0..3).map(|id| g.create_vertex(id)).collect::<Vec<VertexHandle>>();
        g.add_edge(v[0], v[1], u64::MAX).unwrap();
        g.add_edge(v[1], v[2], 1u64).unwrap();
        let mut engine = ShortestPathEngine::new();
        assert_eq!(engine.compute(&mut g, 0, 1), Ok(PathDistance::Distance(u64::MAX)));
        assert_eq!(engine.compute(&mut g, 0, 2), Ok(PathDistance::Unreachable));
        assert_eq!(engine.stats().overflows, 1);
    }

    #[test]
    fn test_path_distance() {
        assert_eq!(PathDistance::from(Distance::Finite(4)), PathDistance::Distance(4));
        assert_eq!(PathDistance::from(Distance::Unset), PathDistance::Unreachable);
        assert_eq!(PathDistance::Distance(4).distance(), Some(4));
        assert!(!PathDistance::Unreachable.is_reachable());
        assert_eq!(PathDistance::Unreachable.to_string(), "unreachable");
    }
    #[test]
    fn test_relaxation_line_names_target_id() {
        let g = cities();
        let city = g.vertex_at(0).unwrap();
        let to_third = city.edges()[0];
        assert_eq!(relaxation_line(&g, city.id(), &to_third, Distance::Finite(10)), "\t1 to 3 is 10 NEW SHORTEST");

        let fifth = g.vertex_at(4).unwrap();
        let to_fourth = fifth.edges()[1];
        assert_eq!(relaxation_line(&g, fifth.id(), &to_fourth, Distance::Finite(15)), "\t5 to 4 is 15 NEW SHORTEST");
    }

    #[test]
    fn test_step_by_step() {
        let mut g = cities();
        let mut engine = ShortestPathEngine::new();
        assert!(!engine.step(&mut g));
        assert_eq!(engine.result(&g), None);

        engine.begin(&mut g, 0, 5).unwrap();
        assert_eq!(engine.state(), QueryState::Initialized);
        assert_eq!(frontier_ids(&g, &engine.frontier), "1, 2, 3, 4, 5, 6");
        assert_eq!(g.tentative_distance(g.handle_at(0).unwrap()), Distance::ZERO);
        assert_eq!(engine.result(&g), None);

        assert!(engine.step(&mut g));
        assert_eq!(engine.state(), QueryState::Relaxing);
        assert_eq!(engine.stats().extractions, 1);
        assert_eq!(frontier_ids(&g, &engine.frontier), "2, 3, 4, 5, 6");
        assert_eq!(g.tentative_distance(g.handle_at(1).unwrap()), Distance::Finite(7));
        assert_eq!(engine.result(&g), None);

        let mut steps = 1;
        while engine.step(&mut g) {
            steps += 1;
        }
        assert_eq!(steps, 6);
        assert_eq!(engine.state(), QueryState::Finalized);
        assert_eq!(engine.result(&g), Some(PathDistance::Distance(16)));
        assert!(!engine.step(&mut g));
        assert_eq!(engine.stats().extractions, 6);
    }

    #[test]
    fn test_begin_out_of_range_keeps_state() {
        let mut g = cities();
        let mut engine = ShortestPathEngine::new();
        assert_eq!(engine.begin(&mut g, 0, 9), Err(Error::IndexOutOfRange { index: 9, len: 6 }));
        assert_eq!(engine.state(), QueryState::Uninitialized);
        assert!(g.vertices().all(|v| g.tentative_distance(v) == Distance::Unset));
    }
}


//! Vertex container.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::distance::Distance;
use crate::errors::{check_weight, EdgeDefect, Error, Result};
use crate::weight::Weight;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Caller-chosen vertex identity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

/// Reference to a vertex owned by a particular `Graph`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct VertexHandle {
    graph: u64,
    index: usize,
}

impl VertexHandle {
    /// Position of the vertex in its graph.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Directed weighted link to another vertex of the same graph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Edge {
    target: VertexHandle,
    weight: u64,
}

impl Edge {
    pub fn target(&self) -> VertexHandle {
        self.target
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }
}

/// Graph vertex with its outgoing edges.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: VertexId,
    edges: Vec<Edge>,
    tentative_distance: Distance,
}

impl Vertex {
    fn new(id: VertexId) -> Self {
        Vertex {
            id,
            edges: Vec::new(),
            tentative_distance: Distance::Unset,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Scratch distance left by the last query (or `Unset`).
    pub fn tentative_distance(&self) -> Distance {
        self.tentative_distance
    }
}

/// Directed graph with non-negative integer edge weights.
///
/// Vertices are addressed by position (insertion order). Each vertex carries a
/// scratch `tentative_distance` which path queries reset and overwrite, so a
/// graph can serve only one query at a time.
#[derive(Debug)]
pub struct Graph {
    id: u64,
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Create new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Add a vertex with no edges and an unset scratch distance.
    pub fn create_vertex(&mut self, id: u32) -> VertexHandle {
        let handle = VertexHandle {
            graph: self.id,
            index: self.vertices.len(),
        };
        self.vertices.push(Vertex::new(VertexId(id)));
        handle
    }

    /// Append a directed edge `from -> to`.
    /// Nothing is inserted if the weight is negative or a handle is foreign.
    pub fn add_edge<W: Weight>(&mut self, from: VertexHandle, to: VertexHandle, weight: W) -> Result<()> {
        let weight = check_weight(weight)?;
        self.check_handle(to)?;
        let from = self.check_handle(from)?;
        self.vertices[from].edges.push(Edge { target: to, weight });
        Ok(())
    }

    /// Append several edges starting at `from`. Either all of them are added or none.
    pub fn add_edges<W, I>(&mut self, from: VertexHandle, links: I) -> Result<()>
    where
        W: Weight,
        I: IntoIterator<Item = (VertexHandle, W)>,
    {
        let from = self.check_handle(from)?;
        let edges = links
            .into_iter()
            .map(|(to, weight)| -> Result<Edge> {
                let weight = check_weight(weight)?;
                self.check_handle(to)?;
                Ok(Edge { target: to, weight })
            })
            .collect::<Result<Vec<_>>>()?;
        self.vertices[from].edges.extend(edges);
        Ok(())
    }

    /// Vertex handles in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        let graph = self.id;
        (0..self.vertices.len()).map(move |index| VertexHandle { graph, index })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the handle was issued by this graph.
    pub fn owns(&self, handle: VertexHandle) -> bool {
        handle.graph == self.id && handle.index < self.vertices.len()
    }

    pub fn vertex(&self, handle: VertexHandle) -> Option<&Vertex> {
        if handle.graph == self.id {
            self.vertices.get(handle.index)
        } else {
            None
        }
    }

    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn handle_at(&self, index: usize) -> Option<VertexHandle> {
        if index < self.vertices.len() {
            Some(VertexHandle { graph: self.id, index })
        } else {
            None
        }
    }

    /// Handle for a position, or `IndexOutOfRange`.
    pub fn check_index(&self, index: usize) -> Result<VertexHandle> {
        self.handle_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.vertices.len(),
        })
    }

    /// First vertex with the given identity.
    pub fn find(&self, id: u32) -> Option<VertexHandle> {
        let id = VertexId(id);
        self.vertices.iter().position(|v| v.id == id).and_then(|index| self.handle_at(index))
    }

    /// Identity of the vertex an edge points to.
    pub fn edge_target_id(&self, edge: &Edge) -> Option<VertexId> {
        self.vertex(edge.target).map(Vertex::id)
    }

    /// Forget the distances of the previous query.
    pub fn reset_scratch_distances(&mut self) {
        self.vertices.iter_mut().for_each(|v| v.tentative_distance = Distance::Unset);
    }

    /// Scratch distance of a vertex. Foreign handles read as `Unset`.
    pub fn tentative_distance(&self, handle: VertexHandle) -> Distance {
        self.vertex(handle).map_or(Distance::Unset, Vertex::tentative_distance)
    }

    /// Overwrite the scratch distance of a vertex. Meant for the path search;
    /// the value is lost on the next query.
    /// Returns `false` and changes nothing if the handle is foreign.
    pub fn set_tentative_distance(&mut self, handle: VertexHandle, distance: Distance) -> bool {
        if handle.graph != self.id {
            return false;
        }
        match self.vertices.get_mut(handle.index) {
            Some(v) => {
                v.tentative_distance = distance;
                true
            }
            None => false,
        }
    }

    fn check_handle(&self, handle: VertexHandle) -> Result<usize> {
        if self.owns(handle) {
            Ok(handle.index)
        } else {
            Err(EdgeDefect::ForeignVertex.into())
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic dump: every vertex with its scratch distance and outgoing edges.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "There are {} vertices", self.vertices.len())?;
        for v in &self.vertices {
            writeln!(f, "\tShortest [{}]\t{}", v.tentative_distance, v.id)?;
            for edge in &v.edges {
                let target = self.vertices[edge.target.index].id;
                writeln!(f, "\t\t{} to {} has weight {}", v.id, target, edge.weight)?;
            }
        }
        Ok(())
    }
}

use std::ops::{Index, IndexMut, Range};

use tracing::debug;

use crate::error::{GraphError, Result};

/// Vertex identifier: a dense index in `[0, vertex_count)`.
pub type VertexId = usize;

/// A vertex id already checked against its graph.
///
/// Only [`Graph::vertex`] and the graph's own adjacency accessors create
/// one, so per-query state indexed by `Vertex` is never indexed out of
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Vertex(VertexId);

impl Vertex {
    pub(crate) fn id(self) -> VertexId {
        self.0
    }
}

/// Undirected graph with a fixed vertex set and ordered adjacency lists.
///
/// Each `add_edge(u, v)` appends `v` to `u`'s list and `u` to `v`'s list,
/// in that order. Nothing is de-duplicated: parallel edges and self-loops
/// are stored as inserted, and insertion order drives every traversal.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidArgument(
                "vertex_count must be positive".to_string(),
            ));
        }
        debug!(vertex_count, "graph created");
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    /// Bulk load from an edge list. Stops at the first edge with an
    /// out-of-range endpoint.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (src, dest) in edges {
            graph.add_edge(src, dest)?;
        }
        debug!(
            vertex_count,
            edge_count = graph.edge_count,
            "graph loaded from edge list"
        );
        Ok(graph)
    }

    /// Add an undirected edge. Both endpoints are checked before either
    /// adjacency list is touched.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId) -> Result<()> {
        let src = self.vertex(src)?.id();
        let dest = self.vertex(dest)?.id();
        self.adjacency[src].push(dest);
        self.adjacency[dest].push(src);
        self.edge_count += 1;
        Ok(())
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        let v = self.vertex(v)?;
        Ok(&self.adjacency[v.0])
    }

    /// Neighbors of a checked vertex, in insertion order. Stored ids were
    /// checked by `add_edge`.
    pub(crate) fn adjacent(
        &self,
        v: Vertex,
    ) -> impl DoubleEndedIterator<Item = Vertex> + ExactSizeIterator + '_ {
        self.adjacency[v.0].iter().map(|&id| Vertex(id))
    }

    /// The `index`-th neighbor of `v`, if any.
    pub(crate) fn neighbor_at(&self, v: Vertex, index: usize) -> Option<Vertex> {
        self.adjacency[v.0].get(index).map(|&id| Vertex(id))
    }

    /// Every vertex in ascending order, already checked.
    pub(crate) fn checked_vertices(&self) -> impl Iterator<Item = Vertex> {
        self.vertices().map(Vertex)
    }

    /// Check that `v` names a vertex of this graph.
    pub fn validate(&self, v: VertexId) -> Result<VertexId> {
        self.vertex(v).map(Vertex::id)
    }

    pub(crate) fn vertex(&self, v: VertexId) -> Result<Vertex> {
        if v < self.adjacency.len() {
            Ok(Vertex(v))
        } else {
            debug!(vertex = v, vertex_count = self.adjacency.len(), "vertex rejected");
            Err(GraphError::OutOfRange {
                vertex: v,
                vertex_count: self.adjacency.len(),
            })
        }
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.adjacency.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of `add_edge` calls (a self-loop counts once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Length of `v`'s adjacency list. A self-loop contributes 2.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        Ok(self.neighbors(v)?.len())
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> Range<VertexId> {
        0..self.adjacency.len()
    }

    /// Approximate heap usage of the adjacency storage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adjacency.capacity() * size_of::<Vec<VertexId>>();
        let entries: usize = self
            .adjacency
            .iter()
            .map(|list| list.capacity() * size_of::<VertexId>())
            .sum();
        lists + entries
    }
}

/// Dense per-vertex state for one traversal: visited flags, parents,
/// distances. Allocated fresh per query and indexed only by [`Vertex`].
#[derive(Debug, Clone)]
pub(crate) struct VertexMap<T> {
    slots: Vec<T>,
}

impl<T: Clone> VertexMap<T> {
    pub(crate) fn filled(graph: &Graph, value: T) -> Self {
        Self {
            slots: vec![value; graph.vertex_count()],
        }
    }
}

impl<T> VertexMap<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots
    }
}

impl<T> Index<Vertex> for VertexMap<T> {
    type Output = T;

    fn index(&self, v: Vertex) -> &T {
        &self.slots[v.0]
    }
}

impl<T> IndexMut<Vertex> for VertexMap<T> {
    fn index_mut(&mut self, v: Vertex) -> &mut T {
        &mut self.slots[v.0]
    }
}

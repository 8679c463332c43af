use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId, VertexMap};

/// One BFS level: every vertex first discovered at `depth` hops, in
/// discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub depth: usize,
    pub vertices: Vec<VertexId>,
}

/// A vertex found by a depth-bounded neighborhood query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub distance: usize,
}

/// Breadth-first queries over a borrowed graph.
///
/// Every query seeds a FIFO frontier with `start` and expands neighbors in
/// adjacency order. Vertices are marked at enqueue time, so each one is
/// enqueued at most once and its first discoverer becomes its parent.
#[derive(Debug, Clone, Copy)]
pub struct BreadthFirstSearch<'g> {
    graph: &'g Graph,
}

impl<'g> BreadthFirstSearch<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Visitation order of every vertex reachable from `start`.
    pub fn traverse(&self, start: VertexId) -> Result<Vec<VertexId>> {
        let start = self.graph.vertex(start)?;

        let mut visited = VertexMap::filled(self.graph, false);
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current.id());
            for next in self.graph.adjacent(current) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        debug!(start = start.id(), visited = order.len(), "bfs traverse");
        Ok(order)
    }

    /// Hop distance from `start` to every vertex; `None` if unreachable.
    pub fn distances(&self, start: VertexId) -> Result<Vec<Option<usize>>> {
        let start = self.graph.vertex(start)?;

        let mut distance: VertexMap<Option<usize>> = VertexMap::filled(self.graph, None);
        let mut queue = VecDeque::new();

        distance[start] = Some(0);
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            for next in self.graph.adjacent(current) {
                if distance[next].is_none() {
                    distance[next] = Some(depth + 1);
                    queue.push_back((next, depth + 1));
                }
            }
        }

        Ok(distance.into_vec())
    }

    /// Fewest-hop path from `start` to `end`, both endpoints included.
    ///
    /// Empty when `end` is unreachable. `start == end` yields `[start]`.
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Result<Vec<VertexId>> {
        let start = self.graph.vertex(start)?;
        let end = self.graph.vertex(end)?;

        if start == end {
            return Ok(vec![start.id()]);
        }

        // Start is its own parent; None means undiscovered.
        let mut parent: VertexMap<Option<Vertex>> = VertexMap::filled(self.graph, None);
        let mut queue = VecDeque::new();

        parent[start] = Some(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.graph.adjacent(current) {
                if parent[next].is_none() {
                    parent[next] = Some(current);

                    if next == end {
                        let path = reconstruct_path(&parent, start, end);
                        debug!(
                            start = start.id(),
                            end = end.id(),
                            hops = path.len() - 1,
                            "bfs shortest path"
                        );
                        return Ok(path);
                    }

                    queue.push_back(next);
                }
            }
        }

        debug!(start = start.id(), end = end.id(), "bfs shortest path: unreachable");
        Ok(Vec::new())
    }

    /// Reachable vertices grouped by depth, shallowest first. Level 0 is
    /// exactly `[start]`.
    pub fn levels(&self, start: VertexId) -> Result<Vec<Level>> {
        let start = self.graph.vertex(start)?;

        let mut visited = VertexMap::filled(self.graph, false);
        let mut queue = VecDeque::new();
        let mut levels = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while !queue.is_empty() {
            let width = queue.len();
            let mut vertices = Vec::with_capacity(width);

            for _ in 0..width {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                vertices.push(current.id());
                for next in self.graph.adjacent(current) {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }

            levels.push(Level {
                depth: levels.len(),
                vertices,
            });
        }

        debug!(start = start.id(), depth = levels.len(), "bfs levels");
        Ok(levels)
    }

    /// Every vertex within `max_depth` hops of `start`, excluding `start`,
    /// in discovery order.
    pub fn neighborhood(&self, start: VertexId, max_depth: usize) -> Result<Vec<Neighbor>> {
        let start = self.graph.vertex(start)?;

        let mut visited = VertexMap::filled(self.graph, false);
        let mut queue = VecDeque::new();
        let mut found = Vec::new();

        visited[start] = true;
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }

            for next in self.graph.adjacent(current) {
                if !visited[next] {
                    visited[next] = true;
                    found.push(Neighbor {
                        vertex: next.id(),
                        distance: depth + 1,
                    });
                    queue.push_back((next, depth + 1));
                }
            }
        }

        debug!(start = start.id(), max_depth, found = found.len(), "bfs neighborhood");
        Ok(found)
    }

    /// Whether `end` is reachable from `start`. Stops at discovery.
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> Result<bool> {
        let start = self.graph.vertex(start)?;
        let end = self.graph.vertex(end)?;

        if start == end {
            return Ok(true);
        }

        let mut visited = VertexMap::filled(self.graph, false);
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.graph.adjacent(current) {
                if next == end {
                    return Ok(true);
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        Ok(false)
    }
}

/// Walk parent links from `end` back to `start`, then reverse.
fn reconstruct_path(
    parent: &VertexMap<Option<Vertex>>,
    start: Vertex,
    end: Vertex,
) -> Vec<VertexId> {
    let mut path = vec![end.id()];
    let mut current = end;

    while current != start {
        match parent[current] {
            Some(prev) => {
                path.push(prev.id());
                current = prev;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Vertex, VertexId, VertexMap};

/// Depth-first queries over a borrowed graph.
///
/// Only [`traverse_recursive`](Self::traverse_recursive) recurses, nesting
/// one call per tree edge; prefer
/// [`traverse_iterative`](Self::traverse_iterative) for very deep graphs.
/// The other queries keep an explicit stack of frames, one per vertex on
/// the current DFS path, each with a cursor into that vertex's adjacency
/// list. Neighbors are scanned in adjacency order, so visit order and
/// backtracking match the recursive formulation.
#[derive(Debug, Clone, Copy)]
pub struct DepthFirstSearch<'g> {
    graph: &'g Graph,
}

impl<'g> DepthFirstSearch<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Pre-order visit: mark, record, then recurse into each unvisited
    /// neighbor in adjacency order.
    pub fn traverse_recursive(&self, start: VertexId) -> Result<Vec<VertexId>> {
        let start = self.graph.vertex(start)?;

        let mut visited = VertexMap::filled(self.graph, false);
        let mut order = Vec::new();
        self.visit(start, &mut visited, &mut order);

        debug!(start = start.id(), visited = order.len(), "dfs traverse (recursive)");
        Ok(order)
    }

    /// Explicit-stack traversal yielding the same order as
    /// [`traverse_recursive`](Self::traverse_recursive).
    pub fn traverse_iterative(&self, start: VertexId) -> Result<Vec<VertexId>> {
        let start = self.graph.vertex(start)?;

        let mut visited = VertexMap::filled(self.graph, false);
        let order = self.walk(start, &mut visited);

        debug!(start = start.id(), visited = order.len(), "dfs traverse (iterative)");
        Ok(order)
    }

    /// Some path from `start` to `end` found by backtracking search, not
    /// necessarily the shortest. Empty if `end` is unreachable.
    pub fn find_path(&self, start: VertexId, end: VertexId) -> Result<Vec<VertexId>> {
        let start = self.graph.vertex(start)?;
        let end = self.graph.vertex(end)?;

        let path = self.search(start, end);
        if path.is_empty() {
            debug!(start = start.id(), end = end.id(), "dfs path: unreachable");
        } else {
            debug!(
                start = start.id(),
                end = end.id(),
                hops = path.len() - 1,
                "dfs path found"
            );
        }
        Ok(path)
    }

    /// True if any component contains a back edge to a visited vertex other
    /// than the current vertex's tree parent.
    ///
    /// Self-loops and parallel edges both count as cycles.
    pub fn has_cycle(&self) -> bool {
        let mut visited = VertexMap::filled(self.graph, false);

        for root in self.graph.checked_vertices() {
            if !visited[root] && self.find_back_edge(root, &mut visited) {
                debug!(root = root.id(), "dfs cycle found");
                return true;
            }
        }
        false
    }

    /// Number of maximal sets of mutually reachable vertices.
    pub fn connected_component_count(&self) -> usize {
        let mut visited = VertexMap::filled(self.graph, false);
        let mut count = 0;

        for root in self.graph.checked_vertices() {
            if !visited[root] {
                self.walk(root, &mut visited);
                count += 1;
            }
        }

        debug!(components = count, "dfs component count");
        count
    }

    /// Every connected component in DFS pre-order from its smallest vertex,
    /// ordered by that vertex.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut visited = VertexMap::filled(self.graph, false);

        self.graph
            .checked_vertices()
            .filter_map(|root| (!visited[root]).then(|| self.walk(root, &mut visited)))
            .collect()
    }

    /// Vertices recorded when the DFS from `start` first reaches them at
    /// exactly `target_depth`; the search does not descend past them.
    ///
    /// Only one path is followed into each vertex, so a vertex reached
    /// first along a longer route is reported at that route's depth even if
    /// a shorter route exists.
    pub fn nodes_at_depth(&self, start: VertexId, target_depth: usize) -> Result<Vec<VertexId>> {
        let start = self.graph.vertex(start)?;

        let found = self.collect_at_depth(start, target_depth);

        debug!(
            start = start.id(),
            target_depth,
            found = found.len(),
            "dfs nodes at depth"
        );
        Ok(found)
    }

    fn visit(&self, node: Vertex, visited: &mut VertexMap<bool>, order: &mut Vec<VertexId>) {
        visited[node] = true;
        order.push(node.id());

        for next in self.graph.adjacent(node) {
            if !visited[next] {
                self.visit(next, visited, order);
            }
        }
    }

    /// Stack walk sharing `visited` with the caller. Vertices are marked at
    /// pop time and neighbors pushed in reverse adjacency order, so pops
    /// come off in adjacency order.
    fn walk(&self, start: Vertex, visited: &mut VertexMap<bool>) -> Vec<VertexId> {
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            order.push(current.id());

            for next in self.graph.adjacent(current).rev() {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }

        order
    }

    /// Backtracking search. The frame stack is the current path: a frame
    /// is popped once its neighbors are exhausted.
    fn search(&self, start: Vertex, target: Vertex) -> Vec<VertexId> {
        let mut visited = VertexMap::filled(self.graph, false);
        let mut stack: Vec<(Vertex, usize)> = vec![(start, 0)];
        visited[start] = true;

        if start == target {
            return vec![start.id()];
        }

        while let Some((current, cursor)) = stack.last_mut() {
            let Some(next) = self.graph.neighbor_at(*current, *cursor) else {
                // Dead end: drop this vertex from the path.
                stack.pop();
                continue;
            };
            *cursor += 1;

            if !visited[next] {
                visited[next] = true;
                stack.push((next, 0));
                if next == target {
                    return stack.iter().map(|&(v, _)| v.id()).collect();
                }
            }
        }

        Vec::new()
    }

    /// Frames are `(vertex, tree parent, neighbor cursor)`.
    fn find_back_edge(&self, root: Vertex, visited: &mut VertexMap<bool>) -> bool {
        let mut stack: Vec<(Vertex, Option<Vertex>, usize)> = vec![(root, None, 0)];
        visited[root] = true;

        while let Some((node, parent, cursor)) = stack.last_mut() {
            let Some(next) = self.graph.neighbor_at(*node, *cursor) else {
                stack.pop();
                continue;
            };
            *cursor += 1;
            let (node, parent) = (*node, *parent);

            if !visited[next] {
                visited[next] = true;
                stack.push((next, Some(node), 0));
            } else if Some(next) != parent {
                return true;
            }
        }
        false
    }

    /// Frames are `(vertex, depth, neighbor cursor)`. A vertex reached at
    /// `target_depth` is recorded and never gets a frame of its own.
    fn collect_at_depth(&self, start: Vertex, target_depth: usize) -> Vec<VertexId> {
        let mut visited = VertexMap::filled(self.graph, false);
        visited[start] = true;

        if target_depth == 0 {
            return vec![start.id()];
        }

        let mut found = Vec::new();
        let mut stack: Vec<(Vertex, usize, usize)> = vec![(start, 0, 0)];

        while let Some((node, depth, cursor)) = stack.last_mut() {
            let Some(next) = self.graph.neighbor_at(*node, *cursor) else {
                stack.pop();
                continue;
            };
            *cursor += 1;

            if visited[next] {
                continue;
            }
            visited[next] = true;

            let next_depth = *depth + 1;
            if next_depth == target_depth {
                found.push(next.id());
            } else {
                stack.push((next, next_depth, 0));
            }
        }

        found
    }
}

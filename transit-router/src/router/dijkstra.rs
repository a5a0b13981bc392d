//! Single-pair shortest paths over non-negative weights.
//!
//! A textbook Dijkstra with a binary heap. All working state is local to one
//! call, so a graph can be queried from several threads at once.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use super::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// A shortest path: total weight and the edges traversed, source first.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct QueueItem {
    vertex: VertexId,
    distance: f64,
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the closest vertex first; the vertex index
// breaks ties so the pop order is fully determined.
impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Find a minimum-weight path from `from` to `to`.
///
/// Returns `None` if `to` is unreachable. A path from a vertex to itself is
/// empty with weight 0. Among equally short paths the one found first wins;
/// which one that is depends on edge insertion order and is not otherwise
/// specified.
///
/// # Panics
///
/// Panics if a vertex is out of range, or if the search relaxes an edge
/// with a negative or NaN weight.
pub fn find_shortest_path(
    graph: &DirectedWeightedGraph,
    from: VertexId,
    to: VertexId,
) -> Option<PathInfo> {
    let n = graph.vertex_count();
    assert!(from.0 < n && to.0 < n, "vertex out of range");

    let mut distance = vec![f64::INFINITY; n];
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
    let mut settled = vec![false; n];

    distance[from.0] = 0.0;
    let mut queue = BinaryHeap::new();
    queue.push(QueueItem {
        vertex: from,
        distance: 0.0,
    });

    while let Some(QueueItem { vertex, distance: d }) = queue.pop() {
        if settled[vertex.0] {
            continue;
        }
        settled[vertex.0] = true;
        if vertex == to {
            break;
        }

        for &edge_id in graph.outgoing(vertex) {
            let edge = graph.edge(edge_id);
            assert!(
                edge.weight >= 0.0,
                "edge {edge_id:?} has invalid weight {}",
                edge.weight
            );
            let candidate = d + edge.weight;
            if candidate < distance[edge.to.0] {
                distance[edge.to.0] = candidate;
                prev_edge[edge.to.0] = Some(edge_id);
                queue.push(QueueItem {
                    vertex: edge.to,
                    distance: candidate,
                });
            }
        }
    }

    if !settled[to.0] {
        trace!(?from, ?to, "target not reachable");
        return None;
    }

    Some(PathInfo {
        weight: distance[to.0],
        edges: reconstruct(graph, &prev_edge, from, to),
    })
}

fn reconstruct(
    graph: &DirectedWeightedGraph,
    prev_edge: &[Option<EdgeId>],
    from: VertexId,
    to: VertexId,
) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    let mut current = to;
    while current != from {
        // Every settled vertex other than the source has a predecessor.
        let Some(edge_id) = prev_edge[current.0] else {
            break;
        };
        edges.push(edge_id);
        current = graph.edge(edge_id).from;
    }
    edges.reverse();
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::graph::Edge;

    fn graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> DirectedWeightedGraph {
        let mut g = DirectedWeightedGraph::with_vertex_count(vertex_count);
        for &(from, to, weight) in edges {
            g.add_edge(Edge {
                from: VertexId(from),
                to: VertexId(to),
                weight,
            });
        }
        g
    }

    fn ids(v: &[usize]) -> Vec<EdgeId> {
        v.iter().copied().map(EdgeId).collect()
    }

    #[test]
    fn prefers_cheaper_detour() {
        let g = graph(3, &[(0, 2, 10.0), (0, 1, 2.0), (1, 2, 3.0)]);
        let path = find_shortest_path(&g, VertexId(0), VertexId(2)).unwrap();
        assert_eq!(path.weight, 5.0);
        assert_eq!(path.edges, ids(&[1, 2]));
    }

    #[test]
    fn picks_fastest_parallel_edge() {
        let g = graph(2, &[(0, 1, 4.0), (0, 1, 1.5), (0, 1, 3.0)]);
        let path = find_shortest_path(&g, VertexId(0), VertexId(1)).unwrap();
        assert_eq!(path.weight, 1.5);
        assert_eq!(path.edges, ids(&[1]));
    }

    #[test]
    fn source_equals_target() {
        let g = graph(2, &[(0, 1, 1.0)]);
        let path = find_shortest_path(&g, VertexId(0), VertexId(0)).unwrap();
        assert_eq!(path.weight, 0.0);
        assert!(path.edges.is_empty());
    }

    #[test]
    fn unreachable_target() {
        let g = graph(3, &[(0, 1, 1.0), (2, 0, 1.0)]);
        assert!(find_shortest_path(&g, VertexId(0), VertexId(2)).is_none());
    }

    #[test]
    fn edges_are_directed() {
        let g = graph(2, &[(0, 1, 1.0)]);
        assert!(find_shortest_path(&g, VertexId(1), VertexId(0)).is_none());
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        let path = find_shortest_path(&g, VertexId(0), VertexId(2)).unwrap();
        assert_eq!(path.weight, 0.0);
        assert_eq!(path.edges, ids(&[0, 1]));
    }

    #[test]
    fn cycles_terminate() {
        let g = graph(3, &[(0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0)]);
        let path = find_shortest_path(&g, VertexId(0), VertexId(2)).unwrap();
        assert_eq!(path.weight, 2.0);
    }

    #[test]
    fn repeated_queries_agree() {
        let g = graph(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)]);
        let a = find_shortest_path(&g, VertexId(0), VertexId(3)).unwrap();
        let b = find_shortest_path(&g, VertexId(0), VertexId(3)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.weight, 2.0);
    }

    #[test]
    #[should_panic(expected = "invalid weight")]
    fn negative_weight_panics() {
        let g = graph(2, &[(0, 1, -1.0)]);
        find_shortest_path(&g, VertexId(0), VertexId(1));
    }

    #[test]
    #[should_panic(expected = "invalid weight")]
    fn nan_weight_panics() {
        let g = graph(2, &[(0, 1, f64::NAN)]);
        find_shortest_path(&g, VertexId(0), VertexId(1));
    }
}

use std::collections::VecDeque;

use log::warn;

use crate::prelude::*;

use super::{Algorithm, SortResult, SortStats, TopologicalSort};

/// L ← Empty list that will contain the sorted elements
/// S ← Queue of all nodes with no incoming edge, ascending
///
/// while S is not empty do
///     remove the front node n from S
///     add n to L
///     for each node m with an edge e from n to m do
///         decrement the in-degree of m
///         if m has no other incoming edges then
///             push m to the back of S
///
/// if L is shorter than the node count then
///     return error   (graph has at least one cycle)
/// else
///     return L   (a topologically sorted order)
///
/// In-degrees come from a full scan of the adjacency matrix rather than
/// the successor lists, so the sort always pays the `O(V²)` matrix cost.
///
/// Counting: one comparison per matrix cell scanned and per successor
/// entry examined. One operation per in-degree increment, per decrement
/// and per enqueue, and two per dequeue-and-append.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRemoval;

impl TopologicalSort for SourceRemoval {
    const ALGORITHM: Algorithm = Algorithm::SourceRemoval;

    fn sort(&self, graph: &Graph) -> Result<SortResult> {
        let n = graph.size();
        let matrix = graph.matrix();
        let mut stats = SortStats {
            vertices: n,
            edges: graph.n_edges(),
            ..Default::default()
        };

        let mut in_degree = vec![0usize; n];
        for from in 0..n {
            for (to, &cell) in matrix.row(from).iter().enumerate() {
                stats.comparisons += 1;
                if cell {
                    in_degree[to] += 1;
                    stats.operations += 1;
                }
            }
        }

        let mut queue = VecDeque::with_capacity(n);
        for vertex in (0..n).filter(|&v| in_degree[v] == 0) {
            queue.push_back(vertex);
            stats.operations += 1;
        }

        // Duplicate successor entries share one matrix cell, so each
        // successor is relaxed at most once per dequeued vertex.
        let mut relaxed_by = vec![usize::MAX; n];
        let mut order = Vec::with_capacity(n);
        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            stats.operations += 2;

            for &successor in graph.successors(vertex) {
                stats.comparisons += 1;
                if relaxed_by[successor] == vertex {
                    continue;
                }
                relaxed_by[successor] = vertex;
                in_degree[successor] -= 1;
                stats.operations += 1;
                if in_degree[successor] == 0 {
                    queue.push_back(successor);
                    stats.operations += 1;
                }
            }
        }

        if order.len() != n {
            warn!("source removal ordered {} of {} vertices", order.len(), n);
            return Err(Error::IncompleteOrder {
                sorted: order.len(),
                expected: n,
            });
        }

        Ok(SortResult { order, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_order_and_counts() {
        let graph = Graph::new(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let result = SourceRemoval.sort(&graph).unwrap();
        assert_eq!(result.order, vec![0, 1, 2, 3]);
        // 16 cells scanned + 4 successor entries.
        assert_eq!(result.stats.comparisons, 20);
        // 4 increments, 1 seed enqueue, 4 dequeues (x2), 4 decrements,
        // 3 enqueues.
        assert_eq!(result.stats.operations, 20);
        assert_eq!(result.stats.vertices, 4);
        assert_eq!(result.stats.edges, 4);
    }

    #[test]
    fn sources_seeded_in_index_order() {
        let graph = Graph::new(4, [(3, 0), (1, 2)]).unwrap();
        let result = SourceRemoval.sort(&graph).unwrap();
        assert_eq!(result.order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn scan_is_quadratic_without_edges() {
        let graph = Graph::new(5, []).unwrap();
        let result = SourceRemoval.sort(&graph).unwrap();
        assert_eq!(result.order, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.stats.comparisons, 25);
        assert_eq!(result.stats.operations, 5 + 5 * 2);
    }

    #[test]
    fn duplicate_edge_does_not_release_successor_early() {
        // Vertex 1 has two distinct parents; the duplicated 0 -> 1 must not
        // count as both of them.
        let graph = Graph::new(3, [(0, 1), (0, 1), (2, 1)]).unwrap();
        let result = SourceRemoval.sort(&graph).unwrap();
        assert_eq!(result.order, vec![0, 2, 1]);
        assert!(graph.is_topological_order(&result.order));
    }

    #[test]
    fn cyclic_input_yields_incomplete_order() {
        // Construction never produces a cyclic graph; assemble one by hand
        // to reach the guard.
        let mut graph = Graph::new(3, [(0, 1), (1, 2)]).unwrap();
        graph.matrix.set(2, 1);
        graph.adjacency[2].push(1);
        graph.n_edges += 1;

        let err = SourceRemoval.sort(&graph).unwrap_err();
        assert_eq!(
            err,
            Error::IncompleteOrder {
                sorted: 1,
                expected: 3
            }
        );
    }
}

use crate::prelude::*;
use crate::utils::frame::Frame;

use super::{Algorithm, SortResult, SortStats, TopologicalSort};

/// Depth-first topological sort.
///
/// Roots are tried in increasing index order and successors in edge
/// input order. A vertex is emitted when all of its descendants are
/// finished; reversing that postorder yields the topological order.
///
/// Counting: one operation when a vertex is entered and one when it is
/// finished, one comparison for every outgoing edge looked at.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl TopologicalSort for DepthFirst {
    const ALGORITHM: Algorithm = Algorithm::Dfs;

    fn sort(&self, graph: &Graph) -> Result<SortResult> {
        let adjacency = graph.adjacency();
        let mut stats = SortStats {
            vertices: graph.size(),
            edges: graph.n_edges(),
            ..Default::default()
        };
        let mut visited = vec![false; graph.size()];
        let mut postorder = Vec::with_capacity(graph.size());
        let mut stack = Vec::new();

        for root in 0..graph.size() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stats.operations += 1;
            stack.push(Frame::new(root));

            while let Some(frame) = stack.last_mut() {
                match frame.next_successor(adjacency) {
                    Some(successor) => {
                        stats.comparisons += 1;
                        if !visited[successor] {
                            visited[successor] = true;
                            stats.operations += 1;
                            stack.push(Frame::new(successor));
                        }
                    }
                    None => {
                        postorder.push(frame.vertex);
                        stats.operations += 1;
                        stack.pop();
                    }
                }
            }
        }

        postorder.reverse();
        Ok(SortResult {
            order: postorder,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_order_and_counts() {
        let graph = Graph::new(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let result = DepthFirst.sort(&graph).unwrap();
        assert_eq!(result.order, vec![0, 2, 1, 3]);
        assert_eq!(
            result.stats,
            SortStats {
                comparisons: 4,
                operations: 8,
                vertices: 4,
                edges: 4,
            }
        );
    }

    #[test]
    fn later_roots_are_prepended() {
        // 2 -> 0 -> 1: the traversal from 0 finishes first, then root 2
        // is prepended in front of it.
        let graph = Graph::new(3, [(2, 0), (0, 1)]).unwrap();
        let result = DepthFirst.sort(&graph).unwrap();
        assert_eq!(result.order, vec![2, 0, 1]);
        assert!(graph.is_topological_order(&result.order));
    }

    #[test]
    fn insertion_order_drives_result() {
        let a = Graph::new(3, [(0, 1), (0, 2)]).unwrap();
        let b = Graph::new(3, [(0, 2), (0, 1)]).unwrap();
        assert_eq!(DepthFirst.sort(&a).unwrap().order, vec![0, 2, 1]);
        assert_eq!(DepthFirst.sort(&b).unwrap().order, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_edges_are_each_compared() {
        let graph = Graph::new(2, [(0, 1), (0, 1)]).unwrap();
        let result = DepthFirst.sort(&graph).unwrap();
        assert_eq!(result.order, vec![0, 1]);
        assert_eq!(result.stats.comparisons, 2);
        assert_eq!(result.stats.operations, 4);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 5_000;
        let mut builder = GraphBuilder::new(n);
        builder.add_path(0..n);
        let graph = builder.build().unwrap();
        let result = DepthFirst.sort(&graph).unwrap();
        assert_eq!(result.order.len(), n as usize);
        assert_eq!(result.order.first(), Some(&0));
        assert_eq!(result.order.last(), Some(&(n as usize - 1)));
    }
}

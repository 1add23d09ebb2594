//! Back-edge detection over an adjacency list.
//!
//! The detector is a three-colour depth-first search: a vertex is
//! *unvisited*, *on the active path*, or *finished*. Reaching a vertex
//! that is still on the active path means the path closes on itself.
//! Finished vertices are never expanded again, so each vertex is pushed
//! exactly once per pass no matter which component it lives in.

use crate::utils::frame::Frame;

pub struct CycleDetector<'a> {
    adjacency: &'a [Vec<usize>],
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    stack: Vec<Frame>,
}

impl<'a> CycleDetector<'a> {
    pub fn new(adjacency: &'a [Vec<usize>]) -> Self {
        let n = adjacency.len();
        CycleDetector {
            adjacency,
            visited: vec![false; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
        }
    }

    /// Returns `true` iff the adjacency list contains a directed cycle.
    pub fn has_cycle(self) -> bool {
        self.find_cycle().is_some()
    }

    /// Returns one cycle as a closed vertex path (`[a, b, .., a]`), or
    /// `None` if the graph is acyclic.
    ///
    /// Top-level traversals start from unvisited vertices in increasing
    /// index order and the search stops at the first back edge found.
    pub fn find_cycle(mut self) -> Option<Vec<usize>> {
        for root in 0..self.adjacency.len() {
            if self.visited[root] {
                continue;
            }
            if let Some(cycle) = self.visit(root) {
                return Some(cycle);
            }
        }
        None
    }

    fn push(&mut self, vertex: usize) {
        self.visited[vertex] = true;
        self.on_stack[vertex] = true;
        self.stack.push(Frame::new(vertex));
    }

    fn visit(&mut self, root: usize) -> Option<Vec<usize>> {
        self.push(root);
        while let Some(frame) = self.stack.last_mut() {
            match frame.next_successor(self.adjacency) {
                Some(successor) if self.on_stack[successor] => {
                    return Some(self.closed_path(successor));
                }
                Some(successor) if !self.visited[successor] => self.push(successor),
                Some(_) => {}
                None => {
                    let vertex = frame.vertex;
                    self.stack.pop();
                    self.on_stack[vertex] = false;
                }
            }
        }
        None
    }

    /// The active path from `target` to the top of the stack, closed by
    /// the back edge into `target`.
    fn closed_path(&self, target: usize) -> Vec<usize> {
        let start = self
            .stack
            .iter()
            .position(|frame| frame.vertex == target)
            .unwrap_or(0);
        let mut cycle: Vec<usize> = self.stack[start..].iter().map(|f| f.vertex).collect();
        cycle.push(target);
        cycle
    }
}

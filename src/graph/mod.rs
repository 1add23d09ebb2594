mod builder;
pub mod cycle;
mod debug;
mod matrix;

pub use builder::GraphBuilder;
pub use cycle::CycleDetector;
pub use matrix::AdjacencyMatrix;

use crate::prelude::*;

/// A validated directed acyclic graph over the vertices `0..size`.
///
/// The edge set is held twice, as a dense [`AdjacencyMatrix`] and as a
/// per-vertex successor list in edge input order. Both are filled by
/// [`GraphBuilder::build`] and never change afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    pub(crate) size: usize,
    pub(crate) matrix: AdjacencyMatrix,
    pub(crate) adjacency: Vec<Vec<usize>>,
    pub(crate) n_edges: usize,
    pub(crate) sources: Vec<usize>,
    pub(crate) sinks: Vec<usize>,
}

impl Graph {
    /// Validates `vertices` and `edges` and builds the graph, or returns
    /// the first problem found.
    pub fn new(vertices: i64, edges: impl IntoIterator<Item = (i64, i64)>) -> Result<Graph> {
        let mut builder = GraphBuilder::new(vertices);
        builder.extend(edges);
        builder.build()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of accepted edges, duplicates included.
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    #[inline]
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    #[inline]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Successors of `vertex` in edge input order.
    ///
    /// # Panics
    ///
    /// If `vertex >= self.size()`.
    #[inline]
    pub fn successors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    #[inline]
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.size && to < self.size && self.matrix.get(from, to)
    }

    /// Vertices without incoming edges, ascending.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Vertices without outgoing edges, ascending.
    pub fn sinks(&self) -> &[usize] {
        &self.sinks
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, children)| children.iter().map(move |&to| (from, to)))
    }

    /// Checks that `order` is a permutation of `0..size` in which every
    /// edge `u -> v` has `u` before `v`.
    pub fn is_topological_order(&self, order: &[usize]) -> bool {
        if order.len() != self.size {
            return false;
        }
        let mut position = vec![usize::MAX; self.size];
        for (i, &vertex) in order.iter().enumerate() {
            if vertex >= self.size || position[vertex] != usize::MAX {
                return false;
            }
            position[vertex] = i;
        }
        self.edges().all(|(from, to)| position[from] < position[to])
    }
}

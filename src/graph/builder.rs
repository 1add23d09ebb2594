use log::debug;

use super::{cycle::CycleDetector, matrix::AdjacencyMatrix, Graph};
use crate::prelude::*;

#[derive(Clone, Debug)]
enum EdgeInput {
    Pair(i64, i64),
    Malformed(String),
}

/// Collects a vertex count and edges, then validates everything in
/// [`GraphBuilder::build`].
///
/// Nothing is checked while edges are added; `build` walks them in
/// insertion order and stops at the first invalid one.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    vertices: i64,
    edges: Vec<EdgeInput>,
}

fn validate_vertex_count(vertices: i64) -> Result<usize> {
    if vertices <= 0 {
        return Err(Error::InvalidVertexCount(vertices.to_string()));
    }
    usize::try_from(vertices).map_err(|_| Error::InvalidVertexCount(vertices.to_string()))
}

fn validate_edge(index: usize, edge: EdgeInput, size: usize) -> Result<(usize, usize)> {
    let (from, to) = match edge {
        EdgeInput::Pair(from, to) => (from, to),
        EdgeInput::Malformed(reason) => {
            return Err(Error::InvalidEdgeFormat(format!("edge #{index} {reason}")))
        }
    };
    let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < size);
    let (Some(from_idx), Some(to_idx)) = (in_range(from), in_range(to)) else {
        return Err(Error::VertexOutOfRange {
            index,
            from,
            to,
            max: size - 1,
        });
    };
    if from_idx == to_idx {
        return Err(Error::SelfLoopDetected {
            index,
            vertex: from_idx,
        });
    }
    Ok((from_idx, to_idx))
}

impl GraphBuilder {
    pub fn new(vertices: i64) -> Self {
        GraphBuilder {
            vertices,
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, from: i64, to: i64) -> &mut Self {
        self.edges.push(EdgeInput::Pair(from, to));
        self
    }

    /// Adds an edge given as an untyped slice. Anything other than
    /// exactly two elements fails the build with `InvalidEdgeFormat`.
    pub fn add_raw_edge(&mut self, edge: &[i64]) -> &mut Self {
        let input = match *edge {
            [from, to] => EdgeInput::Pair(from, to),
            _ => EdgeInput::Malformed(format!(
                "must have exactly 2 endpoints, found {}",
                edge.len()
            )),
        };
        self.edges.push(input);
        self
    }

    /// Records an edge that an upstream parser already found malformed,
    /// so it fails the build at its position in the input.
    pub(crate) fn add_malformed(&mut self, reason: impl Into<String>) -> &mut Self {
        self.edges.push(EdgeInput::Malformed(reason.into()));
        self
    }

    pub fn add_path(&mut self, path: impl IntoIterator<Item = i64>) -> &mut Self {
        let mut path = path.into_iter().peekable();
        while let (Some(from), Some(&to)) = (path.next(), path.peek()) {
            self.add_edge(from, to);
        }
        self
    }

    pub fn extend(&mut self, edges: impl IntoIterator<Item = (i64, i64)>) -> &mut Self {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
        self
    }

    pub fn build(self) -> Result<Graph> {
        let size = validate_vertex_count(self.vertices)?;

        let mut matrix = AdjacencyMatrix::new(size)?;
        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        adjacency
            .try_reserve_exact(size)
            .map_err(|_| Error::InvalidVertexCount(size.to_string()))?;
        adjacency.resize_with(size, Vec::new);
        let mut n_edges = 0;

        for (index, edge) in self.edges.into_iter().enumerate() {
            let (from, to) = validate_edge(index, edge, size)?;
            // Duplicates keep their adjacency entry and count; the
            // matrix cell is simply set again.
            matrix.set(from, to);
            adjacency[from].push(to);
            n_edges += 1;
        }

        if let Some(cycle) = CycleDetector::new(&adjacency).find_cycle() {
            debug!("rejecting graph with {size} vertices, cycle {cycle:?}");
            return Err(Error::CycleDetected { cycle });
        }

        let mut has_parent = vec![false; size];
        adjacency
            .iter()
            .flatten()
            .for_each(|&child| has_parent[child] = true);
        let sources = (0..size).filter(|&v| !has_parent[v]).collect();
        let sinks = (0..size).filter(|&v| adjacency[v].is_empty()).collect();

        debug!("built graph with {size} vertices and {n_edges} edges");

        Ok(Graph {
            size,
            matrix,
            adjacency,
            n_edges,
            sources,
            sinks,
        })
    }
}

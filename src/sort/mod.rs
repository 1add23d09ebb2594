//! Instrumented topological sorts.
//!
//! Both algorithms borrow a [`Graph`] immutably and return a
//! [`SortResult`]: the order they produced plus the comparison and
//! operation counts they accumulated on the way. Counts are part of the
//! result rather than global state, so a graph can be sorted any number
//! of times and from any number of places.

mod dfs;
mod source_removal;

pub use dfs::DepthFirst;
pub use source_removal::SourceRemoval;

use crate::prelude::*;

/// Counters reported by a single sort run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortStats {
    pub comparisons: u64,
    pub operations: u64,
    pub vertices: usize,
    pub edges: usize,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortResult {
    pub order: Vec<usize>,
    pub stats: SortStats,
}

pub trait TopologicalSort {
    const ALGORITHM: Algorithm;

    fn sort(&self, graph: &Graph) -> Result<SortResult>;
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Reverse postorder of a depth-first search.
    Dfs,
    /// Kahn's algorithm: repeatedly remove a vertex with no incoming edges.
    SourceRemoval,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dfs, Algorithm::SourceRemoval];

    pub fn sort(self, graph: &Graph) -> Result<SortResult> {
        match self {
            Algorithm::Dfs => DepthFirst.sort(graph),
            Algorithm::SourceRemoval => SourceRemoval.sort(graph),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::SourceRemoval => "source-removal",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm `{0}`, expected `dfs` or `source-removal`")]
pub struct UnknownAlgorithm(pub String);

impl std::str::FromStr for Algorithm {
    type Err = UnknownAlgorithm;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "source-removal" | "source_removal" | "kahn" => Ok(Algorithm::SourceRemoval),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("Kahn".parse::<Algorithm>(), Ok(Algorithm::SourceRemoval));
        assert_eq!(
            "bfs".parse::<Algorithm>().unwrap_err().to_string(),
            "Unknown algorithm `bfs`, expected `dfs` or `source-removal`"
        );
    }

    #[test]
    fn dispatch_matches_direct_call() {
        let graph = Graph::new(3, [(2, 0), (0, 1)]).unwrap();
        assert_eq!(
            Algorithm::Dfs.sort(&graph).unwrap(),
            DepthFirst.sort(&graph).unwrap()
        );
        assert_eq!(
            Algorithm::SourceRemoval.sort(&graph).unwrap(),
            SourceRemoval.sort(&graph).unwrap()
        );
    }
}

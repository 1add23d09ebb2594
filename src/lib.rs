//! Validated DAG construction with two instrumented topological sorts
//! and a small benchmark harness to compare them.
//!
//! ```
//! use dagsort::prelude::*;
//!
//! let graph = Graph::new(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! let run = run_benchmark(&graph, Algorithm::Dfs).unwrap();
//!
//! assert_eq!(run.result.order, [0, 2, 1, 3]);
//! assert!(graph.is_topological_order(&run.result.order));
//! assert!(run.timings.min <= run.timings.median);
//! ```

pub mod bench;
pub mod error;
pub mod graph;
#[cfg(feature = "json")]
mod readwrite;
pub mod sort;
mod utils;

/// Prelude of data types and functionality.
pub mod prelude {
    pub use crate::bench::{
        compare, run_benchmark, Benchmark, BenchmarkConfig, BenchmarkResult, Comparison, Timings,
    };
    pub use crate::error::*;
    pub use crate::graph::{Graph, GraphBuilder};
    pub use crate::sort::{Algorithm, SortResult, SortStats, TopologicalSort};
}

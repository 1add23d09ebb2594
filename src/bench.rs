//! Wall-clock benchmarking of the sort algorithms.
//!
//! A run executes the algorithm a few times untimed to warm caches, then
//! times each of the following iterations separately. The sort result of
//! the last timed iteration is returned alongside the timing summary;
//! because sorts are deterministic and graphs immutable, every iteration
//! produces that same result.

use std::hint::black_box;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::prelude::*;
use crate::sort::{DepthFirst, SortResult, SourceRemoval, TopologicalSort};

pub const DEFAULT_WARMUP_ITERATIONS: usize = 3;
pub const DEFAULT_TIMED_ITERATIONS: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub warmup_iterations: usize,
    pub timed_iterations: NonZeroUsize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            timed_iterations: DEFAULT_TIMED_ITERATIONS,
        }
    }
}

/// Summary of the timed iterations of one run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Element `len / 2` of the ascending samples. For an even number of
    /// samples this is the upper of the two middle values, not their mean.
    pub median: Duration,
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl Timings {
    /// Returns `None` for an empty sample set.
    pub fn from_samples(samples: &[Duration]) -> Option<Timings> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let total: Duration = sorted.iter().sum();
        // Divide in nanoseconds so that sample counts above `u32::MAX`
        // cannot truncate.
        let average_nanos = total.as_nanos() / sorted.len() as u128;
        let average = Duration::from_nanos(u64::try_from(average_nanos).unwrap_or(u64::MAX));
        Some(Timings {
            median: sorted[sorted.len() / 2],
            average,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        })
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub result: SortResult,
    pub timings: Timings,
    /// Individual timed iterations, in execution order.
    pub samples: Vec<Duration>,
}

/// Both algorithms benchmarked on the same graph with the same config.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub dfs: BenchmarkResult,
    pub source_removal: BenchmarkResult,
}

impl Comparison {
    /// The algorithm with the lower median; ties go to DFS.
    pub fn faster(&self) -> Algorithm {
        if self.source_removal.timings.median < self.dfs.timings.median {
            Algorithm::SourceRemoval
        } else {
            Algorithm::Dfs
        }
    }

    pub fn get(&self, algorithm: Algorithm) -> &BenchmarkResult {
        match algorithm {
            Algorithm::Dfs => &self.dfs,
            Algorithm::SourceRemoval => &self.source_removal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BenchmarkConfig) -> Self {
        Benchmark { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn run(&self, graph: &Graph, algorithm: Algorithm) -> Result<BenchmarkResult> {
        match algorithm {
            Algorithm::Dfs => self.run_sorter(graph, &DepthFirst),
            Algorithm::SourceRemoval => self.run_sorter(graph, &SourceRemoval),
        }
    }

    pub fn run_sorter<S: TopologicalSort>(
        &self,
        graph: &Graph,
        sorter: &S,
    ) -> Result<BenchmarkResult> {
        let algorithm = S::ALGORITHM;

        for _ in 0..self.config.warmup_iterations {
            black_box(sorter.sort(black_box(graph))?);
        }

        let iterations = self.config.timed_iterations.get();
        let mut samples = Vec::with_capacity(iterations);
        let mut last = None;
        for i in 0..iterations {
            let start = Instant::now();
            let result = black_box(sorter.sort(black_box(graph))?);
            let elapsed = start.elapsed();
            trace!("{algorithm} iteration {i}: {elapsed:?}");
            samples.push(elapsed);
            last = Some(result);
        }

        let (Some(result), Some(timings)) = (last, Timings::from_samples(&samples)) else {
            unreachable!("timed_iterations is non-zero");
        };

        debug!(
            "{algorithm} on {} vertices / {} edges: median {:?}, min {:?}, max {:?}",
            result.stats.vertices, result.stats.edges, timings.median, timings.min, timings.max
        );

        Ok(BenchmarkResult {
            algorithm,
            result,
            timings,
            samples,
        })
    }

    pub fn compare(&self, graph: &Graph) -> Result<Comparison> {
        Ok(Comparison {
            dfs: self.run(graph, Algorithm::Dfs)?,
            source_removal: self.run(graph, Algorithm::SourceRemoval)?,
        })
    }
}

/// Benchmarks `algorithm` on `graph` with the default config.
pub fn run_benchmark(graph: &Graph, algorithm: Algorithm) -> Result<BenchmarkResult> {
    Benchmark::new().run(graph, algorithm)
}

/// Benchmarks both algorithms on `graph` with the default config.
pub fn compare(graph: &Graph) -> Result<Comparison> {
    Benchmark::new().compare(graph)
}

use serde_json::Value;

use crate::graph::GraphBuilder;
use crate::prelude::*;

macro_rules! impl_read_write {
    ($struct:ty) => {
        impl $struct {
            pub fn to_json<W>(&self, writer: W) -> std::result::Result<(), serde_json::Error>
            where
                W: std::io::Write,
            {
                serde_json::to_writer(writer, self)
            }

            pub fn from_json<R>(reader: R) -> std::result::Result<Self, serde_json::Error>
            where
                R: std::io::Read,
            {
                serde_json::from_reader(reader)
            }
        }
    };
}

impl_read_write!(crate::sort::SortResult);
impl_read_write!(crate::bench::BenchmarkResult);
impl_read_write!(crate::bench::Comparison);

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a decimal number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Integers, and floats without a fractional part such as `3.0`.
fn as_whole_i64(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn parse_pair(edge: &Value) -> std::result::Result<(i64, i64), String> {
    let Value::Array(endpoints) = edge else {
        return Err(format!("must be a [from, to] array, found {}", describe(edge)));
    };
    let [from, to] = endpoints.as_slice() else {
        return Err(format!(
            "must have exactly 2 endpoints, found {}",
            endpoints.len()
        ));
    };
    match (as_whole_i64(from), as_whole_i64(to)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(format!(
            "endpoints must be integers, found {} and {}",
            describe(from),
            describe(to)
        )),
    }
}

impl Graph {
    /// Builds a graph from untyped JSON input, such as a decoded form
    /// submission: `vertices` must be a positive integer and `edges` an
    /// array of `[from, to]` integer pairs. Whole-number floats such as
    /// `3.0` count as integers.
    pub fn from_json(vertices: &Value, edges: &Value) -> Result<Graph> {
        let vertices = as_whole_i64(vertices)
            .ok_or_else(|| Error::InvalidVertexCount(vertices.to_string()))?;
        let Value::Array(edges) = edges else {
            return Err(Error::InvalidEdgeFormat(format!(
                "expected an array of [from, to] pairs, found {}",
                describe(edges)
            )));
        };

        let mut builder = GraphBuilder::new(vertices);
        for edge in edges {
            match parse_pair(edge) {
                Ok((from, to)) => builder.add_edge(from, to),
                Err(reason) => builder.add_malformed(reason),
            };
        }
        builder.build()
    }
}

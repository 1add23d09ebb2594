pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of [`Error`], for callers that only need to switch on
/// the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidVertexCount,
    InvalidEdgeFormat,
    VertexOutOfRange,
    SelfLoopDetected,
    CycleDetected,
    IncompleteOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Vertex count must be a positive integer, got `{0}`")]
    InvalidVertexCount(String),

    #[error("Malformed edge list: {0}")]
    InvalidEdgeFormat(String),

    #[error("Edge #{index} ({from}, {to}) references a vertex outside [0, {max}]")]
    VertexOutOfRange {
        index: usize,
        from: i64,
        to: i64,
        max: usize,
    },

    #[error("Edge #{index} is a self-loop on vertex {vertex}")]
    SelfLoopDetected { index: usize, vertex: usize },

    #[error("Graph has at least one cycle: {}", format_cycle(.cycle))]
    CycleDetected { cycle: Vec<usize> },

    #[error("Unable to order every vertex, sorted {sorted} of {expected}")]
    IncompleteOrder { sorted: usize, expected: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVertexCount(_) => ErrorKind::InvalidVertexCount,
            Self::InvalidEdgeFormat(_) => ErrorKind::InvalidEdgeFormat,
            Self::VertexOutOfRange { .. } => ErrorKind::VertexOutOfRange,
            Self::SelfLoopDetected { .. } => ErrorKind::SelfLoopDetected,
            Self::CycleDetected { .. } => ErrorKind::CycleDetected,
            Self::IncompleteOrder { .. } => ErrorKind::IncompleteOrder,
        }
    }
}

fn format_cycle(cycle: &[usize]) -> String {
    cycle
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

use super::Graph;

const DEFAULT_MAX_PRINT_SIZE: usize = 8;
const MAX_PRINTED_EDGES: usize = 10;

fn get_max_str_length(graph: &Graph) -> usize {
    graph
        .edges()
        .take(MAX_PRINTED_EDGES)
        .map(|(from, to)| from.to_string().len().max(to.to_string().len()))
        .fold(DEFAULT_MAX_PRINT_SIZE, usize::max)
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = get_max_str_length(self);
        writeln!(f, "# of nodes: {}", self.size)?;
        writeln!(f, "# of edges: {}", self.n_edges)?;
        writeln!(f, "# of sources: {}", self.sources.len())?;
        writeln!(f, "# of sinks: {}", self.sinks.len())?;
        writeln!(f)?;
        writeln!(f, "| {:^width$} | {:^width$} |", "From", "To")?;
        writeln!(f, "| {:-<width$} | {:-<width$} |", "", "")?;
        for (from, to) in self.edges().take(MAX_PRINTED_EDGES) {
            writeln!(f, "| {:<width$} | {:<width$} |", from, to)?;
        }
        if self.n_edges > MAX_PRINTED_EDGES {
            writeln!(f, "Omitted {} edges", self.n_edges - MAX_PRINTED_EDGES)?;
        }
        Ok(())
    }
}

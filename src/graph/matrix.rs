use crate::prelude::*;

/// Dense `size × size` adjacency table stored row-major.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Fails with `InvalidVertexCount` when the table cannot be
    /// addressed or allocated.
    pub(crate) fn new(size: usize) -> Result<Self> {
        let too_large = || Error::InvalidVertexCount(size.to_string());
        let n_cells = size.checked_mul(size).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(n_cells).map_err(|_| too_large())?;
        cells.resize(n_cells, false);
        Ok(Self { size, cells })
    }

    #[inline]
    pub(crate) fn set(&mut self, from: usize, to: usize) {
        self.cells[from * self.size + to] = true;
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> bool {
        self.cells[from * self.size + to]
    }

    /// Row `from` of the table: `row(from)[to]` is `true` iff `from -> to`.
    #[inline]
    pub fn row(&self, from: usize) -> &[bool] {
        let start = from * self.size;
        &self.cells[start..start + self.size]
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of set cells, i.e. distinct edges.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl std::fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.size {
            let row: String = self
                .row(i)
                .iter()
                .map(|&cell| if cell { '1' } else { '0' })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

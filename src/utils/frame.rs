/// One level of an explicit depth-first stack: the vertex being expanded
/// and the position of the next successor to examine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) vertex: usize,
    next: usize,
}

impl Frame {
    #[inline(always)]
    pub(crate) const fn new(vertex: usize) -> Self {
        Frame { vertex, next: 0 }
    }

    /// Advances past the next successor of this frame's vertex and
    /// returns it, or `None` once every successor has been examined.
    #[inline(always)]
    pub(crate) fn next_successor(&mut self, adjacency: &[Vec<usize>]) -> Option<usize> {
        let successor = adjacency[self.vertex].get(self.next).copied()?;
        self.next += 1;
        Some(successor)
    }
}

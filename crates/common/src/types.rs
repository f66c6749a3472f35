/// Type alias for a single undirected edge list entry: (u, w)
///
/// The order of the endpoints carries no meaning for undirected graphs;
/// for directed graphs it is (source, target).
pub type Edge = (usize, usize);

/// A cycle of the basis as an ordered sequence of vertices.
///
/// The first element is the vertex whose back edge closed the cycle. The
/// cycle is implicitly closed: the last vertex is adjacent to the first.
/// A self-loop is represented by a single-element cycle.
pub type Cycle<V> = Vec<V>;

/// Summary statistics for a computed cycle basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasisSummary {
    pub cycles: usize,
    pub self_loops: usize,
    pub longest: usize,
    pub total_length: usize,
}

impl BasisSummary {
    /// Builds a summary over any collection of cycles.
    pub fn from_cycles<V>(cycles: &[Cycle<V>]) -> Self {
        cycles.iter().fold(Self::default(), |mut acc, cycle| {
            acc.cycles += 1;
            acc.total_length += cycle.len();
            acc.longest = acc.longest.max(cycle.len());
            if cycle.len() == 1 {
                acc.self_loops += 1;
            }
            acc
        })
    }

    /// Mean cycle length, 0.0 for an empty basis.
    pub fn mean_length(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.total_length as f64 / self.cycles as f64
    }
}

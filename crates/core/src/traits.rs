use common::{error::Error, types::Cycle};

/// Read-only view of a graph, as consumed by the cycle-base finders.
///
/// Vertices must map onto a dense index range `0..vertex_bound()` so that
/// traversal state can live in plain vectors instead of hash maps.
pub trait Graph {
    type Vertex: Copy + Eq + std::fmt::Debug;
    type Edge: Copy;

    /// Whether edges have an orientation. Cycle-base finders reject directed graphs.
    fn is_directed(&self) -> bool;

    /// Upper bound (exclusive) on any value returned by `to_index`.
    fn vertex_bound(&self) -> usize;

    fn to_index(&self, vertex: Self::Vertex) -> usize;

    fn from_index(&self, index: usize) -> Self::Vertex;

    /// All vertices, in a stable order for a given graph instance.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// All edges incident on `vertex`, in a stable order.
    ///
    /// Parallel edges are yielded once each; a self-loop is yielded exactly once.
    fn edges_of(&self, vertex: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// The endpoint of `edge` that is not `vertex`, or `vertex` itself for a self-loop.
    fn other_endpoint(&self, edge: Self::Edge, vertex: Self::Vertex) -> Self::Vertex;
}

/// Trait for algorithms that compute a cycle basis of an undirected graph.
pub trait CycleBaseFinder {
    /// Computes a cycle basis of `graph`.
    ///
    /// Returns `Ok(cycles)` with one cycle per independent cycle of the graph,
    /// or `Err(e)` if the graph is directed or violates its adjacency contract.
    fn find_cycle_base<G: Graph>(&self, graph: &G) -> Result<Vec<Cycle<G::Vertex>>, Error>;
}

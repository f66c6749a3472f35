//! [`Graph`] implementation for `petgraph::Graph`.
//!
//! Edges are handed out together with their endpoints, so resolving the other
//! endpoint never needs a fallible lookup into the petgraph storage.

use petgraph::EdgeType;
use petgraph::graph::{EdgeIndex, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::traits::Graph;

impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Vertex = NodeIndex<Ix>;
    type Edge = (EdgeIndex<Ix>, NodeIndex<Ix>, NodeIndex<Ix>);

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn vertex_bound(&self) -> usize {
        self.node_count()
    }

    fn to_index(&self, vertex: NodeIndex<Ix>) -> usize {
        vertex.index()
    }

    fn from_index(&self, index: usize) -> NodeIndex<Ix> {
        NodeIndex::new(index)
    }

    fn vertices(&self) -> impl Iterator<Item = NodeIndex<Ix>> + '_ {
        self.node_indices()
    }

    fn edges_of(&self, vertex: NodeIndex<Ix>) -> impl Iterator<Item = Self::Edge> + '_ {
        self.edges(vertex)
            .map(|edge| (edge.id(), edge.source(), edge.target()))
    }

    fn other_endpoint(&self, edge: Self::Edge, vertex: NodeIndex<Ix>) -> NodeIndex<Ix> {
        let (_, source, target) = edge;
        if source == vertex { target } else { source }
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{DiGraph, UnGraph};

    use crate::metrics::cyclomatic_number;
    use crate::solver::PatonSolver;
    use crate::traits::CycleBaseFinder;
    use common::error::Error;

    #[test]
    fn finds_basis_of_undirected_petgraph() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 2), (0, 3), (3, 1), (1, 4), (4, 5), (5, 3)]);

        let cycles = PatonSolver.find_cycle_base(&graph).unwrap();

        assert_eq!(cycles.len(), 1);
        let mut vertices: Vec<usize> = cycles[0].iter().map(|v| v.index()).collect();
        vertices.sort_unstable();
        assert_eq!(vertices, vec![1, 3, 4, 5]);
    }

    #[test]
    fn self_loop_in_petgraph() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 0)]);

        let cycles = PatonSolver.find_cycle_base(&graph).unwrap();

        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 1);
    }

    #[test]
    fn count_matches_cyclomatic_number() {
        let graph = UnGraph::<(), ()>::from_edges([
            (0, 1),
            (1, 2),
            (2, 0),
            (2, 3),
            (3, 4),
            (4, 2),
            (5, 6),
            (6, 7),
            (7, 5),
        ]);

        let cycles = PatonSolver.find_cycle_base(&graph).unwrap();

        assert_eq!(cycles.len(), cyclomatic_number(&graph).unwrap());
        assert_eq!(cycles.len(), 3);
    }

    #[test]
    fn directed_petgraph_is_rejected() {
        let graph = DiGraph::<(), ()>::from_edges([(0, 1), (1, 0)]);

        let result = PatonSolver.find_cycle_base(&graph);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

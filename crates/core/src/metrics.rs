//! Counting helpers over the [`Graph`] contract.
//!
//! These only make sense for undirected graphs. They give the size a cycle
//! basis must have, `|E| - |V| + c`, without computing the basis itself.

use crate::traits::Graph;
use common::error::Error;

/// Number of edges, counting each parallel copy and each self-loop once.
///
/// Every non-loop edge is reported by `edges_of` under both endpoints while a
/// self-loop is reported once, so non-loop incidences are halved.
pub fn edge_count<G: Graph>(graph: &G) -> usize {
    let (loops, incidences) = graph.vertices().fold((0, 0), |acc, v| {
        graph.edges_of(v).fold(acc, |(loops, incidences), e| {
            if graph.other_endpoint(e, v) == v {
                (loops + 1, incidences)
            } else {
                (loops, incidences + 1)
            }
        })
    });

    loops + incidences / 2
}

/// Number of connected components, isolated vertices included.
///
/// # Errors
/// Returns `Error::VertexIndexOutOfBounds` if `graph` maps a vertex to an
/// index at or above `vertex_bound()`.
pub fn connected_components<G: Graph>(graph: &G) -> Result<usize, Error> {
    let mut seen = vec![false; graph.vertex_bound()];
    let mut stack = Vec::new();
    let mut components = 0;

    for root in graph.vertices() {
        if mark_seen(&mut seen, graph.to_index(root))? {
            continue;
        }

        components += 1;
        stack.push(root);

        while let Some(v) = stack.pop() {
            for e in graph.edges_of(v) {
                let w = graph.other_endpoint(e, v);
                if !mark_seen(&mut seen, graph.to_index(w))? {
                    stack.push(w);
                }
            }
        }
    }

    Ok(components)
}

/// Marks `idx` as seen and reports whether it already was.
fn mark_seen(seen: &mut [bool], idx: usize) -> Result<bool, Error> {
    let slot = seen
        .get_mut(idx)
        .ok_or(Error::VertexIndexOutOfBounds(idx))?;
    Ok(std::mem::replace(slot, true))
}

/// Cyclomatic number `|E| - |V| + c`: the size of any cycle basis of `graph`.
pub fn cyclomatic_number<G: Graph>(graph: &G) -> Result<usize, Error> {
    let vertices = graph.vertices().count();
    let components = connected_components(graph)?;
    Ok((edge_count(graph) + components).saturating_sub(vertices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::GraphCsr;

    /// Two-vertex graph whose single edge leads to an index past `vertex_bound`.
    struct OverReportingGraph;

    impl Graph for OverReportingGraph {
        type Vertex = usize;
        type Edge = ();

        fn is_directed(&self) -> bool {
            false
        }

        fn vertex_bound(&self) -> usize {
            2
        }

        fn to_index(&self, vertex: usize) -> usize {
            vertex
        }

        fn from_index(&self, index: usize) -> usize {
            index
        }

        fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
            0..2
        }

        fn edges_of(&self, vertex: usize) -> impl Iterator<Item = ()> + '_ {
            (vertex == 0).then_some(()).into_iter()
        }

        fn other_endpoint(&self, _edge: (), _vertex: usize) -> usize {
            2
        }
    }

    #[test]
    fn counts_for_simple_graph() {
        let graph =
            GraphCsr::from_edges(6, &[(0, 2), (0, 3), (3, 1), (1, 4), (4, 5), (5, 3)], 6).unwrap();

        assert_eq!(edge_count(&graph), 6);
        assert_eq!(connected_components(&graph).unwrap(), 1);
        assert_eq!(cyclomatic_number(&graph).unwrap(), 1);
    }

    #[test]
    fn isolated_vertices_are_components() {
        let graph = GraphCsr::from_edges(5, &[(0, 1)], 1).unwrap();

        assert_eq!(connected_components(&graph).unwrap(), 4);
        assert_eq!(cyclomatic_number(&graph).unwrap(), 0);
    }

    #[test]
    fn loops_and_parallel_edges_count_as_edges() {
        let graph = GraphCsr::from_edges(2, &[(0, 1), (0, 1), (1, 1)], 3).unwrap();

        assert_eq!(edge_count(&graph), 3);
        assert_eq!(cyclomatic_number(&graph).unwrap(), 2);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let graph = OverReportingGraph;

        assert_eq!(
            connected_components(&graph).unwrap_err(),
            Error::VertexIndexOutOfBounds(2)
        );
        assert_eq!(
            cyclomatic_number(&graph).unwrap_err(),
            Error::VertexIndexOutOfBounds(2)
        );
    }

    #[test]
    fn empty_graph_counts() {
        let graph = GraphCsr::from_edges(0, &[], 1).unwrap();

        assert_eq!(edge_count(&graph), 0);
        assert_eq!(connected_components(&graph).unwrap(), 0);
        assert_eq!(cyclomatic_number(&graph).unwrap(), 0);
    }
}

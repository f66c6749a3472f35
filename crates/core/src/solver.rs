use std::collections::HashSet;

use tracing::debug;

use super::traits::{CycleBaseFinder, Graph};
use common::{error::Error, types::Cycle};

/// Solver implementing Paton's algorithm (1969) for a fundamental cycle basis
/// of an undirected graph.
///
/// K. Paton, An algorithm for finding a fundamental set of cycles of a graph,
/// Comm. ACM 12 (1969), pp. 514-518.
pub struct PatonSolver;

/// Fails with `Error::InvalidArgument` unless `graph` is undirected.
pub fn require_undirected<G: Graph>(graph: &G) -> Result<(), Error> {
    if graph.is_directed() {
        return Err(Error::InvalidArgument(
            "Graph must be undirected".to_string(),
        ));
    }
    Ok(())
}

impl PatonSolver {
    /// Reconstructs the fundamental cycle closed by the back edge `current -> neighbor`.
    ///
    /// The cycle starts with `[neighbor, current]` and follows the parent chain
    /// of `current` until it reaches a vertex of `closing` (the `used` set of
    /// `neighbor`), which is appended as the last element. When `current`
    /// itself is in `closing` the edge is parallel to one already accounted
    /// for and the cycle has just the two vertices.
    ///
    /// # Errors
    /// Returns `Error::CycleReconstructionFailed` if the parent chain is broken
    /// or never reaches `closing` within `parent.len()` steps.
    fn reconstruct_cycle<G: Graph>(
        &self,
        graph: &G,
        neighbor: usize,
        current: usize,
        parent: &[Option<usize>],
        closing: &HashSet<usize>,
    ) -> Result<Cycle<G::Vertex>, Error> {
        let mut cycle = vec![graph.from_index(neighbor), graph.from_index(current)];
        if closing.contains(&current) {
            return Ok(cycle);
        }

        let mut p = current;
        for _ in 0..parent.len() {
            p = parent
                .get(p)
                .copied()
                .flatten()
                .ok_or(Error::CycleReconstructionFailed)?;
            cycle.push(graph.from_index(p));

            if closing.contains(&p) {
                return Ok(cycle);
            }
        }

        Err(Error::CycleReconstructionFailed)
    }
}

impl CycleBaseFinder for PatonSolver {
    /// Walks a spanning forest of `graph` and emits one cycle per non-tree edge.
    ///
    /// The walk is a breadth-first search driven by a LIFO instead of a FIFO,
    /// which keeps every discovered-but-unprocessed vertex one tree edge away
    /// from an already processed one, so back edges always close onto the
    /// current ancestor chain.
    ///
    /// # Returns
    /// - `Ok(cycles)` → one cycle per independent cycle, empty for a forest.
    /// - `Err(InvalidArgument)` → `graph` is directed.
    /// - `Err(CycleReconstructionFailed | VertexIndexOutOfBounds)` → `graph`
    ///   broke its adjacency contract.
    fn find_cycle_base<G: Graph>(&self, graph: &G) -> Result<Vec<Cycle<G::Vertex>>, Error> {
        require_undirected(graph)?;

        let bound = graph.vertex_bound();
        let mut parent: Vec<Option<usize>> = vec![None; bound];
        let mut used: Vec<HashSet<usize>> = vec![HashSet::new(); bound];
        let mut stack: Vec<usize> = Vec::new();
        let mut component: Vec<usize> = Vec::new();
        let mut cycles: Vec<Cycle<G::Vertex>> = Vec::new();
        let mut components = 0usize;

        for root in graph.vertices() {
            let root_idx = graph.to_index(root);
            if root_idx >= bound {
                return Err(Error::VertexIndexOutOfBounds(root_idx));
            }
            if parent[root_idx].is_some() {
                continue;
            }

            // Release the closing sets of the previous component.
            for v in component.drain(..) {
                used[v] = HashSet::new();
            }

            components += 1;
            parent[root_idx] = Some(root_idx);
            component.push(root_idx);
            stack.push(root_idx);

            while let Some(current_idx) = stack.pop() {
                let current = graph.from_index(current_idx);

                for edge in graph.edges_of(current) {
                    let neighbor = graph.other_endpoint(edge, current);
                    let neighbor_idx = graph.to_index(neighbor);
                    if neighbor_idx >= bound {
                        return Err(Error::VertexIndexOutOfBounds(neighbor_idx));
                    }

                    if parent[neighbor_idx].is_none() {
                        // Tree edge
                        parent[neighbor_idx] = Some(current_idx);
                        used[neighbor_idx].insert(current_idx);
                        component.push(neighbor_idx);
                        stack.push(neighbor_idx);
                    } else if neighbor_idx == current_idx {
                        cycles.push(vec![current]);
                    } else if !used[current_idx].contains(&neighbor_idx) {
                        let cycle = self.reconstruct_cycle(
                            graph,
                            neighbor_idx,
                            current_idx,
                            &parent,
                            &used[neighbor_idx],
                        )?;
                        cycles.push(cycle);
                        used[neighbor_idx].insert(current_idx);
                    }
                }
            }
        }

        debug!(
            vertices = bound,
            components,
            cycles = cycles.len(),
            "cycle base computed"
        );

        Ok(cycles)
    }
}

use super::solver::{PatonSolver, require_undirected};
use super::traits::{CycleBaseFinder, Graph};
use common::{error::Error, types::Cycle};

/// Cycle base finder bound to a single undirected graph.
///
/// Holds a shared borrow of the graph, so the graph cannot be mutated while
/// the finder is alive, and `set_graph` cannot run concurrently with
/// `find_cycle_base`. For a stateless alternative use [`PatonSolver`]
/// directly with the graph as an argument.
pub struct PatonCycleBase<'g, G> {
    graph: Option<&'g G>,
    solver: PatonSolver,
}

impl<'g, G: Graph> PatonCycleBase<'g, G> {
    /// Creates a finder with no graph set.
    pub fn new() -> Self {
        PatonCycleBase {
            graph: None,
            solver: PatonSolver,
        }
    }

    /// Creates a finder for `graph`.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `graph` is directed.
    pub fn with_graph(graph: &'g G) -> Result<Self, Error> {
        require_undirected(graph)?;

        Ok(PatonCycleBase {
            graph: Some(graph),
            solver: PatonSolver,
        })
    }

    pub fn graph(&self) -> Option<&'g G> {
        self.graph
    }

    /// Replaces the graph. On error the previous graph stays in place.
    pub fn set_graph(&mut self, graph: &'g G) -> Result<(), Error> {
        require_undirected(graph)?;
        self.graph = Some(graph);
        Ok(())
    }

    /// Computes a fundamental cycle basis of the configured graph.
    ///
    /// # Errors
    /// Returns `Error::PreconditionViolated` if no graph has been set.
    pub fn find_cycle_base(&self) -> Result<Vec<Cycle<G::Vertex>>, Error> {
        let graph = self
            .graph
            .ok_or_else(|| Error::PreconditionViolated("no graph".to_string()))?;

        self.solver.find_cycle_base(graph)
    }
}

impl<G: Graph> Default for PatonCycleBase<'_, G> {
    fn default() -> Self {
        Self::new()
    }
}

use tokio::select;
use tokio::sync::watch;
use tokio::time::{self, Duration};
use tracing::{error, info, warn};

use super::{
    error::Error,
    types::{SearchReport, SharedGraph},
};
use common::types::BasisSummary;
use cycle_base_core::{metrics::cyclomatic_number, traits::CycleBaseFinder};

pub struct CycleBaseSearcher<S> {
    solver: S,
    graph: SharedGraph,
    interval: u64, // interval in seconds
    shutdown: watch::Receiver<()>,
}

impl<S> CycleBaseSearcher<S>
where
    S: CycleBaseFinder + Send + Sync + 'static,
{
    pub fn new(graph: SharedGraph, interval: u64, solver: S, shutdown: watch::Receiver<()>) -> Self {
        CycleBaseSearcher {
            graph,
            interval: interval.max(1),
            solver,
            shutdown,
        }
    }

    /// Computes the cycle basis of a snapshot of the shared graph.
    ///
    /// The snapshot is cloned under the read lock so the computation itself
    /// holds no lock. Returns `Ok(None)` when the graph has no edges yet.
    pub async fn search_once(&self) -> Result<Option<SearchReport>, Error> {
        let graph_snapshot = {
            let graph_guard = self.graph.read().await;
            graph_guard.clone()
        };

        if graph_snapshot.num_edges() == 0 {
            info!("Searcher: Graph has no edges yet. Skipping.");
            return Ok(None);
        }

        info!("Searcher: Starting cycle base search on new snapshot...");
        let cycles = self.solver.find_cycle_base(&graph_snapshot)?;

        let report = SearchReport {
            vertices: graph_snapshot.num_vertices,
            edges: graph_snapshot.num_edges(),
            cyclomatic_number: cyclomatic_number(&graph_snapshot)?,
            summary: BasisSummary::from_cycles(&cycles),
        };

        if report.summary.cycles != report.cyclomatic_number {
            warn!(
                cycles = report.summary.cycles,
                expected = report.cyclomatic_number,
                "Cycle base size differs from the cyclomatic number"
            );
        }

        info!(
            vertices = report.vertices,
            edges = report.edges,
            cycles = report.summary.cycles,
            self_loops = report.summary.self_loops,
            longest = report.summary.longest,
            "Cycle base computed"
        );

        Ok(Some(report))
    }

    /// Runs `search_once` every `interval` seconds until shutdown is signalled.
    ///
    /// Search failures are logged and the loop carries on with the next snapshot.
    pub async fn search_for_cycles(mut self) -> Result<(), Error> {
        info!("Searcher ready.");

        let mut interval = time::interval(Duration::from_secs(self.interval));

        // The first tick occurs immediately, but we skip it to wait the full duration
        interval.tick().await;

        loop {
            select! {
                _ = interval.tick() => {}
                _ = self.shutdown.changed() => {
                    info!("Shutdown signal received, stopping searcher.");
                    break;
                }
            }

            if let Err(e) = self.search_once().await {
                error!(
                    "Searcher Error: Cycle base search failed due to: {}. Continuing.",
                    e
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cycle_base_core::{GraphCsr, PatonSolver};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn searcher_over(graph: GraphCsr) -> (CycleBaseSearcher<PatonSolver>, watch::Sender<()>) {
        let (shutdown_tx, shutdown_rx) = watch::channel(());
        let searcher =
            CycleBaseSearcher::new(Arc::new(RwLock::new(graph)), 1, PatonSolver, shutdown_rx);
        (searcher, shutdown_tx)
    }

    #[tokio::test]
    async fn test_search_once_on_empty_graph_skips() {
        let (searcher, _tx) = searcher_over(GraphCsr::from_edges(3, &[], 1).expect("graph"));

        assert_eq!(searcher.search_once().await.expect("search"), None);
    }

    #[tokio::test]
    async fn test_search_once_reports_basis() {
        let graph = GraphCsr::from_edges(
            6,
            &[(0, 2), (0, 3), (3, 1), (1, 4), (4, 5), (5, 3), (2, 2)],
            1,
        )
        .expect("graph");
        let (searcher, _tx) = searcher_over(graph);

        let report = searcher
            .search_once()
            .await
            .expect("search")
            .expect("report");

        assert_eq!(report.vertices, 6);
        assert_eq!(report.edges, 7);
        assert_eq!(report.cyclomatic_number, 2);
        assert_eq!(report.summary.cycles, 2);
        assert_eq!(report.summary.self_loops, 1);
        assert_eq!(report.summary.longest, 4);
    }

    #[tokio::test]
    async fn test_search_once_propagates_directed_graph_error() {
        let graph = GraphCsr::from_directed_edges(2, &[(0, 1)], 1).expect("graph");
        let (searcher, _tx) = searcher_over(graph);

        let result = searcher.search_once().await;

        assert!(matches!(result, Err(Error::GraphError(_))));
    }

    #[tokio::test]
    async fn test_searcher_stops_on_shutdown() {
        let (searcher, shutdown_tx) = searcher_over(GraphCsr::from_edges(1, &[], 1).expect("graph"));

        let handle = tokio::spawn(searcher.search_for_cycles());
        shutdown_tx.send(()).expect("shutdown");

        let result = tokio::time::timeout(Duration::from_secs(3), handle)
            .await
            .expect("Searcher did not stop");
        assert!(result.expect("join").is_ok());
    }
}

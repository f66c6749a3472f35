use tokio::select;
use tokio::sync::{mpsc::Receiver, watch};
use tracing::{debug, info, warn};

use super::error::Error;
use super::types::SharedGraph;
use common::types::Edge;
use cycle_base_core::csr::AddEdgeResult;

/// Async consumer that applies edge batches to the shared graph.
pub struct Writer {
    graph: SharedGraph,
    receiver: Receiver<Vec<Edge>>,
    max_vertices: usize, // endpoints must be below this id
    shutdown: watch::Receiver<()>, // signal for graceful shutdown
}

impl Writer {
    pub fn new(
        graph: SharedGraph,
        receiver: Receiver<Vec<Edge>>,
        max_vertices: usize,
        shutdown: watch::Receiver<()>,
    ) -> Self {
        Self {
            graph,
            receiver,
            max_vertices,
            shutdown,
        }
    }

    /// Run the writer asynchronously.
    ///
    /// Consumes batches from the receiver and applies them to the graph.
    /// When the receiver closes, whatever is still buffered is flushed into
    /// the graph before exiting. A shutdown signal exits without flushing.
    pub async fn process_updates(mut self) -> Result<(), Error> {
        info!("Writer ready.");

        loop {
            select! {
                updates = self.receiver.recv() => {
                    match updates {
                        Some(updates) => self.apply(updates).await?,
                        None => {
                            info!("Receiver closed, flushing pending edges and shutting down writer.");
                            self.graph.write().await.flush_pending()?;
                            break;
                        }
                    }
                }

                _ = self.shutdown.changed() => {
                    info!("Shutdown signal received, stopping writer.");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Two-phase commit of one batch.
    ///
    /// Edges with an endpoint at or above `max_vertices` are dropped with a
    /// warning before anything is buffered.
    ///
    /// Phase 1 buffers the batch under the write lock and extracts the buffer
    /// once the rebuild limit is hit. Phase 2 rebuilds a copy of the graph
    /// without holding any lock and swaps it in, so readers are only blocked
    /// for the swap itself.
    async fn apply(&self, mut updates: Vec<Edge>) -> Result<(), Error> {
        let received = updates.len();
        updates.retain(|&(u, w)| u < self.max_vertices && w < self.max_vertices);
        if updates.len() < received {
            warn!(
                dropped = received - updates.len(),
                max_vertices = self.max_vertices,
                "Writer: dropped edges with out-of-range endpoints"
            );
        }
        if updates.is_empty() {
            return Ok(());
        }

        let extracted = {
            let mut graph_guard = self.graph.write().await;
            graph_guard.add_edges_and_extract_data(updates)
        };

        let AddEdgeResult::RebuildNeeded(edges) = extracted else {
            return Ok(());
        };

        let mut rebuilt = self.graph.read().await.clone();
        debug!("Rebuilding graph with {} new edges", edges.len());
        rebuilt.rebuild_with_edges(edges)?;

        let mut graph_guard = self.graph.write().await;
        rebuilt.pending_updates = std::mem::take(&mut graph_guard.pending_updates);
        *graph_guard = rebuilt;

        Ok(())
    }

    /// Public method that spawns the Writer task onto the Tokio runtime.
    ///
    /// This function consumes the Writer instance (`self`) and returns a JoinHandle,
    /// allowing the pipeline orchestrator to monitor the task.
    pub fn spawn_task(self) -> tokio::task::JoinHandle<Result<(), Error>> {
        tokio::spawn(self.process_updates())
    }
}

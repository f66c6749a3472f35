use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::Sender;
use tokio::time::{self, Duration};
use tracing::{debug, info};

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::UpdateStreamer;
use common::types::Edge;

/// Produces synthetic edges for simulation purposes.
///
/// Generates batches of random undirected edges over `total_vertices`
/// vertices, occasionally as self-loops, and sends them over a Tokio bounded
/// channel for processing. Repeated pairs are kept: the graph is a multigraph.
pub struct SimulatorStreamer {
    pub total_vertices: usize,  // total vertices in the graph
    pub batch_size: usize,      // number of edges per batch
    pub interval_ms: u64,       // pause between batches
    pub self_loop_probability: f64,
    rng: SmallRng,
}

impl SimulatorStreamer {
    pub fn new(config: SimulatorConfig) -> Self {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Builds a streamer with a caller-supplied generator, e.g. a seeded one.
    pub fn with_rng(config: SimulatorConfig, rng: SmallRng) -> Self {
        SimulatorStreamer {
            total_vertices: config.total_vertices,
            batch_size: config.batch_size,
            interval_ms: config.interval_ms.max(1),
            self_loop_probability: config.self_loop_probability.clamp(0.0, 1.0),
            rng,
        }
    }

    fn next_batch(&mut self) -> Vec<Edge> {
        let vertex_range = 0..self.total_vertices;

        (0..self.batch_size)
            .map(|_| {
                let u = self.rng.random_range(vertex_range.clone());
                let w = if self.rng.random_bool(self.self_loop_probability) {
                    u
                } else {
                    self.rng.random_range(vertex_range.clone())
                };
                (u, w)
            })
            .collect()
    }
}

#[async_trait]
impl UpdateStreamer for SimulatorStreamer {
    /// Runs the simulation asynchronously.
    ///
    /// Periodically generates batches of edges and sends them via the
    /// provided `Sender`. Backpressure is handled naturally via awaiting on
    /// `sender.send()`. Exits once the receiver is dropped.
    async fn run_stream(mut self, sender: Sender<Vec<Edge>>) -> Result<(), Error> {
        if self.total_vertices == 0 {
            return Err(Error::InvalidConfig(
                "simulator needs at least one vertex".to_string(),
            ));
        }

        let mut interval = time::interval(Duration::from_millis(self.interval_ms));

        loop {
            interval.tick().await;

            let edges = self.next_batch();

            debug!("Simulator sent {} edges.", edges.len());
            if sender.send(edges).await.is_err() {
                info!("Simulator shutting down: Writer receiver dropped.");
                return Err(Error::ChannelSendFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::{Duration, timeout};

    fn sim_config(total_vertices: usize, batch_size: usize, p: f64) -> SimulatorConfig {
        SimulatorConfig {
            total_vertices,
            batch_size,
            interval_ms: 10,
            self_loop_probability: p,
        }
    }

    /// SimulatorStreamer can be created correctly.
    #[test]
    fn test_simulator_creation() {
        let sim = SimulatorStreamer::new(sim_config(10, 5, 2.0));
        assert_eq!(sim.total_vertices, 10);
        assert_eq!(sim.batch_size, 5);
        assert_eq!(sim.self_loop_probability, 1.0);
    }

    #[test]
    fn test_self_loop_probability_one_yields_loops_only() {
        let mut sim = SimulatorStreamer::with_rng(sim_config(10, 50, 1.0), SmallRng::seed_from_u64(7));

        assert!(sim.next_batch().iter().all(|(u, w)| u == w));
    }

    #[test]
    fn test_seeded_simulators_agree() {
        let mut a = SimulatorStreamer::with_rng(sim_config(10, 50, 0.2), SmallRng::seed_from_u64(42));
        let mut b = SimulatorStreamer::with_rng(sim_config(10, 50, 0.2), SmallRng::seed_from_u64(42));

        assert_eq!(a.next_batch(), b.next_batch());
    }

    /// SimulatorStreamer generates correct number of edges in a batch.
    #[tokio::test]
    async fn test_batch_size() {
        let sim = SimulatorStreamer::new(sim_config(10, 5, 0.0));

        let (tx, mut rx) = mpsc::channel(10);

        // Run simulator in the background; the receiver ends it when dropped.
        tokio::spawn(async move {
            let _ = sim.run_stream(tx).await;
        });

        // Receive first batch
        let edges = timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("Did not receive batch")
            .expect("Channel closed");

        assert_eq!(edges.len(), 5);
    }

    /// All generated vertex indices are within bounds.
    #[tokio::test]
    async fn test_vertex_indices_in_bounds() {
        let sim = SimulatorStreamer::new(sim_config(10, 50, 0.5));

        let (tx, mut rx) = mpsc::channel(10);

        tokio::spawn(async move {
            let _ = sim.run_stream(tx).await;
        });

        let edges = timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("Did not receive batch")
            .expect("Channel closed");

        for (u, w) in edges {
            assert!(u < 10, "first endpoint out of bounds");
            assert!(w < 10, "second endpoint out of bounds");
        }
    }

    #[tokio::test]
    async fn test_zero_vertices_is_rejected() {
        let sim = SimulatorStreamer::new(sim_config(0, 5, 0.0));
        let (tx, _rx) = mpsc::channel(1);

        let result = sim.run_stream(tx).await;

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use clap::Subcommand;
use tokio::sync::{RwLock, mpsc::Sender};
use tokio::task::JoinHandle;

use super::error::Error;
use common::types::{BasisSummary, Edge};
use cycle_base_core::GraphCsr;

pub type SharedGraph = Arc<RwLock<GraphCsr>>;

pub type JoinHandleResult = JoinHandle<Result<(), Error>>;

/// A trait defining the contract for any source that generates and streams edges
/// into the main processing pipeline.
///
/// The trait bounds (`Send`, `Sync`, `'static`) are mandatory to ensure the
/// implementation can be safely executed by the multi-threaded asynchronous runtime (Tokio).
#[async_trait::async_trait]
pub trait UpdateStreamer: Send + Sync + 'static {
    async fn run_stream(self, sender: Sender<Vec<Edge>>) -> Result<(), Error>;
}

/// Where the pipeline takes its edges from.
#[derive(Debug, Clone, Subcommand)]
pub enum DataSource {
    /// Stream randomly generated edges until interrupted.
    Sim,
    /// Stream the edges of a CSV file with `u,w` columns, then report once.
    Csv { path: PathBuf },
}

/// Outcome of one cycle-base search over a graph snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport {
    pub vertices: usize,
    pub edges: usize,
    pub cyclomatic_number: usize,
    pub summary: BasisSummary,
}

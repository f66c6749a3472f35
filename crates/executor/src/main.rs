pub mod config;
pub mod csv_streamer;
pub mod error;
pub mod producer;
pub mod searcher;
pub mod simulator;
pub mod types;
pub mod writer;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::{RwLock, mpsc, mpsc::Sender, watch};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use common::types::Edge;
use csv_streamer::CsvStreamer;
use cycle_base_core::{GraphCsr, PatonSolver};
use error::Error;
use producer::Producer;
use searcher::CycleBaseSearcher;
use simulator::SimulatorStreamer;
use types::{DataSource, JoinHandleResult, SharedGraph};
use writer::Writer;

/// Streams edges into an undirected multigraph and reports its fundamental cycle basis.
#[derive(Debug, Parser)]
#[command(name = "executor", version)]
struct Cli {
    /// Path to the TOML configuration (defaults to crates/executor/Config.toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Edge source; `sim` when omitted
    #[command(subcommand)]
    source: Option<DataSource>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("Executor failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = config::load_config(cli.config.as_deref())?;
    let source = cli.source.unwrap_or(DataSource::Sim);

    let shared_graph: SharedGraph = Arc::new(RwLock::new(GraphCsr::from_edges(
        0,
        &[],
        config.writer.rebuild_limit,
    )?));

    let (sender, receiver) = mpsc::channel::<Vec<Edge>>(config.executor.buffer_size);
    let (shutdown_tx, shutdown_rx) = watch::channel(());

    // Spawn tasks
    let producer_handle = spawn_producer(&source, sender, &config);
    let writer_handle = spawn_writer(
        shared_graph.clone(),
        receiver,
        config.writer.max_vertices,
        shutdown_rx.clone(),
    );
    let searcher = CycleBaseSearcher::new(
        shared_graph,
        config.searcher.interval_seconds,
        PatonSolver,
        shutdown_rx,
    );

    match source {
        DataSource::Csv { .. } => {
            // The writer exits once the producer has dropped its sender and
            // every buffered edge is in the graph.
            producer_handle.await??;
            writer_handle.await??;

            if searcher.search_once().await?.is_none() {
                info!("CSV input contained no edges.");
            }
        }
        DataSource::Sim => {
            let searcher_handle = tokio::spawn(searcher.search_for_cycles());

            tokio::signal::ctrl_c().await?;
            info!("Interrupt received, shutting down pipeline.");
            if shutdown_tx.send(()).is_err() {
                debug!("All shutdown receivers already dropped.");
            }

            writer_handle.await??;
            searcher_handle.await??;

            // The simulator only stops once the writer has dropped its receiver.
            match producer_handle.await? {
                Ok(()) | Err(Error::ChannelSendFailed) => {}
                Err(e) => return Err(e),
            }
        }
    }

    info!("Pipeline shut down.");
    Ok(())
}

pub fn spawn_producer(
    source: &DataSource,
    sender: Sender<Vec<Edge>>,
    config: &config::Config,
) -> JoinHandleResult {
    match source {
        DataSource::Sim => {
            info!("Starting SimulatorStreamer producer task...");
            let streamer = SimulatorStreamer::new(config.simulator.clone());
            let producer = Producer::new(streamer);
            producer.spawn(sender)
        }
        DataSource::Csv { path } => {
            info!("Starting CsvStreamer producer task...");
            let streamer = CsvStreamer::new(path.clone(), config.producer.batch_size);
            let producer = Producer::new(streamer);
            producer.spawn(sender)
        }
    }
}

/// Spawn writer task
fn spawn_writer(
    shared_graph: SharedGraph,
    receiver: mpsc::Receiver<Vec<Edge>>,
    max_vertices: usize,
    shutdown: watch::Receiver<()>,
) -> JoinHandleResult {
    let writer = Writer::new(shared_graph, receiver, max_vertices, shutdown);
    writer.spawn_task()
}

use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tokio::sync::mpsc::Sender;
use tracing::{error, info};

use super::error::Error;
use super::types::UpdateStreamer;
use common::types::Edge;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "u")]
    pub first_vertex: usize,

    #[serde(rename = "w")]
    pub second_vertex: usize,
}

/// Streams the edges of a CSV edge list in fixed-size batches.
///
/// The file needs a header row with `u` and `w` columns; any other columns
/// are ignored.
pub struct CsvStreamer {
    path: PathBuf,
    batch_size: usize,
}

impl CsvStreamer {
    pub fn new(path: PathBuf, batch_size: usize) -> Self {
        CsvStreamer {
            path,
            batch_size: batch_size.max(1),
        }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), "Failed to read file: {:?}", e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.first_vertex, record.second_vertex));
        }
        Ok(edges)
    }
}

#[async_trait::async_trait]
impl UpdateStreamer for CsvStreamer {
    async fn run_stream(self, sender: Sender<Vec<Edge>>) -> Result<(), Error> {
        let all_edges = self.parse_csv_to_edges()?;
        let total_edges = all_edges.len();
        let mut edges_sent = 0;

        info!("CsvStreamer: Starting transfer of {} edges...", total_edges);

        for chunk in all_edges.chunks(self.batch_size) {
            let batch: Vec<Edge> = chunk.to_vec();
            if let Err(e) = sender.send(batch).await {
                error!(
                    "CsvStreamer shutting down: Writer receiver dropped during send. Error: {}",
                    e
                );
                return Err(Error::ChannelSendFailed);
            }

            edges_sent += chunk.len();
        }

        info!(
            "CsvStreamer: Successfully transferred {} edges in batches.",
            edges_sent
        );
        Ok(())
    }
}

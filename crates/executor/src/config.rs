use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ExecutorConfig {
    pub buffer_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProducerConfig {
    pub batch_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WriterConfig {
    pub rebuild_limit: usize,
    pub max_vertices: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearcherConfig {
    pub interval_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub total_vertices: usize,
    pub batch_size: usize,
    pub interval_ms: u64,
    pub self_loop_probability: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub executor: ExecutorConfig,
    pub producer: ProducerConfig,
    pub writer: WriterConfig,
    pub searcher: SearcherConfig,
    pub simulator: SimulatorConfig,
}

/// Loads configuration from `path`, or from `crates/executor/Config.toml`
/// under the current directory, with `EXECUTOR__*` environment overrides
/// (e.g. `EXECUTOR__SEARCHER__INTERVAL_SECONDS=1`).
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let config_file_path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let base_path = env::current_dir().map_err(|e| {
                Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
            })?;
            base_path
                .join("crates")
                .join("executor")
                .join("Config.toml")
        }
    };

    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(
            File::from(config_file_path.as_path())
                .format(FileFormat::Toml)
                .required(true),
        )
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .try_parsing(true)
                .separator("__"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()?;
    Ok(app_config)
}

impl Config {
    fn validate(&self) -> Result<(), Error> {
        if self.executor.buffer_size == 0 {
            return Err(Error::InvalidConfig(
                "executor.buffer_size must be positive".to_string(),
            ));
        }
        if self.producer.batch_size == 0 || self.simulator.batch_size == 0 {
            return Err(Error::InvalidConfig(
                "batch_size must be positive".to_string(),
            ));
        }
        if self.writer.max_vertices == 0 {
            return Err(Error::InvalidConfig(
                "writer.max_vertices must be positive".to_string(),
            ));
        }
        if self.simulator.total_vertices == 0 {
            return Err(Error::InvalidConfig(
                "simulator.total_vertices must be positive".to_string(),
            ));
        }
        if self.simulator.total_vertices > self.writer.max_vertices {
            return Err(Error::InvalidConfig(format!(
                "simulator.total_vertices ({}) exceeds writer.max_vertices ({})",
                self.simulator.total_vertices, self.writer.max_vertices
            )));
        }
        if !(0.0..=1.0).contains(&self.simulator.self_loop_probability) {
            return Err(Error::InvalidConfig(format!(
                "simulator.self_loop_probability must lie in [0, 1], got {}",
                self.simulator.self_loop_probability
            )));
        }
        Ok(())
    }
}

//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;
pub mod training;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use zayavka_core::error::StoreError;
use zayavka_core::{JsonlStore, TrainingExample, TrainingStore, ZayavkaConfig};

/// Default location of the training log when neither the config file nor
/// `--store` names one.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zayavka")
        .join("training_data.jsonl")
}

/// Load the configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ZayavkaConfig> {
    match config_path {
        Some(path) => Ok(ZayavkaConfig::from_file(Path::new(path))?),
        None => Ok(ZayavkaConfig::default()),
    }
}

/// Open the training store, preferring an explicit `--store` override,
/// then the config file, then the platform data directory.
pub fn open_store(
    config: &ZayavkaConfig,
    store_override: Option<&Path>,
) -> anyhow::Result<Arc<JsonlStore>> {
    let path = match store_override {
        Some(path) => path.to_path_buf(),
        None if config.store.path.as_os_str().is_empty() => default_store_path(),
        None => config.store.path.clone(),
    };
    Ok(Arc::new(JsonlStore::open(path)?))
}

/// Store wrapper that reads normally but drops appends; used by
/// `parse --no-learn` so one-off lookups do not pollute the log.
pub struct ReadOnlyStore<S>(pub Arc<S>);

impl<S: TrainingStore> TrainingStore for ReadOnlyStore<S> {
    fn append(&self, _example: TrainingExample) -> Result<(), StoreError> {
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TrainingExample>, StoreError> {
        self.0.load_all()
    }
}

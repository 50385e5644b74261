//! Startup wiring: descriptor, store, preloaded configs and controller.

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use broker_catalog::{broker_descriptor, BrokerConfigStore, Controller};
use broker_model::ConfigObject;
use broker_store::{ConfigStore, MemoryConfigStore};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const CONFIG_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Builds the store and controller for `config`, loading `config_dir` if set.
pub fn bootstrap(config: &ServerConfig) -> Result<(Arc<MemoryConfigStore>, Controller)> {
    let descriptor = broker_descriptor().context("Failed to register broker config types")?;
    let store = Arc::new(MemoryConfigStore::new(Arc::new(descriptor)));

    if let Some(dir) = &config.config_dir {
        let loaded = load_dir(store.as_ref(), dir)?;
        info!("Loaded {} config objects from {}", loaded, dir.display());
    }

    let view = BrokerConfigStore::with_config(store.clone(), config.view_config());
    Ok((store, Controller::new(view)))
}

/// Creates every object found in the config files of `dir`.
///
/// Files are read in name order. Returns the number of objects created.
pub fn load_dir(store: &dyn ConfigStore, dir: &Path) -> Result<usize> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read config directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()));
    let mut files = config_files(entries)
        .with_context(|| format!("Failed to list config directory {}", dir.display()))?;
    files.retain(|path| path.is_file());

    let mut created = 0;
    for path in &files {
        created += load_file(store, path)?;
    }
    Ok(created)
}

/// Creates every object in one config file. Returns the number created.
///
/// A file may hold several YAML documents; empty documents are skipped.
pub fn load_file(store: &dyn ConfigStore, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let mut created = 0;
    for (index, document) in serde_yaml::Deserializer::from_str(&content).enumerate() {
        let object = Option::<ConfigObject>::deserialize(document)
            .with_context(|| format!("Invalid YAML in {} (document {})", path.display(), index))?;
        let Some(object) = object else {
            continue;
        };
        let entry = store
            .descriptor()
            .from_object(object)
            .with_context(|| format!("Invalid config in {} (document {})", path.display(), index))?;
        let key = entry.key();
        store
            .create(entry)
            .with_context(|| format!("Failed to store {} from {}", key, path.display()))?;
        debug!("Loaded {} from {}", key, path.display());
        created += 1;
    }
    Ok(created)
}

/// Keeps the paths with a config file extension, sorted by name. Fails on
/// the first entry that could not be read.
pub fn config_files(
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if is_config_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_config_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext))
}

// src/store.rs
//
// Persisted state: a single JSON file with the scrape time and the merged
// entity list. The file is the boundary with the site backend; its shape is
// `{ "scraped_at": <rfc3339>, "matches": [ ... ] }`.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::data::Entity;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub scraped_at: String,
    #[serde(default)]
    pub matches: Vec<Entity>,
}

/// Load previous state. Missing or corrupt file reads as empty state:
/// first run and recovery-from-bad-write look the same.
pub fn load(path: &Path) -> State {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(_) => return State::default(),
    };
    match serde_json::from_str(&text) {
        Ok(state) => state,
        Err(e) => {
            warn!("{}: unreadable state file ({e}), starting fresh", path.display());
            State::default()
        }
    }
}

/// Write the merged entity list with a fresh scrape timestamp.
pub fn save(path: &Path, entities: &[Entity]) -> Result<(), StoreError> {
    let state = State {
        scraped_at: Utc::now().to_rfc3339(),
        matches: entities.to_vec(),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(&state)?;
    fs::write(path, json)?;
    Ok(())
}

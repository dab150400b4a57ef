//! Core domain: persisted ghost blobs, one per level id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// On-disk shape: level id -> opaque codec blob.
#[derive(Debug, Default, Serialize, Deserialize)]
struct GhostSaveFile {
    ghosts: HashMap<String, String>,
}

/// Best-ghost storage. The store only ever sees opaque base64 strings
/// produced by the ghost codec; it knows nothing about their contents.
/// Any load failure degrades to "no ghost", never blocking level start.
#[derive(Resource, Debug)]
pub struct GhostStore {
    path: PathBuf,
    ghosts: HashMap<String, String>,
}

impl Default for GhostStore {
    fn default() -> Self {
        Self::at_path(PathBuf::from("save/ghosts.json"))
    }
}

impl GhostStore {
    pub fn at_path(path: PathBuf) -> Self {
        let ghosts = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<GhostSaveFile>(&contents) {
                Ok(file) => file.ghosts,
                Err(e) => {
                    warn!("Ghost save file unreadable, starting empty: {}", e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, ghosts }
    }

    pub fn load(&self, level_id: &str) -> Option<&str> {
        self.ghosts.get(level_id).map(String::as_str)
    }

    /// Store a blob and flush to disk. Write failures are logged and
    /// swallowed; the in-memory copy stays valid for this session.
    pub fn store(&mut self, level_id: impl Into<String>, blob: String) {
        self.ghosts.insert(level_id.into(), blob);
        self.flush();
    }

    fn flush(&self) {
        let file = GhostSaveFile {
            ghosts: self.ghosts.clone(),
        };
        let json = match serde_json::to_string(&file) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize ghost save file: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create save directory: {}", e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, json) {
            warn!("Failed to write ghost save file: {}", e);
        }
    }
}

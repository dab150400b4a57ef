//! Ghost domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GhostTuning {
    /// Seconds between frame samples. Not aligned to physics steps;
    /// playback always interpolates.
    pub recording_interval: f32,
    /// Sprite alpha for ghost proxies.
    pub ghost_alpha: f32,
    /// Duration of the colour-change flash.
    pub flash_duration: f32,
}

impl Default for GhostTuning {
    fn default() -> Self {
        Self {
            recording_interval: 0.1,
            ghost_alpha: 0.45,
            flash_duration: 0.15,
        }
    }
}

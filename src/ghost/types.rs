//! Ghost domain: recorded run value types.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ColourId;

/// One interval-sampled snapshot of the player's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostFrame {
    /// Seconds since run start. Non-decreasing within a run.
    pub time: f32,
    pub position: [f32; 2],
    pub z_rotation: f32,
    pub colour: ColourId,
    pub animation_hash: u32,
    pub facing_right: bool,
}

impl GhostFrame {
    pub fn position_vec(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostEventKind {
    Jump,
    Land,
    Dash,
    DashCollection,
    DroneKill,
    ZiplineHook,
    ZiplineUnhook,
    CollectibleFound,
}

/// A discrete gameplay event, recorded at its exact elapsed time rather than
/// on the frame-sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostEvent {
    pub kind: GhostEventKind,
    pub time: f32,
    /// Meaning depends on kind (drone id, orb id, ...).
    pub data: u16,
}

/// A completed recording. Immutable after the recorder finishes; shared
/// read-only by any number of playbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostRun {
    pub frames: Vec<GhostFrame>,
    pub events: Vec<GhostEvent>,
    /// Playback time at which the recorded run crossed the finish trigger.
    /// Ghosts shrink out from here; distinct from the last frame time.
    pub victory_time: f32,
}

impl GhostRun {
    /// A run with no frames cannot be played back; callers treat it as
    /// "no ghost".
    pub fn is_playable(&self) -> bool {
        !self.frames.is_empty()
    }
}

//! Ghost domain: recording, codec, and deterministic replay of runs.

pub mod codec;
mod playback;
mod recorder;
mod resources;
mod systems;
mod types;

pub use playback::{GhostPlayback, PlaybackStep};
pub use recorder::{FrameSnapshot, GhostRecorder};
pub use resources::GhostTuning;
pub use systems::{Ghost, GhostReplayEvent, Spectated, TimeSlowEvent};
pub use types::{GhostEvent, GhostEventKind, GhostFrame, GhostRun};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};

pub struct GhostPlugin;

impl Plugin for GhostPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GhostTuning>()
            .init_resource::<GhostRecorder>()
            .add_message::<GhostReplayEvent>()
            .add_message::<TimeSlowEvent>()
            .add_systems(Update, systems::start_attempt)
            .add_systems(
                Update,
                (systems::record_events, systems::record_frames)
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            )
            // The victory message may only become visible on the frame the
            // state has already flipped to Victory, so the save system runs
            // in both states (and ignores the pause set: a paused victory
            // screen must still persist the run).
            .add_systems(
                Update,
                systems::save_ghost_on_victory
                    .after(systems::record_events)
                    .run_if(in_state(GameState::Playing).or(in_state(GameState::Victory))),
            )
            .add_systems(
                Update,
                (systems::drive_ghosts, systems::flash_ghosts)
                    .chain()
                    .run_if(in_state(GameState::Playing).or(in_state(GameState::Loading)))
                    .run_if(gameplay_active),
            )
            .add_systems(OnExit(GameState::Playing), systems::teardown_ghosts);
    }
}

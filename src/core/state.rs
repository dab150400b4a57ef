//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Level setup in progress. Ghost playback indices still advance here,
    /// but audio/time-slow side effects are suppressed until Playing.
    Loading,
    Playing,
    Victory,
    Paused,
}

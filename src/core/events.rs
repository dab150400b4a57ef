//! Core domain: events for level flow.

use bevy::ecs::message::Message;

/// Fired when a level attempt starts (after loading completes).
#[derive(Debug)]
pub struct LevelStartedEvent {
    pub level_id: String,
}

impl Message for LevelStartedEvent {}

/// Fired when the player crosses the finish trigger.
/// The recorder stamps its victory time from this.
#[derive(Debug)]
pub struct LevelVictoryEvent {
    pub run_time_ms: u64,
}

impl Message for LevelVictoryEvent {}

/// Environment events that contribute to the ghost event stream. Their
/// producers (drones, orbs, collectibles) live outside the movement core.
#[derive(Debug)]
pub struct DroneKilledEvent {
    pub drone_id: u16,
}

impl Message for DroneKilledEvent {}

#[derive(Debug)]
pub struct CollectibleFoundEvent {
    pub collectible_id: u16,
}

impl Message for CollectibleFoundEvent {}

#[derive(Debug)]
pub struct DashCollectedEvent {
    pub orb_id: u16,
}

impl Message for DashCollectedEvent {}

//! Movement domain: events fired for recorder, audio, and achievement sinks.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::components::ColourId;
use crate::movement::systems::movement::JumpKind;

/// Fired once per successful jump resolution.
#[derive(Debug)]
pub struct PlayerJumpedEvent {
    pub kind: JumpKind,
}

impl Message for PlayerJumpedEvent {}

/// Fired on the step the player regains ground contact.
#[derive(Debug)]
pub struct PlayerLandedEvent;

impl Message for PlayerLandedEvent {}

#[derive(Debug)]
pub struct PlayerHookedEvent {
    pub hook: Entity,
}

impl Message for PlayerHookedEvent {}

#[derive(Debug)]
pub struct PlayerUnhookedEvent {
    pub exit_velocity: Vec2,
}

impl Message for PlayerUnhookedEvent {}

/// Fired by the colour-switch mechanic when the player's colour flips.
#[derive(Debug)]
pub struct ColourChangedEvent {
    pub colour: ColourId,
}

impl Message for ColourChangedEvent {}

/// Fired by the dash ability; recorded into the ghost stream.
#[derive(Debug)]
pub struct PlayerDashedEvent;

impl Message for PlayerDashedEvent {}

/// Request a head-jump impulse (enemy stomp).
#[derive(Debug)]
pub struct HeadJumpEvent;

impl Message for HeadJumpEvent {}

/// Request a spring slowdown (velocity damping on pad contact).
#[derive(Debug)]
pub struct SpringSlowdownEvent;

impl Message for SpringSlowdownEvent {}

/// Request a spring bounce along the pad's launch normal.
#[derive(Debug)]
pub struct SpringJumpEvent {
    pub normal: Vec2,
}

impl Message for SpringJumpEvent {}

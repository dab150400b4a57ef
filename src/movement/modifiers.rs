//! Movement domain: discrete velocity modifiers (head jump, springs).
//!
//! Each modifier is an idempotent pure transform over the current velocity,
//! applied by a message-driven system when the environment requests it.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::events::{HeadJumpEvent, SpringJumpEvent, SpringSlowdownEvent};
use crate::movement::{MovementState, MovementTuning, Player};

/// Fixed upward impulse used when the player stomps an enemy.
pub(crate) fn head_jump_velocity(velocity: Vec2, head_jump_speed: f32) -> Vec2 {
    Vec2::new(velocity.x, head_jump_speed)
}

/// Uniform damping applied when brushing a spring pad.
pub(crate) fn spring_slowdown(velocity: Vec2, damping: f32) -> Vec2 {
    velocity * damping
}

/// Spring bounce along an arbitrary launch normal: the component tangent to
/// the normal is preserved, the component along the normal is forced outward
/// with at least `min_bounce` magnitude.
pub(crate) fn spring_jump(velocity: Vec2, normal: Vec2, min_bounce: f32) -> Vec2 {
    let n = normal.normalize_or_zero();
    if n == Vec2::ZERO {
        return velocity;
    }
    let along = velocity - velocity.dot(n) * n;
    let bounce = velocity.dot(n).abs().max(min_bounce);
    along + n * bounce
}

pub(crate) fn apply_modifiers(
    tuning: Res<MovementTuning>,
    mut head_jumps: MessageReader<HeadJumpEvent>,
    mut slowdowns: MessageReader<SpringSlowdownEvent>,
    mut springs: MessageReader<SpringJumpEvent>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        for _ in head_jumps.read() {
            velocity.0 = head_jump_velocity(velocity.0, tuning.head_jump_speed);
        }
        for _ in slowdowns.read() {
            velocity.0 = spring_slowdown(velocity.0, tuning.spring_damping);
        }
        for spring in springs.read() {
            velocity.0 = spring_jump(velocity.0, spring.normal, tuning.spring_min_bounce);
            // A spring launch gives the double jump back
            state.has_double_jumped = false;
        }
    }
}

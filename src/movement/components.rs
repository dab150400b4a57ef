//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Zipline hook points
    Hook,
    /// Sensors (finish trigger, pickups) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Blocks hooking and jump resolution until respawn.
#[derive(Component, Debug)]
pub struct PlayerDead;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub on_wall_left: bool,
    pub on_wall_right: bool,
    /// Consumed by a mid-air jump; cleared on ground or hook contact.
    pub has_double_jumped: bool,
    pub facing: Facing,
    /// Countdown timers. All decrement once per fixed step, never below zero.
    pub coyote: f32,
    pub jump_buffer: f32,
    pub jump_cooldown: f32,
}

/// Hook attachment state. At most one hook owns the connection at a time.
#[derive(Component, Debug, Default)]
pub struct HookState {
    pub current_hook: Option<Entity>,
    /// Per-step delta of the hook transform while attached. Becomes the
    /// exit velocity (scaled) when unhooking without an override.
    pub hook_velocity: Vec2,
    pub last_hook_pos: Option<Vec2>,
    /// Re-hook cooldown applies only to the hook we just left.
    pub cooldown_hook: Option<Entity>,
    pub cooldown: f32,
}

impl HookState {
    pub fn is_hooked(&self) -> bool {
        self.current_hook.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }
}

/// The colour-switch mechanic's current colour. Recorded per ghost frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum ColourId {
    #[default]
    Cyan,
    Magenta,
    Yellow,
}

#[derive(Component, Debug, Default)]
pub struct PlayerColour(pub ColourId);

/// Hash of the current animation state, sampled by the ghost recorder.
#[derive(Component, Debug, Default)]
pub struct AnimationTag(pub u32);

/// Animation state hashes. Stable values: recorded ghosts replay them.
pub mod anim {
    pub const IDLE: u32 = 0x0049_444C;
    pub const RUN: u32 = 0x0052_554E;
    pub const JUMP: u32 = 0x004A_4D50;
    pub const FALL: u32 = 0x0046_414C;
    pub const ZIPLINE: u32 = 0x005A_4950;
}

/// Marker for the level-end sensor. Overlapping it fires the victory event.
#[derive(Component, Debug)]
pub struct FinishTrigger;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

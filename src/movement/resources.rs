//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Per-second smoothing rates for the exponential approach toward the
    /// target horizontal speed. Separate rates for accelerating and for
    /// returning to rest.
    pub accel_smoothing: f32,
    pub decel_smoothing: f32,
    pub gravity: f32,
    /// Extra downward acceleration multiplier while already falling.
    pub fall_multiplier: f32,
    pub max_fall_speed: f32,
    pub jump_speed: f32,
    pub double_jump_speed: f32,
    pub wall_jump_horizontal: f32,
    pub wall_jump_vertical: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub jump_cooldown: f32,
    /// Re-hook delay for the hook we just detached from.
    pub hook_cooldown: f32,
    /// Scales the tracked hook velocity applied on unhook.
    pub zipline_exit_force: f32,
    pub head_jump_speed: f32,
    pub spring_damping: f32,
    pub spring_min_bounce: f32,
    /// Probe geometry for ground/wall sensing.
    pub body_half_width: f32,
    pub body_half_height: f32,
    pub ground_probe_offset: f32,
    pub ground_ray_distance: f32,
    pub wall_ray_distance: f32,
    pub wall_ray_heights: [f32; 3],
    pub corner_probe_radius: f32,
    pub corner_probe_height: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 340.0,
            accel_smoothing: 14.0,
            decel_smoothing: 20.0,
            gravity: 1800.0,
            fall_multiplier: 1.6,
            max_fall_speed: 900.0,
            jump_speed: 640.0,
            double_jump_speed: 560.0,
            wall_jump_horizontal: 420.0,
            wall_jump_vertical: 600.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.12,
            jump_cooldown: 0.2,
            hook_cooldown: 0.5,
            zipline_exit_force: 1.15,
            head_jump_speed: 520.0,
            spring_damping: 0.55,
            spring_min_bounce: 700.0,
            body_half_width: 12.0,
            body_half_height: 24.0,
            ground_probe_offset: 9.0,
            ground_ray_distance: 5.0,
            wall_ray_distance: 4.0,
            wall_ray_heights: [-18.0, 0.0, 20.0],
            corner_probe_radius: 6.0,
            corner_probe_height: 20.0,
        }
    }
}

/// Pull-based input snapshot. Edge flags accumulate during the render frames
/// leading up to a fixed step and are cleared once that step has consumed
/// them, so a press between physics ticks is never lost.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: f32,
    pub jump_pressed: bool,
    pub drop_pressed: bool,
}

//! Zipline domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct ZiplineTuning {
    /// Curve progress per second while traversing.
    pub progress_speed: f32,
    /// Distance from the curve within which the hook snaps on.
    pub activation_radius: f32,
    /// Attach points within this band of either end traverse toward that end.
    pub end_band: f32,
    /// Grace period after hooking during which lean is predicted from
    /// simulated steps instead of measured velocity.
    pub stabilization_time: f32,
    pub lean_velocity_sensitivity: f32,
    pub lean_accel_sensitivity: f32,
    pub lean_strength: f32,
    pub max_lean_degrees: f32,
}

impl Default for ZiplineTuning {
    fn default() -> Self {
        Self {
            progress_speed: 0.45,
            activation_radius: 28.0,
            end_band: 0.12,
            stabilization_time: 0.12,
            lean_velocity_sensitivity: 0.014,
            lean_accel_sensitivity: 0.004,
            lean_strength: 1.0,
            max_lean_degrees: 35.0,
        }
    }
}

//! Zipline domain: components and spawn helper.

use bevy::prelude::*;

use crate::zipline::curve::CubicBezier;

#[derive(Component, Debug)]
pub struct Zipline {
    pub curve: CubicBezier,
    /// The movable anchor the player's body is joined to while traversing.
    pub hook: Entity,
}

/// Marker for zipline hook point entities.
#[derive(Component, Debug)]
pub struct ZiplineHook;

/// Present on a zipline while the player is riding it.
#[derive(Component, Debug)]
pub struct ZiplineRide {
    pub progress: f32,
    /// +1 toward p3, -1 toward p0. Fixed at hook time.
    pub direction: f32,
    /// Remaining stabilisation window during which lean is predicted
    /// instead of measured.
    pub stabilize: f32,
    /// Horizontal hook velocity of the previous step, for the discrete
    /// acceleration estimate.
    pub last_vx: f32,
}

/// Spawn a zipline and its hook point; returns the zipline entity.
pub fn spawn_zipline(commands: &mut Commands, curve: CubicBezier) -> Entity {
    let start = curve.point(0.0);
    let hook = commands
        .spawn((
            ZiplineHook,
            Sprite {
                color: Color::srgb(0.9, 0.8, 0.3),
                custom_size: Some(Vec2::splat(10.0)),
                ..default()
            },
            Transform::from_xyz(start.x, start.y, 1.0),
        ))
        .id();

    commands.spawn((Zipline { curve, hook }, Transform::default())).id()
}

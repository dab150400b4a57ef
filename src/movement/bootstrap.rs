//! Movement domain: player spawn on level start.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AnimationTag, GameLayer, HookState, MovementState, MovementTuning, Player, PlayerColour,
};

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing: Query<Entity, With<Player>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let width = tuning.body_half_width * 2.0;
    let height = tuning.body_half_height * 2.0;
    info!("Spawning player ({}x{})", width, height);

    commands.spawn((
        (
            Player,
            MovementState::default(),
            HookState::default(),
            PlayerColour::default(),
            AnimationTag::default(),
        ),
        Sprite {
            color: Color::srgb(0.35, 0.9, 0.95),
            custom_size: Some(Vec2::new(width, height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(width, height),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            // Gravity is integrated manually (fall multiplier, hook state)
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
            ),
        ),
    ));
}

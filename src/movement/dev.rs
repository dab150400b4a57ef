//! Movement domain: debug-only test level geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{FinishTrigger, GameLayer, Ground, Wall};

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(900.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        ground_layers,
    ));

    // Side walls for wall-jump practice
    for x in [-470.0, 470.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 520.0)),
                ..default()
            },
            Transform::from_xyz(x, 60.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 520.0),
            wall_layers,
        ));
    }

    // Step platform
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(160.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-220.0, -60.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(160.0, 20.0),
        ground_layers,
    ));

    // Finish trigger at the right end of the ground
    commands.spawn((
        FinishTrigger,
        Sprite {
            color: Color::srgba(0.95, 0.9, 0.3, 0.4),
            custom_size: Some(Vec2::new(30.0, 80.0)),
            ..default()
        },
        Transform::from_xyz(420.0, -140.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(30.0, 80.0),
        Sensor,
        CollidingEntities::default(),
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}

mod content;
mod core;
mod ghost;
mod movement;
mod zipline;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Chroma Dash".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            content::ContentPlugin,
            core::CorePlugin,
            movement::MovementPlugin,
            zipline::ZiplinePlugin,
            ghost::GhostPlugin,
        ))
        .run();
}

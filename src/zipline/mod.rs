//! Zipline domain: curve-following hook physics layered on the movement
//! hook mechanism.

mod components;
mod curve;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Zipline, ZiplineHook, ZiplineRide, spawn_zipline};
pub use curve::CubicBezier;
pub use resources::ZiplineTuning;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::movement::MovementSet;

pub struct ZiplinePlugin;

impl Plugin for ZiplinePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ZiplineTuning>().add_systems(
            FixedUpdate,
            (
                systems::attach_zipline,
                systems::traverse_zipline,
                systems::lean_zipline,
            )
                .chain()
                .before(MovementSet)
                .run_if(in_state(GameState::Playing))
                .run_if(gameplay_active),
        );

        #[cfg(feature = "dev-tools")]
        app.add_systems(OnEnter(GameState::Playing), spawn_test_zipline);
    }
}

#[cfg(feature = "dev-tools")]
fn spawn_test_zipline(mut commands: Commands) {
    spawn_zipline(
        &mut commands,
        CubicBezier::new(
            Vec2::new(-380.0, 160.0),
            Vec2::new(-150.0, 40.0),
            Vec2::new(150.0, 40.0),
            Vec2::new(380.0, 200.0),
        ),
    );
}

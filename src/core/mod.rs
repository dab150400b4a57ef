//! Core domain: level flow, session context, and persistence.

mod events;
mod resources;
mod save;
mod state;
mod systems;
#[cfg(test)]
mod tests;
mod timing;

pub use events::{
    CollectibleFoundEvent, DashCollectedEvent, DroneKilledEvent, LevelStartedEvent,
    LevelVictoryEvent,
};
pub use resources::{GameplayPaused, GateStatus, LevelSession, ServicesGate, gameplay_active};
pub use save::GhostStore;
pub use state::GameState;
pub use timing::format_run_time;

use bevy::prelude::*;

use crate::core::systems::{await_services, begin_loading, handle_victory, setup_camera, tick_session};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .init_resource::<LevelSession>()
            .init_resource::<ServicesGate>()
            .init_resource::<GhostStore>()
            .add_message::<LevelStartedEvent>()
            .add_message::<LevelVictoryEvent>()
            .add_message::<DroneKilledEvent>()
            .add_message::<CollectibleFoundEvent>()
            .add_message::<DashCollectedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Boot), begin_loading)
            .add_systems(Update, await_services.run_if(in_state(GameState::Loading)))
            .add_systems(
                Update,
                (tick_session, handle_victory).run_if(in_state(GameState::Playing)),
            );
    }
}

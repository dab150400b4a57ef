//! Core domain: level flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::{LevelStartedEvent, LevelVictoryEvent};
use crate::core::resources::{GateStatus, LevelSession, ServicesGate};
use crate::core::state::GameState;
use crate::core::timing::format_run_time;

pub(crate) fn begin_loading(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Loading);
}

/// Poll the external-services gate while loading. Once resolved (ready or
/// timed out), start the attempt. Degraded mode just means achievement
/// wiring is skipped; the level always starts.
pub(crate) fn await_services(
    time: Res<Time>,
    mut gate: ResMut<ServicesGate>,
    mut session: ResMut<LevelSession>,
    mut game_state: ResMut<NextState<GameState>>,
    mut started: MessageWriter<LevelStartedEvent>,
) {
    match gate.poll(time.delta_secs()) {
        GateStatus::Waiting => return,
        GateStatus::Degraded => {
            warn!("External services unavailable, starting without achievement wiring");
        }
        GateStatus::Ready => {}
    }

    let level_id = session.level_id.clone();
    session.restart(level_id.clone());
    info!(
        "Starting attempt on {} (seed {})",
        level_id, session.attempt_seed
    );
    started.write(LevelStartedEvent { level_id });
    game_state.set(GameState::Playing);
}

/// Advance the run clock while playing.
pub(crate) fn tick_session(time: Res<Time>, mut session: ResMut<LevelSession>) {
    if !session.victory {
        session.elapsed += time.delta_secs();
    }
}

pub(crate) fn handle_victory(
    mut events: MessageReader<LevelVictoryEvent>,
    mut session: ResMut<LevelSession>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        session.victory = true;
        info!("Level complete in {}", format_run_time(event.run_time_ms));
        game_state.set(GameState::Victory);
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

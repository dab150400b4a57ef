//! Ghost domain: spectator entity glue around recorder and playback.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;
use std::sync::Arc;

use crate::core::{
    CollectibleFoundEvent, DashCollectedEvent, DroneKilledEvent, GameState, GhostStore,
    LevelSession, LevelStartedEvent, LevelVictoryEvent,
};
use crate::ghost::codec;
use crate::ghost::playback::GhostPlayback;
use crate::ghost::recorder::{FrameSnapshot, GhostRecorder};
use crate::ghost::resources::GhostTuning;
use crate::ghost::types::{GhostEventKind, GhostRun};
use crate::movement::events::{
    PlayerDashedEvent, PlayerHookedEvent, PlayerJumpedEvent, PlayerLandedEvent,
    PlayerUnhookedEvent,
};
use crate::movement::{AnimationTag, MovementState, MovementTuning, Player, PlayerColour};

/// A replaying ghost proxy. Non-physical: transform-only.
#[derive(Component)]
pub struct Ghost {
    pub playback: GhostPlayback,
}

/// The ghost the player is actively watching; its colour changes drive the
/// time-slow collaborators.
#[derive(Component, Debug)]
pub struct Spectated;

/// Remaining colour-change flash time.
#[derive(Component, Debug, Default)]
pub(crate) struct GhostFlash(pub f32);

/// Replayed ghost event, for audio/achievement sinks. Suppressed while the
/// scene is not in active play.
#[derive(Debug)]
pub struct GhostReplayEvent {
    pub kind: GhostEventKind,
    pub data: u16,
}

impl Message for GhostReplayEvent {}

/// Fired when the spectated ghost switches colour mid-playback.
#[derive(Debug)]
pub struct TimeSlowEvent;

impl Message for TimeSlowEvent {}

/// On level start: reset the recorder and spawn the persisted best ghost,
/// if any. A missing or corrupt blob degrades to "no ghost".
pub(crate) fn start_attempt(
    mut commands: Commands,
    mut started: MessageReader<LevelStartedEvent>,
    mut recorder: ResMut<GhostRecorder>,
    store: Res<GhostStore>,
    tuning: Res<GhostTuning>,
    movement_tuning: Res<MovementTuning>,
    existing: Query<Entity, With<Ghost>>,
) {
    for event in started.read() {
        recorder.begin();

        for entity in &existing {
            commands.entity(entity).despawn();
        }

        let Some(blob) = store.load(&event.level_id) else {
            debug!("No ghost stored for {}", event.level_id);
            continue;
        };
        let run = match codec::decode(blob) {
            Ok(run) => run,
            Err(e) => {
                warn!("Stored ghost for {} is unreadable, ignoring: {}", event.level_id, e);
                continue;
            }
        };
        let Some(playback) = GhostPlayback::new(Arc::new(run)) else {
            debug!("Stored ghost for {} has no frames, ignoring", event.level_id);
            continue;
        };

        info!("Spawning ghost for {}", event.level_id);
        commands.spawn((
            Ghost { playback },
            Spectated,
            GhostFlash::default(),
            Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, tuning.ghost_alpha),
                custom_size: Some(Vec2::new(
                    movement_tuning.body_half_width * 2.0,
                    movement_tuning.body_half_height * 2.0,
                )),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 0.5),
        ));
    }
}

/// Interval-sample the live player into the recorder.
pub(crate) fn record_frames(
    time: Res<Time>,
    tuning: Res<GhostTuning>,
    mut recorder: ResMut<GhostRecorder>,
    player: Query<(&Transform, &PlayerColour, &AnimationTag, &MovementState), With<Player>>,
) {
    let Ok((transform, colour, animation, state)) = player.single() else {
        return;
    };

    recorder.tick(
        time.delta_secs(),
        tuning.recording_interval,
        FrameSnapshot {
            position: transform.translation.truncate(),
            z_rotation: transform.rotation.to_euler(EulerRot::ZYX).0.to_degrees(),
            colour: colour.0,
            animation_hash: animation.0,
            facing_right: state.facing.is_right(),
        },
    );
}

/// Forward discrete gameplay events into the recorder at their exact
/// elapsed time.
pub(crate) fn record_events(
    mut recorder: ResMut<GhostRecorder>,
    mut jumps: MessageReader<PlayerJumpedEvent>,
    mut lands: MessageReader<PlayerLandedEvent>,
    mut dashes: MessageReader<PlayerDashedEvent>,
    mut hooks: MessageReader<PlayerHookedEvent>,
    mut unhooks: MessageReader<PlayerUnhookedEvent>,
    mut drones: MessageReader<DroneKilledEvent>,
    mut collectibles: MessageReader<CollectibleFoundEvent>,
    mut orbs: MessageReader<DashCollectedEvent>,
) {
    for _ in jumps.read() {
        recorder.push_event(GhostEventKind::Jump, 0);
    }
    for _ in lands.read() {
        recorder.push_event(GhostEventKind::Land, 0);
    }
    for _ in dashes.read() {
        recorder.push_event(GhostEventKind::Dash, 0);
    }
    for _ in hooks.read() {
        recorder.push_event(GhostEventKind::ZiplineHook, 0);
    }
    for _ in unhooks.read() {
        recorder.push_event(GhostEventKind::ZiplineUnhook, 0);
    }
    for event in drones.read() {
        recorder.push_event(GhostEventKind::DroneKill, event.drone_id);
    }
    for event in collectibles.read() {
        recorder.push_event(GhostEventKind::CollectibleFound, event.collectible_id);
    }
    for event in orbs.read() {
        recorder.push_event(GhostEventKind::DashCollection, event.orb_id);
    }
}

/// On victory: finish the recording and persist it if it beats the stored
/// best (or the stored best is unreadable).
pub(crate) fn save_ghost_on_victory(
    mut victories: MessageReader<LevelVictoryEvent>,
    mut recorder: ResMut<GhostRecorder>,
    mut store: ResMut<GhostStore>,
    session: Res<LevelSession>,
) {
    for _ in victories.read() {
        recorder.mark_victory();
        let run = recorder.finish();
        if !run.is_playable() {
            warn!("Finished run has no frames, not saving");
            continue;
        }

        if !beats_stored_best(&run, store.load(&session.level_id)) {
            info!("Run slower than stored best ghost, keeping old one");
            continue;
        }

        match codec::encode(&run) {
            Ok(blob) => {
                info!(
                    "Saving best ghost for {} ({} frames, {} events)",
                    session.level_id,
                    run.frames.len(),
                    run.events.len()
                );
                store.store(session.level_id.clone(), blob);
            }
            Err(e) => warn!("Failed to encode ghost run: {}", e),
        }
    }
}

fn beats_stored_best(run: &GhostRun, stored: Option<&str>) -> bool {
    let Some(blob) = stored else {
        return true;
    };
    match codec::decode(blob) {
        Ok(best) => run.victory_time < best.victory_time,
        // unreadable old blob: overwrite it
        Err(_) => true,
    }
}

/// Drive every ghost one step and apply the visual proxy state.
pub(crate) fn drive_ghosts(
    mut commands: Commands,
    time: Res<Time>,
    state: Res<State<GameState>>,
    tuning: Res<GhostTuning>,
    mut ghosts: Query<(
        Entity,
        &mut Ghost,
        &mut Transform,
        &mut GhostFlash,
        Has<Spectated>,
    )>,
    mut replayed: MessageWriter<GhostReplayEvent>,
    mut time_slow: MessageWriter<TimeSlowEvent>,
) {
    // Side effects that are dangerous mid-load (audio, time slow) are
    // suppressed outside active play; indices still advance.
    let live = *state.get() == GameState::Playing;

    for (entity, mut ghost, mut transform, mut flash, spectated) in &mut ghosts {
        let step = ghost.playback.step(time.delta_secs());

        transform.translation.x = step.position.x;
        transform.translation.y = step.position.y;
        transform.rotation = Quat::from_rotation_z(step.rotation_degrees.to_radians());

        if live {
            for event in &step.events {
                replayed.write(GhostReplayEvent {
                    kind: event.kind,
                    data: event.data,
                });
            }
        }

        if step.colour_changed {
            flash.0 = tuning.flash_duration;
            if spectated && live {
                time_slow.write(TimeSlowEvent);
            }
        }

        if let Some(progress) = ghost.playback.shrink_progress() {
            let scale = 1.0 - progress;
            transform.scale = Vec3::new(scale, scale, 1.0);
            if step.finished && progress >= 1.0 {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Decay the colour-change flash.
pub(crate) fn flash_ghosts(
    time: Res<Time>,
    tuning: Res<GhostTuning>,
    mut ghosts: Query<(&mut GhostFlash, &mut Sprite), With<Ghost>>,
) {
    for (mut flash, mut sprite) in &mut ghosts {
        if flash.0 <= 0.0 {
            continue;
        }
        flash.0 = (flash.0 - time.delta_secs()).max(0.0);
        // brighten toward white at the start of the flash, ease back down
        let boost = (flash.0 / tuning.flash_duration).clamp(0.0, 1.0);
        let alpha = tuning.ghost_alpha + (1.0 - tuning.ghost_alpha) * boost;
        sprite.color.set_alpha(alpha);
    }
}

/// Scene teardown: despawn ghosts mid-playback without completing shrink
/// sequences or pending events.
pub(crate) fn teardown_ghosts(mut commands: Commands, ghosts: Query<Entity, With<Ghost>>) {
    for entity in &ghosts {
        commands.entity(entity).despawn();
    }
}

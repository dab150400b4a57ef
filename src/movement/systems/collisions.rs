//! Movement domain: ground and wall sensing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{LevelSession, LevelVictoryEvent};
use crate::movement::events::PlayerLandedEvent;
use crate::movement::{FinishTrigger, GameLayer, MovementState, MovementTuning, Player};

/// Grounded iff a down probe hits and no up probe does. The up rays reject
/// the ceiling false-positive when the body is squeezed into a one-tile gap.
pub(crate) fn grounded_from_probes(down_hits: [bool; 2], up_hits: [bool; 2]) -> bool {
    (down_hits[0] || down_hits[1]) && !(up_hits[0] || up_hits[1])
}

/// Touching a wall iff any of the three height rays hit and the corner
/// overlap probe is occupied. A clear corner probe means the body is at a
/// ledge lip, which must not count as a wall.
pub(crate) fn wall_from_probes(ray_hits: [bool; 3], corner_occupied: bool) -> bool {
    (ray_hits[0] || ray_hits[1] || ray_hits[2]) && corner_occupied
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
    mut landed: MessageWriter<PlayerLandedEvent>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;
        let center = transform.translation.truncate();

        let mut down_hits = [false; 2];
        let mut up_hits = [false; 2];
        for (i, side) in [-1.0f32, 1.0].into_iter().enumerate() {
            let x = side * tuning.ground_probe_offset;
            let feet = center + Vec2::new(x, -tuning.body_half_height);
            let head = center + Vec2::new(x, tuning.body_half_height);
            down_hits[i] = spatial_query
                .cast_ray(
                    feet,
                    Dir2::NEG_Y,
                    tuning.ground_ray_distance,
                    true,
                    &ground_filter,
                )
                .is_some();
            up_hits[i] = spatial_query
                .cast_ray(
                    head,
                    Dir2::Y,
                    tuning.ground_ray_distance,
                    true,
                    &ground_filter,
                )
                .is_some();
        }

        state.on_ground = grounded_from_probes(down_hits, up_hits);

        if state.on_ground && !was_on_ground {
            state.has_double_jumped = false;
            debug!("Landed");
            landed.write(PlayerLandedEvent);
        }
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);
    let corner_probe = Collider::circle(tuning.corner_probe_radius);

    for (transform, mut state) in &mut query {
        let center = transform.translation.truncate();

        let mut touching = [false; 2];
        for (i, side) in [-1.0f32, 1.0].into_iter().enumerate() {
            let dir = if side < 0.0 { Dir2::NEG_X } else { Dir2::X };

            let reach = tuning.body_half_width + tuning.wall_ray_distance;
            let mut ray_hits = [false; 3];
            for (j, height) in tuning.wall_ray_heights.into_iter().enumerate() {
                let origin = center + Vec2::new(0.0, height);
                ray_hits[j] = spatial_query
                    .cast_ray(origin, dir, reach, true, &wall_filter)
                    .is_some();
            }

            let corner_pos = center + Vec2::new(side * reach, tuning.corner_probe_height);
            let corner_occupied = !spatial_query
                .shape_intersections(&corner_probe, corner_pos, 0.0, &wall_filter)
                .is_empty();

            touching[i] = wall_from_probes(ray_hits, corner_occupied);
        }

        state.on_wall_left = touching[0];
        state.on_wall_right = touching[1];
    }
}

/// Fire the victory event when the player overlaps a finish sensor. The
/// session victory flag (set by the core handler the same frame) keeps this
/// to one event per attempt.
pub(crate) fn detect_finish(
    session: Res<LevelSession>,
    triggers: Query<&CollidingEntities, With<FinishTrigger>>,
    players: Query<Entity, With<Player>>,
    mut victories: MessageWriter<LevelVictoryEvent>,
) {
    if session.victory {
        return;
    }
    let Ok(player) = players.single() else {
        return;
    };

    for colliding in &triggers {
        if colliding.contains(&player) {
            info!("Finish trigger crossed at {} ms", session.elapsed_ms());
            victories.write(LevelVictoryEvent {
                run_time_ms: session.elapsed_ms(),
            });
            return;
        }
    }
}

//! Zipline domain: attach, traversal, and hook lean systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::events::{PlayerHookedEvent, PlayerUnhookedEvent};
use crate::movement::{self, HookState, MovementState, MovementTuning, Player, PlayerDead};
use crate::zipline::components::{Zipline, ZiplineHook, ZiplineRide};
use crate::zipline::curve::choose_direction;
use crate::zipline::resources::ZiplineTuning;

/// Lean angle in degrees from horizontal velocity and its discrete
/// acceleration estimate.
pub(crate) fn lean_angle(vx: f32, ax: f32, tuning: &ZiplineTuning) -> f32 {
    let raw = -(vx * tuning.lean_velocity_sensitivity + ax * tuning.lean_accel_sensitivity)
        * tuning.lean_strength;
    raw.clamp(-tuning.max_lean_degrees, tuning.max_lean_degrees)
}

/// While the player is unhooked, test proximity to each zipline curve and
/// snap the hook on within the activation radius.
pub(crate) fn attach_zipline(
    mut commands: Commands,
    tuning: Res<ZiplineTuning>,
    ziplines: Query<(Entity, &Zipline), Without<ZiplineRide>>,
    mut hooks: Query<&mut Transform, (With<ZiplineHook>, Without<Player>)>,
    mut player: Query<
        (
            &Transform,
            &mut MovementState,
            &mut HookState,
            &mut LinearVelocity,
            Has<PlayerDead>,
        ),
        With<Player>,
    >,
    mut hooked: MessageWriter<PlayerHookedEvent>,
) {
    let Ok((transform, mut state, mut hook_state, mut velocity, dead)) = player.single_mut()
    else {
        return;
    };
    if hook_state.is_hooked() {
        return;
    }

    let pos = transform.translation.truncate();

    for (zipline_entity, zipline) in &ziplines {
        let t = zipline.curve.closest_t(pos);
        let snap = zipline.curve.point(t);
        if pos.distance(snap) > tuning.activation_radius {
            continue;
        }

        let Ok(mut hook_transform) = hooks.get_mut(zipline.hook) else {
            continue;
        };

        let direction = choose_direction(t, velocity.0, zipline.curve.tangent(t), tuning.end_band);

        if movement::try_hook(
            &mut state,
            &mut hook_state,
            &mut velocity,
            zipline.hook,
            snap,
            dead,
        ) {
            hook_transform.translation.x = snap.x;
            hook_transform.translation.y = snap.y;
            commands.entity(zipline_entity).insert(ZiplineRide {
                progress: t,
                direction,
                stabilize: tuning.stabilization_time,
                last_vx: 0.0,
            });
            debug!("Zipline hooked at t={:.3}, direction={}", t, direction);
            hooked.write(PlayerHookedEvent { hook: zipline.hook });
            return;
        }
    }
}

/// Advance curve progress at constant speed and move the hook to the curve
/// point. On reaching either end, the exit velocity is sampled over the last
/// fractional step so the handoff to free-body motion has no discontinuity.
pub(crate) fn traverse_zipline(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<ZiplineTuning>,
    movement_tuning: Res<MovementTuning>,
    mut ziplines: Query<(Entity, &Zipline, &mut ZiplineRide)>,
    mut hooks: Query<&mut Transform, (With<ZiplineHook>, Without<Player>)>,
    mut player: Query<(&mut HookState, &mut LinearVelocity), With<Player>>,
    mut unhooked: MessageWriter<PlayerUnhookedEvent>,
) {
    let dt = time.delta_secs();
    let Ok((mut hook_state, mut velocity)) = player.single_mut() else {
        return;
    };

    for (zipline_entity, zipline, mut ride) in &mut ziplines {
        // The ride ends implicitly if the player jumped or dropped off
        if hook_state.current_hook != Some(zipline.hook) {
            commands.entity(zipline_entity).remove::<ZiplineRide>();
            continue;
        }

        let step = ride.direction * tuning.progress_speed * dt;
        let next = ride.progress + step;

        if next <= 0.0 || next >= 1.0 {
            let t_end = next.clamp(0.0, 1.0);
            let covered = (t_end - ride.progress).abs();
            let frac_dt = if step.abs() > f32::EPSILON {
                dt * covered / step.abs()
            } else {
                0.0
            };
            let exit_velocity = if frac_dt > 1e-6 {
                (zipline.curve.point(t_end) - zipline.curve.point(ride.progress)) / frac_dt
            } else {
                hook_state.hook_velocity
            };

            if let Ok(mut hook_transform) = hooks.get_mut(zipline.hook) {
                let end = zipline.curve.point(t_end);
                hook_transform.translation.x = end.x;
                hook_transform.translation.y = end.y;
                hook_transform.rotation = Quat::IDENTITY;
            }

            if movement::try_unhook(
                &mut hook_state,
                &mut velocity,
                Some(exit_velocity),
                movement_tuning.zipline_exit_force,
                movement_tuning.hook_cooldown,
            ) {
                debug!("Zipline end reached, exit velocity {:?}", exit_velocity);
                unhooked.write(PlayerUnhookedEvent {
                    exit_velocity: velocity.0,
                });
            }
            commands.entity(zipline_entity).remove::<ZiplineRide>();
            continue;
        }

        ride.progress = next;
        if let Ok(mut hook_transform) = hooks.get_mut(zipline.hook) {
            let p = zipline.curve.point(next);
            hook_transform.translation.x = p.x;
            hook_transform.translation.y = p.y;
        }
    }
}

/// Visual lean of the hook while traversing.
///
/// Right after hooking, the measured hook velocity is one garbage sample
/// (the snap itself), which makes the hook twitch. For a short stabilisation
/// window the lean is instead predicted from the next couple of simulated
/// curve steps, then control hands off to the measured
/// velocity/acceleration blend.
pub(crate) fn lean_zipline(
    time: Res<Time>,
    tuning: Res<ZiplineTuning>,
    mut ziplines: Query<(&Zipline, &mut ZiplineRide)>,
    mut hooks: Query<&mut Transform, With<ZiplineHook>>,
    player: Query<&HookState, With<Player>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let Ok(hook_state) = player.single() else {
        return;
    };

    for (zipline, mut ride) in &mut ziplines {
        if hook_state.current_hook != Some(zipline.hook) {
            continue;
        }

        let angle = if ride.stabilize > 0.0 {
            ride.stabilize -= dt;
            let step = ride.direction * tuning.progress_speed * dt;
            let p0 = zipline.curve.point(ride.progress);
            let p1 = zipline.curve.point(ride.progress + step);
            let p2 = zipline.curve.point(ride.progress + 2.0 * step);
            let vx1 = (p1.x - p0.x) / dt;
            let vx2 = (p2.x - p1.x) / dt;
            ride.last_vx = vx1;
            lean_angle(vx1, (vx2 - vx1) / dt, &tuning)
        } else {
            let vx = hook_state.hook_velocity.x;
            let ax = (vx - ride.last_vx) / dt;
            ride.last_vx = vx;
            lean_angle(vx, ax, &tuning)
        };

        if let Ok(mut hook_transform) = hooks.get_mut(zipline.hook) {
            hook_transform.rotation = Quat::from_rotation_z(angle.to_radians());
        }
    }
}

//! Movement domain: hook attach/detach operations and hook-follow integration.
//!
//! `try_hook` / `try_unhook` are plain functions over component data so the
//! zipline systems can call them directly and tests can drive them without
//! an ECS world. Failed preconditions are silent no-ops returning false,
//! never panics.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::events::PlayerUnhookedEvent;
use crate::movement::{HookState, MovementInput, MovementState, MovementTuning, Player};

/// Attach the player to a hook point. Rejected while already hooked, while
/// the same hook's re-hook cooldown is running, or when dead.
pub fn try_hook(
    state: &mut MovementState,
    hook: &mut HookState,
    velocity: &mut LinearVelocity,
    hook_entity: Entity,
    hook_pos: Vec2,
    dead: bool,
) -> bool {
    if dead || hook.is_hooked() {
        return false;
    }
    if hook.cooldown > 0.0 && hook.cooldown_hook == Some(hook_entity) {
        return false;
    }

    velocity.0 = Vec2::ZERO;
    hook.current_hook = Some(hook_entity);
    hook.last_hook_pos = Some(hook_pos);
    hook.hook_velocity = Vec2::ZERO;
    state.has_double_jumped = false;
    true
}

/// Detach from the current hook. The exit velocity is the override if given,
/// otherwise the tracked hook velocity scaled by the exit force multiplier.
/// Arms the re-hook cooldown for the hook we just left (other hooks exempt).
pub fn try_unhook(
    hook: &mut HookState,
    velocity: &mut LinearVelocity,
    override_velocity: Option<Vec2>,
    exit_force: f32,
    cooldown: f32,
) -> bool {
    let Some(hook_entity) = hook.current_hook else {
        return false;
    };

    velocity.0 = override_velocity.unwrap_or(hook.hook_velocity * exit_force);
    hook.cooldown_hook = Some(hook_entity);
    hook.cooldown = cooldown;
    hook.current_hook = None;
    hook.last_hook_pos = None;
    hook.hook_velocity = Vec2::ZERO;
    true
}

/// While hooked the body is not free-integrated: position tracks the hook
/// transform and velocity stays zeroed, with the hook's per-step delta
/// tracked separately for the eventual exit velocity.
pub(crate) fn follow_hook(
    time: Res<Time>,
    hooks: Query<&Transform, Without<Player>>,
    mut query: Query<(&mut Transform, &mut HookState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut hook, mut velocity) in &mut query {
        let Some(hook_entity) = hook.current_hook else {
            continue;
        };
        let Ok(hook_transform) = hooks.get(hook_entity) else {
            // Hook entity despawned under us; drop the connection
            hook.current_hook = None;
            hook.last_hook_pos = None;
            continue;
        };

        let hook_pos = hook_transform.translation.truncate();
        if let Some(last) = hook.last_hook_pos {
            if dt > 0.0 {
                hook.hook_velocity = (hook_pos - last) / dt;
            }
        }
        hook.last_hook_pos = Some(hook_pos);

        transform.translation.x = hook_pos.x;
        transform.translation.y = hook_pos.y;
        velocity.0 = Vec2::ZERO;
    }
}

/// Drop input while hooked detaches with the tracked zipline velocity.
pub(crate) fn drop_unhook(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut HookState, &mut LinearVelocity), With<Player>>,
    mut unhooked: MessageWriter<PlayerUnhookedEvent>,
) {
    if !input.drop_pressed {
        return;
    }

    for (mut hook, mut velocity) in &mut query {
        if try_unhook(
            &mut hook,
            &mut velocity,
            None,
            tuning.zipline_exit_force,
            tuning.hook_cooldown,
        ) {
            unhooked.write(PlayerUnhookedEvent {
                exit_velocity: velocity.0,
            });
        }
    }
}

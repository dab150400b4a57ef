//! Movement domain: timers, jump resolution, and velocity integration.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::events::{ColourChangedEvent, PlayerJumpedEvent, PlayerUnhookedEvent};
use crate::movement::systems::hook;
use crate::movement::{
    AnimationTag, Facing, HookState, MovementInput, MovementState, MovementTuning, Player,
    PlayerColour, PlayerDead, anim,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    WallLeft,
    WallRight,
    Double,
}

/// Everything jump resolution looks at, snapshotted per fixed step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JumpContext {
    pub grounded: bool,
    pub hooked: bool,
    pub coyote_active: bool,
    pub cooldown_expired: bool,
    pub on_wall_left: bool,
    pub on_wall_right: bool,
    pub has_double_jumped: bool,
}

/// Jump precedence, first match wins:
/// 1. ground / hook / coyote jump (gated by the ground-jump cooldown),
/// 2. wall jump (beats double jump whenever a wall is touched),
/// 3. double jump (airborne and unhooked only, once per airtime).
///
/// A grounded or hooked attempt inside the ground-jump cooldown resolves to
/// nothing rather than falling through to the double jump: spending the
/// double jump while the body still has ground or hook contact would break
/// the rule that `has_double_jumped` is false whenever grounded or hooked.
pub(crate) fn resolve_jump(ctx: JumpContext) -> Option<JumpKind> {
    if ctx.cooldown_expired && (ctx.grounded || ctx.hooked || ctx.coyote_active) {
        return Some(JumpKind::Ground);
    }
    if ctx.on_wall_left {
        return Some(JumpKind::WallLeft);
    }
    if ctx.on_wall_right {
        return Some(JumpKind::WallRight);
    }
    if !ctx.grounded && !ctx.hooked && !ctx.has_double_jumped {
        return Some(JumpKind::Double);
    }
    None
}

pub(crate) fn update_timers(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut HookState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut hook) in &mut query {
        state.coyote = (state.coyote - dt).max(0.0);
        state.jump_buffer = (state.jump_buffer - dt).max(0.0);
        state.jump_cooldown = (state.jump_cooldown - dt).max(0.0);
        hook.cooldown = (hook.cooldown - dt).max(0.0);
        if hook.cooldown <= 0.0 {
            hook.cooldown_hook = None;
        }

        // Coyote window stays full while grounded or hooked
        if state.on_ground || hook.is_hooked() {
            state.coyote = tuning.coyote_time;
        }

        if input.jump_pressed {
            state.jump_buffer = tuning.jump_buffer_time;
        }
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&mut MovementState, &mut HookState, &mut LinearVelocity),
        (With<Player>, Without<PlayerDead>),
    >,
    mut jumped: MessageWriter<PlayerJumpedEvent>,
    mut unhooked: MessageWriter<PlayerUnhookedEvent>,
) {
    for (mut state, mut hook, mut velocity) in &mut query {
        // A buffered attempt is retried every step until it fires or expires
        if state.jump_buffer <= 0.0 {
            continue;
        }

        let ctx = JumpContext {
            grounded: state.on_ground,
            hooked: hook.is_hooked(),
            coyote_active: state.coyote > 0.0,
            cooldown_expired: state.jump_cooldown <= 0.0,
            on_wall_left: state.on_wall_left,
            on_wall_right: state.on_wall_right,
            has_double_jumped: state.has_double_jumped,
        };

        let Some(kind) = resolve_jump(ctx) else {
            continue;
        };

        match kind {
            JumpKind::Ground => {
                // Jumping off a hook detaches first, keeping the ride's
                // momentum under the jump
                if hook.is_hooked()
                    && hook::try_unhook(
                        &mut hook,
                        &mut velocity,
                        None,
                        tuning.zipline_exit_force,
                        tuning.hook_cooldown,
                    )
                {
                    unhooked.write(PlayerUnhookedEvent {
                        exit_velocity: velocity.0,
                    });
                }
                velocity.y = tuning.jump_speed;
                state.jump_cooldown = tuning.jump_cooldown;
            }
            JumpKind::WallLeft => {
                velocity.x = tuning.wall_jump_horizontal;
                velocity.y = tuning.wall_jump_vertical;
            }
            JumpKind::WallRight => {
                velocity.x = -tuning.wall_jump_horizontal;
                velocity.y = tuning.wall_jump_vertical;
            }
            JumpKind::Double => {
                // Never slow an ascent that is already faster
                velocity.y = velocity.y.max(tuning.double_jump_speed);
                state.has_double_jumped = true;
            }
        }

        state.jump_buffer = 0.0;
        state.coyote = 0.0;
        debug!("Jump resolved: {:?}", kind);
        jumped.write(PlayerJumpedEvent { kind });
    }
}

/// Frame-rate-independent exponential approach: the same wall-clock duration
/// covers the same fraction of the gap regardless of step size.
pub(crate) fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let blend = 1.0 - (-rate * dt).exp();
    current + (target - current) * blend
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&HookState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (hook, mut velocity) in &mut query {
        if hook.is_hooked() {
            continue;
        }

        let target_vx = input.axis * tuning.move_speed;
        let rate = if input.axis.abs() > 0.1 {
            tuning.accel_smoothing
        } else {
            tuning.decel_smoothing
        };
        velocity.x = approach(velocity.x, target_vx, rate, dt);
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&HookState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (hook, mut velocity) in &mut query {
        if hook.is_hooked() {
            continue;
        }

        velocity.y -= tuning.gravity * dt;
        if velocity.y < 0.0 {
            // Snappier falls than the plain gravity curve
            velocity.y -= tuning.gravity * (tuning.fall_multiplier - 1.0) * dt;
        }
        velocity.y = velocity.y.max(-tuning.max_fall_speed);
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        if input.axis > 0.1 {
            state.facing = Facing::Right;
        } else if input.axis < -0.1 {
            state.facing = Facing::Left;
        }
    }
}

pub(crate) fn update_animation_tag(
    mut query: Query<
        (&MovementState, &HookState, &LinearVelocity, &mut AnimationTag),
        With<Player>,
    >,
) {
    for (state, hook, velocity, mut tag) in &mut query {
        tag.0 = if hook.is_hooked() {
            anim::ZIPLINE
        } else if !state.on_ground {
            if velocity.y > 0.0 { anim::JUMP } else { anim::FALL }
        } else if velocity.x.abs() > 10.0 {
            anim::RUN
        } else {
            anim::IDLE
        };
    }
}

/// Forward colour flips to the audio/time-slow sinks and the recorder.
pub(crate) fn emit_colour_changes(
    query: Query<&PlayerColour, (With<Player>, Changed<PlayerColour>)>,
    mut changed: MessageWriter<ColourChangedEvent>,
) {
    for colour in &query {
        changed.write(ColourChangedEvent { colour: colour.0 });
    }
}

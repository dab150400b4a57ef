//! Movement domain: unit tests for jump resolution, probes, and hook ops.

use avian2d::prelude::{CollidingEntities, LinearVelocity};
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::events::{PlayerJumpedEvent, PlayerUnhookedEvent};
use super::modifiers::{head_jump_velocity, spring_jump, spring_slowdown};
use super::systems::collisions::{grounded_from_probes, wall_from_probes};
use super::systems::hook::{try_hook, try_unhook};
use super::systems::movement::{JumpContext, JumpKind, approach, resolve_jump};
use super::{FinishTrigger, HookState, MovementState, MovementTuning, Player};
use crate::core::{LevelSession, LevelVictoryEvent};

fn airborne_ctx() -> JumpContext {
    JumpContext {
        grounded: false,
        hooked: false,
        coyote_active: false,
        cooldown_expired: true,
        on_wall_left: false,
        on_wall_right: false,
        has_double_jumped: false,
    }
}

// -----------------------------------------------------------------------------
// Jump resolution precedence
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_jump_resolves_first() {
    let ctx = JumpContext {
        grounded: true,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(ctx), Some(JumpKind::Ground));
}

#[test]
fn test_coyote_jump_counts_as_ground_jump() {
    let ctx = JumpContext {
        coyote_active: true,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(ctx), Some(JumpKind::Ground));
}

#[test]
fn test_hooked_jump_counts_as_ground_jump() {
    let ctx = JumpContext {
        hooked: true,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(ctx), Some(JumpKind::Ground));
}

#[test]
fn test_ground_jump_blocked_by_cooldown() {
    // Mashing jump within the cooldown must resolve to nothing: falling
    // through to the double jump here would spend it while still grounded
    let ctx = JumpContext {
        grounded: true,
        cooldown_expired: false,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(ctx), None);
}

#[test]
fn test_double_jump_unavailable_while_grounded_or_hooked() {
    let grounded = JumpContext {
        grounded: true,
        cooldown_expired: false,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(grounded), None);

    // Hooked with the cooldown running: the attempt stays buffered instead
    // of burning the double jump without detaching
    let hooked = JumpContext {
        hooked: true,
        cooldown_expired: false,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(hooked), None);
}

#[test]
fn test_wall_jump_beats_double_jump() {
    // Airborne, touching the left wall, double jump still available:
    // the wall branch must win
    let ctx = JumpContext {
        on_wall_left: true,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(ctx), Some(JumpKind::WallLeft));

    let ctx = JumpContext {
        on_wall_right: true,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(ctx), Some(JumpKind::WallRight));
}

#[test]
fn test_double_jump_available_once() {
    assert_eq!(resolve_jump(airborne_ctx()), Some(JumpKind::Double));

    let spent = JumpContext {
        has_double_jumped: true,
        ..airborne_ctx()
    };
    assert_eq!(resolve_jump(spent), None);
}

// -----------------------------------------------------------------------------
// Probe precedence rules
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_requires_down_hit_without_up_hit() {
    assert!(grounded_from_probes([true, false], [false, false]));
    assert!(grounded_from_probes([false, true], [false, false]));
    // up-ray hit rejects the ceiling false positive
    assert!(!grounded_from_probes([true, true], [true, false]));
    // no hits at all is a valid airborne state
    assert!(!grounded_from_probes([false, false], [false, false]));
}

#[test]
fn test_wall_contact_requires_corner_occupancy() {
    assert!(wall_from_probes([true, true, true], true));
    assert!(wall_from_probes([false, true, false], true));
    // ledge corner: rays hit but the corner probe is clear
    assert!(!wall_from_probes([true, false, false], false));
    assert!(!wall_from_probes([false, false, false], true));
}

// -----------------------------------------------------------------------------
// Hook attach/detach
// -----------------------------------------------------------------------------

fn hook_entities() -> (Entity, Entity) {
    let mut world = World::new();
    (world.spawn_empty().id(), world.spawn_empty().id())
}

#[test]
fn test_try_hook_rejected_while_hooked() {
    let (hook_a, hook_b) = hook_entities();
    let mut state = MovementState::default();
    let mut hook = HookState::default();
    let mut velocity = LinearVelocity(Vec2::new(120.0, -300.0));

    assert!(try_hook(
        &mut state,
        &mut hook,
        &mut velocity,
        hook_a,
        Vec2::ZERO,
        false
    ));
    assert_eq!(velocity.0, Vec2::ZERO);
    assert!(hook.is_hooked());

    // Second attach is a no-op with no state change
    let before = hook.current_hook;
    assert!(!try_hook(
        &mut state,
        &mut hook,
        &mut velocity,
        hook_b,
        Vec2::ZERO,
        false
    ));
    assert_eq!(hook.current_hook, before);
}

#[test]
fn test_try_hook_rejected_when_dead() {
    let (hook_a, _) = hook_entities();
    let mut state = MovementState::default();
    let mut hook = HookState::default();
    let mut velocity = LinearVelocity::default();

    assert!(!try_hook(
        &mut state,
        &mut hook,
        &mut velocity,
        hook_a,
        Vec2::ZERO,
        true
    ));
    assert!(!hook.is_hooked());
}

#[test]
fn test_rehook_cooldown_applies_to_same_hook_only() {
    let (hook_a, hook_b) = hook_entities();
    let mut state = MovementState::default();
    let mut hook = HookState::default();
    let mut velocity = LinearVelocity::default();

    assert!(try_hook(
        &mut state,
        &mut hook,
        &mut velocity,
        hook_a,
        Vec2::ZERO,
        false
    ));
    assert!(try_unhook(&mut hook, &mut velocity, None, 1.0, 0.5));

    // Same hook is blocked while the cooldown runs
    assert!(!try_hook(
        &mut state,
        &mut hook,
        &mut velocity,
        hook_a,
        Vec2::ZERO,
        false
    ));
    // A different hook is exempt
    assert!(try_hook(
        &mut state,
        &mut hook,
        &mut velocity,
        hook_b,
        Vec2::ZERO,
        false
    ));
}

#[test]
fn test_try_unhook_rejected_when_not_hooked() {
    let mut hook = HookState::default();
    let mut velocity = LinearVelocity(Vec2::new(50.0, 50.0));
    assert!(!try_unhook(&mut hook, &mut velocity, None, 1.0, 0.5));
    // no state change on rejection
    assert_eq!(velocity.0, Vec2::new(50.0, 50.0));
}

#[test]
fn test_unhook_applies_tracked_velocity_scaled() {
    let (hook_a, _) = hook_entities();
    let mut state = MovementState::default();
    let mut hook = HookState::default();
    let mut velocity = LinearVelocity::default();

    try_hook(&mut state, &mut hook, &mut velocity, hook_a, Vec2::ZERO, false);
    hook.hook_velocity = Vec2::new(200.0, -40.0);

    assert!(try_unhook(&mut hook, &mut velocity, None, 1.5, 0.5));
    assert_eq!(velocity.0, Vec2::new(300.0, -60.0));
}

#[test]
fn test_unhook_override_velocity_wins() {
    let (hook_a, _) = hook_entities();
    let mut state = MovementState::default();
    let mut hook = HookState::default();
    let mut velocity = LinearVelocity::default();

    try_hook(&mut state, &mut hook, &mut velocity, hook_a, Vec2::ZERO, false);
    hook.hook_velocity = Vec2::new(200.0, 0.0);

    assert!(try_unhook(
        &mut hook,
        &mut velocity,
        Some(Vec2::new(-10.0, 999.0)),
        1.5,
        0.5
    ));
    assert_eq!(velocity.0, Vec2::new(-10.0, 999.0));
}

#[test]
fn test_hooking_restores_double_jump() {
    let (hook_a, _) = hook_entities();
    let mut state = MovementState {
        has_double_jumped: true,
        ..default()
    };
    let mut hook = HookState::default();
    let mut velocity = LinearVelocity::default();

    try_hook(&mut state, &mut hook, &mut velocity, hook_a, Vec2::ZERO, false);
    assert!(!state.has_double_jumped);
}

// -----------------------------------------------------------------------------
// System glue
// -----------------------------------------------------------------------------

#[test]
fn test_jump_off_hook_fires_unhooked_event() {
    let mut app = App::new();
    app.add_message::<PlayerJumpedEvent>()
        .add_message::<PlayerUnhookedEvent>()
        .insert_resource(MovementTuning::default())
        .add_systems(Update, super::systems::movement::apply_jump);

    let hook = app.world_mut().spawn_empty().id();
    let player = app
        .world_mut()
        .spawn((
            Player,
            MovementState {
                jump_buffer: 0.1,
                ..default()
            },
            HookState {
                current_hook: Some(hook),
                hook_velocity: Vec2::new(180.0, 0.0),
                ..default()
            },
            LinearVelocity::default(),
        ))
        .id();

    app.update();

    let world = app.world();
    assert_eq!(world.resource::<Messages<PlayerJumpedEvent>>().len(), 1);
    // Detaching via jump must report the unhook just like drop or ride-end
    assert_eq!(world.resource::<Messages<PlayerUnhookedEvent>>().len(), 1);

    let hook_state = world.get::<HookState>(player).unwrap();
    assert!(!hook_state.is_hooked());
    let velocity = world.get::<LinearVelocity>(player).unwrap();
    assert_eq!(velocity.y, MovementTuning::default().jump_speed);
}

#[test]
fn test_finish_trigger_fires_victory_once() {
    let mut app = App::new();
    app.add_message::<LevelVictoryEvent>()
        .insert_resource(LevelSession::default())
        .add_systems(Update, super::systems::collisions::detect_finish);

    let player = app.world_mut().spawn(Player).id();
    let mut colliding = CollidingEntities::default();
    colliding.insert(player);
    app.world_mut().spawn((FinishTrigger, colliding));

    app.update();
    let fired = app
        .world_mut()
        .resource_mut::<Messages<LevelVictoryEvent>>()
        .drain()
        .count();
    assert_eq!(fired, 1);

    // Once the session is marked victorious the trigger stays quiet
    app.world_mut().resource_mut::<LevelSession>().victory = true;
    app.update();
    let fired = app
        .world_mut()
        .resource_mut::<Messages<LevelVictoryEvent>>()
        .drain()
        .count();
    assert_eq!(fired, 0);
}

// -----------------------------------------------------------------------------
// Velocity helpers
// -----------------------------------------------------------------------------

#[test]
fn test_approach_is_framerate_independent() {
    let one_step = approach(0.0, 100.0, 12.0, 1.0 / 60.0);
    let mut split = 0.0;
    split = approach(split, 100.0, 12.0, 1.0 / 120.0);
    split = approach(split, 100.0, 12.0, 1.0 / 120.0);
    assert!((one_step - split).abs() < 1e-3);
}

#[test]
fn test_head_jump_keeps_horizontal_velocity() {
    let v = head_jump_velocity(Vec2::new(150.0, -400.0), 520.0);
    assert_eq!(v, Vec2::new(150.0, 520.0));
}

#[test]
fn test_spring_slowdown_scales_velocity() {
    let v = spring_slowdown(Vec2::new(200.0, -100.0), 0.5);
    assert_eq!(v, Vec2::new(100.0, -50.0));
}

#[test]
fn test_spring_jump_clamps_bounce_component() {
    // Falling slowly onto an upward spring: bounce clamps to the minimum
    let v = spring_jump(Vec2::new(100.0, -50.0), Vec2::Y, 700.0);
    assert!((v.x - 100.0).abs() < 1e-4);
    assert!((v.y - 700.0).abs() < 1e-4);

    // Fast incoming speed along the normal is kept (reflected outward)
    let v = spring_jump(Vec2::new(100.0, -900.0), Vec2::Y, 700.0);
    assert!((v.y - 900.0).abs() < 1e-4);
}

#[test]
fn test_spring_jump_angled_normal() {
    // Launch along +X: the vertical (tangential) part survives, the
    // horizontal part becomes the bounce
    let v = spring_jump(Vec2::new(0.0, -300.0), Vec2::X, 500.0);
    assert!((v.x - 500.0).abs() < 1e-4);
    assert!((v.y + 300.0).abs() < 1e-4);
}

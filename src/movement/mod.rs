//! Movement domain: platformer state machine, hook mechanics, and input.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
pub mod events;
mod modifiers;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    AnimationTag, ColourId, Facing, FinishTrigger, GameLayer, Ground, HookState, MovementState,
    Player, PlayerColour, PlayerDead, Wall, anim,
};
pub use resources::{MovementInput, MovementTuning};
pub use systems::hook::{try_hook, try_unhook};
pub use systems::movement::JumpKind;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::movement::events::{
    ColourChangedEvent, HeadJumpEvent, PlayerDashedEvent, PlayerHookedEvent, PlayerJumpedEvent,
    PlayerLandedEvent, PlayerUnhookedEvent, SpringJumpEvent, SpringSlowdownEvent,
};

/// Fixed-step movement systems. Zipline systems order themselves against
/// this set so hook transforms are updated before the body follows them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<PlayerJumpedEvent>()
            .add_message::<PlayerLandedEvent>()
            .add_message::<PlayerHookedEvent>()
            .add_message::<PlayerUnhookedEvent>()
            .add_message::<ColourChangedEvent>()
            .add_message::<PlayerDashedEvent>()
            .add_message::<HeadJumpEvent>()
            .add_message::<SpringSlowdownEvent>()
            .add_message::<SpringJumpEvent>()
            .add_systems(OnEnter(GameState::Playing), bootstrap::spawn_player)
            .add_systems(PreUpdate, systems::read_input)
            .add_systems(
                FixedUpdate,
                (
                    systems::detect_ground,
                    systems::detect_walls,
                    systems::update_timers,
                    systems::apply_jump,
                    systems::drop_unhook,
                    modifiers::apply_modifiers,
                    systems::apply_horizontal_movement,
                    systems::apply_gravity,
                    systems::follow_hook,
                    systems::update_facing,
                    systems::update_animation_tag,
                    systems::emit_colour_changes,
                    systems::clear_input_edges,
                )
                    .chain()
                    .in_set(MovementSet)
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            )
            .add_systems(
                FixedUpdate,
                systems::detect_finish
                    .after(MovementSet)
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(OnEnter(GameState::Playing), dev::spawn_test_level);
    }
}

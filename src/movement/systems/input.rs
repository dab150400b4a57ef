//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Refresh the input snapshot before the fixed step. Edge flags accumulate
/// across render frames so a press between physics ticks is never dropped.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    input.axis = axis;
    input.jump_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.drop_pressed |=
        keyboard.just_pressed(KeyCode::KeyS) || keyboard.just_pressed(KeyCode::ArrowDown);
}

/// Runs at the end of the fixed-step chain once the edges were consumed.
pub(crate) fn clear_input_edges(mut input: ResMut<MovementInput>) {
    input.jump_pressed = false;
    input.drop_pressed = false;
}

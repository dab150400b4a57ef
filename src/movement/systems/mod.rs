//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod hook;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_finish, detect_ground, detect_walls};
pub(crate) use hook::{drop_unhook, follow_hook};
pub(crate) use input::{clear_input_edges, read_input};
pub(crate) use movement::{
    apply_gravity, apply_horizontal_movement, apply_jump, emit_colour_changes, update_animation_tag,
    update_facing, update_timers,
};

//! Content domain: data-driven tuning loaded from RON at startup.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{ContentLoadError, TUNING_SCHEMA_VERSION, TuningFile, load_tuning};

use bevy::prelude::*;
use std::path::Path;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_tuning);
    }
}

/// Overwrite the built-in tuning defaults with the on-disk file. A missing
/// or invalid file logs and leaves the defaults in place.
fn apply_tuning(mut commands: Commands) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning.movement);
            commands.insert_resource(tuning.zipline);
            commands.insert_resource(tuning.ghost);
        }
        Err(e) => {
            warn!("{}; using built-in tuning defaults", e);
        }
    }
}

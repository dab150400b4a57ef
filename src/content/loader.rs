//! Loader for the RON tuning file at startup.

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ghost::GhostTuning;
use crate::movement::MovementTuning;
use crate::zipline::ZiplineTuning;

/// Bumped whenever a tuning field changes meaning, so stale files fail
/// loudly instead of silently misconfiguring the game.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// The full on-disk tuning document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningFile {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub zipline: ZiplineTuning,
    pub ghost: GhostTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            zipline: ZiplineTuning::default(),
            ghost: GhostTuning::default(),
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_tuning(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_tuning(&contents, &file_name)
}

pub(crate) fn parse_tuning(contents: &str, file_name: &str) -> Result<TuningFile, ContentLoadError> {
    let tuning: TuningFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if tuning.schema_version != TUNING_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file_name.to_string(),
            message: format!(
                "Schema version mismatch: file has {}, game expects {}",
                tuning.schema_version, TUNING_SCHEMA_VERSION
            ),
        });
    }

    validate(&tuning, file_name)?;
    Ok(tuning)
}

/// Reject values that would break frame-rate independence or probe geometry.
fn validate(tuning: &TuningFile, file_name: &str) -> Result<(), ContentLoadError> {
    let mut problems = Vec::new();

    let m = &tuning.movement;
    if m.move_speed <= 0.0 {
        problems.push("movement.move_speed must be positive");
    }
    if m.accel_smoothing <= 0.0 || m.decel_smoothing <= 0.0 {
        problems.push("movement smoothing rates must be positive");
    }
    if m.gravity <= 0.0 || m.max_fall_speed <= 0.0 {
        problems.push("movement gravity and max_fall_speed must be positive");
    }
    if m.body_half_width <= 0.0 || m.body_half_height <= 0.0 {
        problems.push("movement body half extents must be positive");
    }

    let z = &tuning.zipline;
    if z.progress_speed <= 0.0 {
        problems.push("zipline.progress_speed must be positive");
    }
    if !(0.0..0.5).contains(&z.end_band) {
        problems.push("zipline.end_band must be in [0, 0.5)");
    }

    if tuning.ghost.recording_interval <= 0.0 {
        problems.push("ghost.recording_interval must be positive");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ContentLoadError {
            file: file_name.to_string(),
            message: problems.join("; "),
        })
    }
}

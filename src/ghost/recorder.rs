//! Ghost domain: frame/event recording during a live attempt.

use bevy::prelude::*;

use crate::ghost::types::{GhostEvent, GhostEventKind, GhostFrame, GhostRun};
use crate::movement::ColourId;

/// Player state snapshot handed to the recorder each render frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub position: Vec2,
    pub z_rotation: f32,
    pub colour: ColourId,
    pub animation_hash: u32,
    pub facing_right: bool,
}

/// Records one level attempt into a GhostRun. Frames are interval-sampled on
/// the render loop; events are appended immediately at their exact elapsed
/// time and may fall between samples.
#[derive(Resource, Debug, Default)]
pub struct GhostRecorder {
    frames: Vec<GhostFrame>,
    events: Vec<GhostEvent>,
    victory_time: Option<f32>,
    elapsed: f32,
    last_sample: Option<f32>,
    recording: bool,
}

impl GhostRecorder {
    /// Clear buffers and start a fresh recording.
    pub fn begin(&mut self) {
        self.frames.clear();
        self.events.clear();
        self.victory_time = None;
        self.elapsed = 0.0;
        self.last_sample = None;
        self.recording = true;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the recorder clock and sample a frame if the recording
    /// interval has elapsed since the previous sample.
    pub fn tick(&mut self, dt: f32, interval: f32, snapshot: FrameSnapshot) {
        if !self.recording {
            return;
        }
        self.elapsed += dt;

        let due = match self.last_sample {
            None => true,
            Some(last) => self.elapsed - last >= interval,
        };
        if !due {
            return;
        }

        self.last_sample = Some(self.elapsed);
        self.frames.push(GhostFrame {
            time: self.elapsed,
            position: [snapshot.position.x, snapshot.position.y],
            z_rotation: snapshot.z_rotation,
            colour: snapshot.colour,
            animation_hash: snapshot.animation_hash,
            facing_right: snapshot.facing_right,
        });
    }

    pub fn push_event(&mut self, kind: GhostEventKind, data: u16) {
        if !self.recording {
            return;
        }
        self.events.push(GhostEvent {
            kind,
            time: self.elapsed,
            data,
        });
    }

    /// Stamp the moment the finish trigger was crossed. First call wins.
    pub fn mark_victory(&mut self) {
        if self.recording && self.victory_time.is_none() {
            self.victory_time = Some(self.elapsed);
        }
    }

    /// Stop recording and hand over the finished run. The recorder is left
    /// empty; the run is never mutated afterwards.
    pub fn finish(&mut self) -> GhostRun {
        self.recording = false;
        let victory_time = self
            .victory_time
            .take()
            .or_else(|| self.frames.last().map(|f| f.time))
            .unwrap_or(0.0);
        GhostRun {
            frames: std::mem::take(&mut self.frames),
            events: std::mem::take(&mut self.events),
            victory_time,
        }
    }
}

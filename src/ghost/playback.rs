//! Ghost domain: deterministic playback of a recorded run.
//!
//! Playback is pure interpolation over immutable data: no physics, no
//! collision, strictly forward in time. Replaying the same run with the same
//! per-step delta sequence produces identical outputs.

use bevy::prelude::*;
use std::sync::Arc;

use crate::ghost::types::{GhostEvent, GhostFrame, GhostRun};
use crate::movement::ColourId;

/// Interpolate degrees along the shortest arc, avoiding the 359 -> 0
/// wraparound artifact of naive linear interpolation.
pub(crate) fn lerp_angle_degrees(a: f32, b: f32, t: f32) -> f32 {
    let mut delta = (b - a).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    a + delta * t
}

/// Output of one playback step.
#[derive(Debug, Clone)]
pub struct PlaybackStep {
    pub position: Vec2,
    pub rotation_degrees: f32,
    pub colour: ColourId,
    pub animation_hash: u32,
    pub facing_right: bool,
    /// Events whose time was crossed this step, in recorded order.
    pub events: Vec<GhostEvent>,
    /// True only on the step where the sampled colour flips.
    pub colour_changed: bool,
    /// True only on the step where the shrink sequence starts.
    pub shrink_triggered: bool,
    /// True once playback holds on the final frame.
    pub finished: bool,
}

#[derive(Debug)]
pub struct GhostPlayback {
    run: Arc<GhostRun>,
    playback_time: f32,
    frame_index: usize,
    event_index: usize,
    shrink_started: bool,
    last_colour: ColourId,
}

impl GhostPlayback {
    /// Returns None for an empty-frame run ("no ghost").
    pub fn new(run: Arc<GhostRun>) -> Option<Self> {
        let first = run.frames.first()?;
        Some(Self {
            last_colour: first.colour,
            run,
            playback_time: 0.0,
            frame_index: 0,
            event_index: 0,
            shrink_started: false,
        })
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn playback_time(&self) -> f32 {
        self.playback_time
    }

    /// Normalized shrink progress once the victory point was passed, over
    /// the remaining duration (last frame time - victory time).
    pub fn shrink_progress(&self) -> Option<f32> {
        if !self.shrink_started {
            return None;
        }
        let last = self.last_time();
        let span = last - self.run.victory_time;
        if span <= f32::EPSILON {
            return Some(1.0);
        }
        Some(((self.playback_time - self.run.victory_time) / span).clamp(0.0, 1.0))
    }

    fn last_time(&self) -> f32 {
        self.run.frames.last().map(|f| f.time).unwrap_or(0.0)
    }

    pub fn step(&mut self, dt: f32) -> PlaybackStep {
        let frames = &self.run.frames;
        let last_time = self.last_time();

        // 1. advance the clock, clamped to the final frame; never runs past
        self.playback_time = (self.playback_time + dt).min(last_time);

        // 2. frame cursor moves forward only
        while self.frame_index + 1 < frames.len()
            && frames[self.frame_index + 1].time <= self.playback_time
        {
            self.frame_index += 1;
        }

        // 3. dispatch crossed events exactly once, in recorded order
        let mut events = Vec::new();
        while self.event_index < self.run.events.len()
            && self.run.events[self.event_index].time <= self.playback_time
        {
            events.push(self.run.events[self.event_index]);
            self.event_index += 1;
        }

        let finished = self.frame_index + 1 >= frames.len();
        let (position, rotation_degrees, sampled) = if finished {
            // 4. hold the last frame, no extrapolation
            let f = &frames[self.frame_index];
            (f.position_vec(), f.z_rotation, f)
        } else {
            self.interpolate(&frames[self.frame_index], &frames[self.frame_index + 1])
        };

        let colour = sampled.colour;
        let colour_changed = colour != self.last_colour;
        self.last_colour = colour;

        // 7. one-shot shrink trigger
        let mut shrink_triggered = false;
        if !self.shrink_started && self.playback_time >= self.run.victory_time {
            self.shrink_started = true;
            shrink_triggered = true;
        }

        PlaybackStep {
            position,
            rotation_degrees,
            colour,
            animation_hash: sampled.animation_hash,
            facing_right: sampled.facing_right,
            events,
            colour_changed,
            shrink_triggered,
            finished,
        }
    }

    fn interpolate<'a>(
        &self,
        a: &'a GhostFrame,
        b: &'a GhostFrame,
    ) -> (Vec2, f32, &'a GhostFrame) {
        let span = b.time - a.time;
        // duplicate sample times clamp to the earlier frame
        let frac = if span <= f32::EPSILON {
            0.0
        } else {
            ((self.playback_time - a.time) / span).clamp(0.0, 1.0)
        };

        let position = a.position_vec().lerp(b.position_vec(), frac);
        let rotation = lerp_angle_degrees(a.z_rotation, b.z_rotation, frac);
        // discrete fields snap to the nearer endpoint
        let sampled = if frac < 0.5 { a } else { b };
        (position, rotation, sampled)
    }
}

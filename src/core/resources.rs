//! Core domain: level session context and shared resources.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// The current level attempt. Everything that used to hang off global
/// singletons (save access, run clock, victory flag) is passed around
/// through this resource instead.
#[derive(Resource, Debug)]
pub struct LevelSession {
    pub level_id: String,
    /// Unique id for this attempt, for correlating log lines across one run.
    pub attempt_seed: u64,
    /// Seconds since the attempt started. Drives the recorder clock.
    pub elapsed: f32,
    pub victory: bool,
}

impl Default for LevelSession {
    fn default() -> Self {
        Self {
            level_id: "level_01".to_string(),
            attempt_seed: rand::rng().random(),
            elapsed: 0.0,
            victory: false,
        }
    }
}

impl LevelSession {
    /// Reset for a fresh attempt at the given level.
    pub fn restart(&mut self, level_id: impl Into<String>) {
        self.level_id = level_id.into();
        self.attempt_seed = rand::rng().random();
        self.elapsed = 0.0;
        self.victory = false;
    }

    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed * 1000.0) as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    Waiting,
    Ready,
    /// The timeout expired before the service came up. Callers skip the
    /// wiring that depends on it (achievements) and carry on.
    Degraded,
}

/// One-time readiness gate for external services (achievement/leaderboard
/// backends). Polled once per frame during Loading; never a recurring
/// suspension point.
#[derive(Resource, Debug)]
pub struct ServicesGate {
    pub elapsed: f32,
    pub timeout: f32,
    pub ready: bool,
    resolved: Option<GateStatus>,
}

impl Default for ServicesGate {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            timeout: 5.0,
            ready: false,
            resolved: None,
        }
    }
}

impl ServicesGate {
    pub fn with_timeout(timeout: f32) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Advance the gate by one frame. Resolves at most once: after the first
    /// Ready/Degraded result the same answer is returned forever.
    pub fn poll(&mut self, dt: f32) -> GateStatus {
        if let Some(status) = self.resolved {
            return status;
        }
        self.elapsed += dt;
        if self.ready {
            self.resolved = Some(GateStatus::Ready);
            GateStatus::Ready
        } else if self.elapsed >= self.timeout {
            self.resolved = Some(GateStatus::Degraded);
            GateStatus::Degraded
        } else {
            GateStatus::Waiting
        }
    }

    /// Called by the platform layer when the external service comes up.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }
}

//! Zipline domain: cubic bezier curve math.

use bevy::prelude::*;

/// A cubic bezier in world space. Curve progress is the normalized [0, 1]
/// parameter, not arc length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn point(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }

    /// First derivative with respect to t. Not normalized.
    pub fn tangent(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * u * u)
            + (self.p2 - self.p1) * (6.0 * u * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Progress of the curve point nearest to `p`: coarse sampling followed
    /// by a local golden-section refinement around the best sample.
    pub fn closest_t(&self, p: Vec2) -> f32 {
        const COARSE: usize = 32;

        let mut best_t = 0.0;
        let mut best_d = f32::MAX;
        for i in 0..=COARSE {
            let t = i as f32 / COARSE as f32;
            let d = self.point(t).distance_squared(p);
            if d < best_d {
                best_d = d;
                best_t = t;
            }
        }

        let step = 1.0 / COARSE as f32;
        let mut lo = (best_t - step).max(0.0);
        let mut hi = (best_t + step).min(1.0);
        for _ in 0..24 {
            let m1 = lo + (hi - lo) / 3.0;
            let m2 = hi - (hi - lo) / 3.0;
            if self.point(m1).distance_squared(p) < self.point(m2).distance_squared(p) {
                hi = m2;
            } else {
                lo = m1;
            }
        }
        (lo + hi) * 0.5
    }
}

/// Traversal direction fixed at hook time: toward the closer end when the
/// attach point lands inside an end band, otherwise by the incoming velocity
/// projected on the curve tangent.
pub(crate) fn choose_direction(t: f32, velocity: Vec2, tangent: Vec2, end_band: f32) -> f32 {
    if t <= end_band {
        -1.0
    } else if t >= 1.0 - end_band {
        1.0
    } else if velocity.dot(tangent) >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::{distance_to_polyline, Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

const DRAW_SAMPLES: usize = 500;

/// Archimedean spiral `r = a + b·θ` for `θ ∈ [0, 2π·turns]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiralShape {
    pub center: Point,
    pub a: f64,
    pub b: f64,
    pub turns: f64,
}

impl SpiralShape {
    pub fn new(center: Point, a: f64, b: f64, turns: f64) -> Self {
        Self {
            center,
            a,
            b,
            turns,
        }
    }

    pub fn max_theta(&self) -> f64 {
        TAU * self.turns.max(0.0)
    }

    /// Largest `|r|` on the curve. `r` is linear in `θ`, so it sits at one
    /// of the two ends.
    pub fn max_radius(&self) -> f64 {
        self.a.abs().max((self.a + self.b * self.max_theta()).abs())
    }

    /// `count` evenly spaced points from the center outwards.
    pub fn sample(&self, count: usize) -> Vec<Point> {
        let count = count.max(2);
        let step = self.max_theta() / (count - 1) as f64;
        (0..count)
            .map(|i| {
                let theta = step * i as f64;
                let r = self.a + self.b * theta;
                Point::new(
                    self.center.x + r * theta.cos(),
                    self.center.y + r * theta.sin(),
                )
            })
            .collect()
    }
}

impl Geometry for SpiralShape {
    fn bounding_rect(&self) -> Rect {
        let r = self.max_radius();
        Rect::new(self.center.x - r, self.center.y - r, r * 2.0, r * 2.0)
    }

    fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool {
        if p.distance_to(&self.center) > self.max_radius() + tolerance.curve {
            return false;
        }
        distance_to_polyline(p, &self.sample(tolerance.samples)) <= tolerance.curve
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.path(&self.sample(DRAW_SAMPLES), false);
    }
}

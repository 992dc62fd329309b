use serde::{Deserialize, Serialize};

use super::{distance_to_polyline, Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

/// `y = start.y + amplitude·sin(frequency·x)` for `x ∈ [0, length]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SineCurveShape {
    pub start: Point,
    pub amplitude: f64,
    pub frequency: f64,
    pub length: f64,
}

impl SineCurveShape {
    pub fn new(start: Point, amplitude: f64, frequency: f64, length: f64) -> Self {
        Self {
            start,
            amplitude,
            frequency,
            length,
        }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.start.y + self.amplitude * (self.frequency * x).sin()
    }

    pub fn sample(&self, count: usize) -> Vec<Point> {
        let count = count.max(2);
        let step = self.length / (count - 1) as f64;
        (0..count)
            .map(|i| {
                let x = step * i as f64;
                Point::new(self.start.x + x, self.y_at(x))
            })
            .collect()
    }
}

impl Geometry for SineCurveShape {
    fn bounding_rect(&self) -> Rect {
        let amp = self.amplitude.abs();
        Rect::new(self.start.x, self.start.y - amp, self.length, 2.0 * amp)
    }

    fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool {
        if !self.bounding_rect().inflate(tolerance.curve).contains(p) {
            return false;
        }
        distance_to_polyline(p, &self.sample(tolerance.samples)) <= tolerance.curve
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let samples = (self.length.abs() / 2.0).ceil() as usize;
        renderer.path(&self.sample(samples.max(2)), false);
    }
}

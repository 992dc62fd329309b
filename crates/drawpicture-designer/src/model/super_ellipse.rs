use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::{Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

const DRAW_SAMPLES: usize = 120;

/// Lamé curve `|x/rx|^n + |y/ry|^n = 1`, filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperEllipseShape {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub exponent: f64,
}

impl SuperEllipseShape {
    pub fn new(center: Point, rx: f64, ry: f64, exponent: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            exponent,
        }
    }

    pub fn outline(&self, count: usize) -> Vec<Point> {
        let power = 2.0 / self.exponent.max(f64::EPSILON);
        (0..count)
            .map(|i| {
                let t = TAU * i as f64 / count as f64;
                let (sin, cos) = t.sin_cos();
                Point::new(
                    self.center.x + self.rx * cos.signum() * cos.abs().powf(power),
                    self.center.y + self.ry * sin.signum() * sin.abs().powf(power),
                )
            })
            .collect()
    }
}

impl Geometry for SuperEllipseShape {
    fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.rx.abs(),
            self.center.y - self.ry.abs(),
            self.rx.abs() * 2.0,
            self.ry.abs() * 2.0,
        )
    }

    fn contains_local(&self, p: Point, _tolerance: &HitTolerance) -> bool {
        if self.rx == 0.0 || self.ry == 0.0 || self.exponent <= 0.0 {
            return false;
        }
        let u = ((p.x - self.center.x) / self.rx).abs().powf(self.exponent);
        let v = ((p.y - self.center.y) / self.ry).abs().powf(self.exponent);
        u + v <= 1.0
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.path(&self.outline(DRAW_SAMPLES), true);
    }
}

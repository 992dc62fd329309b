use serde::{Deserialize, Serialize};

use super::{Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

/// Regular star polygon with alternating outer and inner vertices, the first
/// outer vertex pointing up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarShape {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub points: u32,
}

impl StarShape {
    pub fn new(center: Point, outer_radius: f64, inner_radius: f64, points: u32) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
            points,
        }
    }

    pub fn vertices(&self) -> Vec<Point> {
        if self.points < 2 {
            return Vec::new();
        }
        let count = self.points * 2;
        let step = 180.0 / self.points as f64;
        (0..count)
            .map(|k| {
                let r = if k % 2 == 0 {
                    self.outer_radius
                } else {
                    self.inner_radius
                };
                let angle = (-90.0 + step * k as f64).to_radians();
                Point::new(
                    self.center.x + r * angle.cos(),
                    self.center.y + r * angle.sin(),
                )
            })
            .collect()
    }
}

impl Geometry for StarShape {
    fn bounding_rect(&self) -> Rect {
        Rect::bounding(self.vertices()).unwrap_or(Rect::new(self.center.x, self.center.y, 0.0, 0.0))
    }

    // Even-odd ray casting.
    fn contains_local(&self, p: Point, _tolerance: &HitTolerance) -> bool {
        let vertices = self.vertices();
        let mut inside = false;
        let mut j = vertices.len().wrapping_sub(1);
        for i in 0..vertices.len() {
            let (a, b) = (vertices[i], vertices[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let vertices = self.vertices();
        if !vertices.is_empty() {
            renderer.path(&vertices, true);
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: Point,
    pub radius: f64,
}

impl CircleShape {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }
}

impl Geometry for CircleShape {
    fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    fn contains_local(&self, p: Point, _tolerance: &HitTolerance) -> bool {
        p.distance_to(&self.center) <= self.radius
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.ellipse(self.center, self.radius, self.radius);
    }
}

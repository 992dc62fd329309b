use serde::{Deserialize, Serialize};

use super::{distance_to_segment, Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub start: Point,
    pub end: Point,
}

impl LineShape {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl Geometry for LineShape {
    fn bounding_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool {
        distance_to_segment(p, self.start, self.end) <= tolerance.stroke
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.line(self.start, self.end);
    }
}

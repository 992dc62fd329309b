use serde::{Deserialize, Serialize};

use super::{distance_to_polyline, Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

/// Open polyline recorded from pointer motion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FreehandShape {
    pub points: Vec<Point>,
}

impl FreehandShape {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Geometry for FreehandShape {
    fn bounding_rect(&self) -> Rect {
        Rect::bounding(self.points.iter().copied()).unwrap_or_default()
    }

    fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool {
        if self.points.len() < 2 {
            return false;
        }
        distance_to_polyline(p, &self.points) <= tolerance.stroke
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.points.len() >= 2 {
            renderer.path(&self.points, false);
        }
    }
}

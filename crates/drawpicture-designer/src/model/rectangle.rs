use serde::{Deserialize, Serialize};

use super::{Geometry, HitTolerance, Point, Rect};
use crate::renderer::Renderer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleShape {
    pub rect: Rect,
}

impl Default for RectangleShape {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 100.0, 80.0))
    }
}

impl RectangleShape {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(Rect::from_points(a, b))
    }
}

impl Geometry for RectangleShape {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn contains_local(&self, p: Point, _tolerance: &HitTolerance) -> bool {
        self.rect.contains(p)
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.rect(self.rect);
    }
}

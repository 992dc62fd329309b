use serde::{Deserialize, Serialize};

use super::{Geometry, HitTolerance, Point, Rect, Shape};
use crate::renderer::{paint_shape, Renderer};

/// Composite shape; each child keeps its own transform relative to the group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeGroup {
    pub children: Vec<Shape>,
}

impl ShapeGroup {
    pub fn new(children: Vec<Shape>) -> Self {
        Self { children }
    }
}

impl Geometry for ShapeGroup {
    fn bounding_rect(&self) -> Rect {
        self.children
            .iter()
            .map(Shape::world_bounds)
            .reduce(|acc, r| acc.union(&r))
            .unwrap_or_default()
    }

    fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool {
        self.children
            .iter()
            .any(|child| child.contains(p, tolerance))
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        for child in &self.children {
            paint_shape(child, renderer);
        }
    }
}

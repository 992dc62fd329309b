//! Renderer interface.
//!
//! The editor core never rasterises anything itself. A canvas backend
//! implements [`Renderer`]; [`paint_shape`] applies a shape's transform and
//! style before asking the shape to emit its primitives, and
//! [`paint_document`] walks the document in z-order.
//!
//! [`DisplayList`] is a backend that simply records the calls, which is handy
//! for tests and for deferred drawing.

use crate::document::Document;
use crate::model::{Color, DashPattern, Point, Rect, Shape, StrokeStyle};
use crate::transform::Transform;

/// Margin between a selected shape and its selection outline, local units.
pub const SELECTION_OUTLINE_MARGIN: f64 = 3.0;

pub trait Renderer {
    fn save(&mut self);
    fn restore(&mut self);
    /// Post-multiplies the current transformation.
    fn transform(&mut self, transform: &Transform);
    fn set_stroke(&mut self, stroke: &StrokeStyle);
    fn set_fill(&mut self, fill: Option<Color>);
    fn set_opacity(&mut self, opacity: f64);

    fn line(&mut self, from: Point, to: Point);
    fn rect(&mut self, rect: Rect);
    fn ellipse(&mut self, center: Point, rx: f64, ry: f64);
    fn path(&mut self, points: &[Point], closed: bool);
    fn point(&mut self, at: Point);
}

/// Draws one shape (and its selection outline) in its own local space.
pub fn paint_shape(shape: &Shape, renderer: &mut dyn Renderer) {
    renderer.save();
    renderer.transform(&shape.transform);
    renderer.set_stroke(&shape.stroke);
    renderer.set_fill(shape.fill);
    shape.draw(renderer);

    if shape.selected {
        renderer.set_stroke(&StrokeStyle {
            color: Color::SELECTION,
            width: 1.0,
            dash: DashPattern::Dash,
        });
        renderer.set_fill(None);
        renderer.rect(shape.bounding_rect().inflate(SELECTION_OUTLINE_MARGIN));
    }
    renderer.restore();
}

/// Draws every shape on a visible layer, bottom to top, with its layer's
/// opacity.
pub fn paint_document(document: &Document, renderer: &mut dyn Renderer) {
    for shape in document.shapes() {
        let Some(layer) = document.layer(&shape.layer) else {
            continue;
        };
        if !layer.visible {
            continue;
        }
        renderer.save();
        renderer.set_opacity(layer.opacity);
        paint_shape(shape, renderer);
        renderer.restore();
    }
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Transform(Transform),
    Stroke(StrokeStyle),
    Fill(Option<Color>),
    Opacity(f64),
    Line(Point, Point),
    Rect(Rect),
    Ellipse { center: Point, rx: f64, ry: f64 },
    Path { points: Vec<Point>, closed: bool },
    Point(Point),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of primitive draw calls (state changes excluded).
    pub fn primitive_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::Line(..)
                        | DrawCommand::Rect(_)
                        | DrawCommand::Ellipse { .. }
                        | DrawCommand::Path { .. }
                        | DrawCommand::Point(_)
                )
            })
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for DisplayList {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn transform(&mut self, transform: &Transform) {
        self.commands.push(DrawCommand::Transform(*transform));
    }

    fn set_stroke(&mut self, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke(stroke.clone()));
    }

    fn set_fill(&mut self, fill: Option<Color>) {
        self.commands.push(DrawCommand::Fill(fill));
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.commands.push(DrawCommand::Opacity(opacity));
    }

    fn line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line(from, to));
    }

    fn rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn ellipse(&mut self, center: Point, rx: f64, ry: f64) {
        self.commands.push(DrawCommand::Ellipse { center, rx, ry });
    }

    fn path(&mut self, points: &[Point], closed: bool) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed,
        });
    }

    fn point(&mut self, at: Point) {
        self.commands.push(DrawCommand::Point(at));
    }
}

//! Interactive tools.
//!
//! A tool turns canonical pointer events into document edits. Exactly one tool
//! is active at a time; the editor forwards every pointer event to it and
//! asks it for the cursor and any overlay to draw on top of the document.

mod drawing;
mod parametric;
mod selection;

pub use drawing::{
    CircleBuilder, CircleTool, Draft, DrawTool, FreehandBuilder, FreehandTool, LineBuilder,
    LineTool, RectangleBuilder, RectangleTool, ShapeBuilder,
};
pub use parametric::{SineCurveBuilder, SineCurveTool, SpiralBuilder, SpiralTool};
pub use selection::SelectionTool;

use drawpicture_settings::Config;

use crate::document::Document;
use crate::handles::CursorIcon;
use crate::input::{InputEvent, PointerEvent};
use crate::model::{Color, Shape, StrokeStyle};
use crate::renderer::{paint_shape, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Rectangle,
    Circle,
    Freehand,
    Eraser,
    Spiral,
    SineCurve,
}

impl ToolKind {
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Select,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Freehand,
        ToolKind::Eraser,
        ToolKind::Spiral,
        ToolKind::SineCurve,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Freehand => "Freehand",
            ToolKind::Eraser => "Eraser",
            ToolKind::Spiral => "Spiral",
            ToolKind::SineCurve => "Sine Curve",
        }
    }
}

/// Current pen and fill, copied into every shape a tool creates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolStyle {
    pub stroke: StrokeStyle,
    pub fill: Option<Color>,
}

impl ToolStyle {
    pub fn apply(&self, shape: Shape) -> Shape {
        shape.with_stroke(self.stroke.clone()).with_fill(self.fill)
    }
}

pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Each pointer handler returns true when the event was consumed.
    fn pointer_down(&mut self, doc: &mut Document, event: &PointerEvent) -> bool;
    fn pointer_move(&mut self, doc: &mut Document, event: &PointerEvent) -> bool;
    fn pointer_up(&mut self, doc: &mut Document, event: &PointerEvent) -> bool;

    /// Abandons an unfinished gesture.
    fn cancel(&mut self, doc: &mut Document);

    fn cursor(&self, doc: &Document) -> CursorIcon;

    /// Shape being drawn but not yet committed.
    fn preview(&self) -> Option<&Shape> {
        None
    }

    fn set_style(&mut self, _style: &ToolStyle) {}

    fn handle_event(&mut self, doc: &mut Document, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(e) => self.pointer_down(doc, e),
            InputEvent::PointerMove(e) => self.pointer_move(doc, e),
            InputEvent::PointerUp(e) => self.pointer_up(doc, e),
            InputEvent::Key(_) => false,
        }
    }

    /// Draws tool feedback over the document.
    fn paint_overlay(&self, _doc: &Document, renderer: &mut dyn Renderer) {
        if let Some(shape) = self.preview() {
            paint_shape(shape, renderer);
        }
    }
}

pub fn create_tool(kind: ToolKind, config: &Config) -> Box<dyn Tool> {
    let tools = config.tools.clone();
    match kind {
        ToolKind::Select => Box::new(SelectionTool::new(config.handles.clone())),
        ToolKind::Line => Box::new(LineTool::new(tools)),
        ToolKind::Rectangle => Box::new(RectangleTool::new(tools)),
        ToolKind::Circle => Box::new(CircleTool::new(tools)),
        ToolKind::Freehand => Box::new(FreehandTool::new(tools)),
        ToolKind::Eraser => Box::new(FreehandTool::eraser(tools)),
        ToolKind::Spiral => Box::new(SpiralTool::new(tools)),
        ToolKind::SineCurve => Box::new(SineCurveTool::new(tools)),
    }
}

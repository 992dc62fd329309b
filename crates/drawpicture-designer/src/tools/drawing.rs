use drawpicture_settings::ToolSettings;

use super::{Tool, ToolKind, ToolStyle};
use crate::document::Document;
use crate::handles::CursorIcon;
use crate::input::PointerEvent;
use crate::model::{
    CircleShape, Color, FreehandShape, LineShape, Point, RectangleShape, Shape, ShapeKind,
    StrokeStyle,
};

/// Press position and the live preview of a drag-to-draw gesture.
#[derive(Debug)]
pub struct Draft {
    pub start: Point,
    pub shape: Shape,
}

/// Per-shape behaviour of a drag-to-draw tool.
pub trait ShapeBuilder {
    fn kind(&self) -> ToolKind;

    /// Geometry for a press at `p`, before any drag.
    fn begin(&self, p: Point) -> ShapeKind;

    /// Updates the draft for the pointer at `p`.
    fn drag(&self, draft: &mut Draft, p: Point);

    /// Final update when the button goes up.
    fn release(&self, draft: &mut Draft, p: Point) {
        self.drag(draft, p);
    }

    /// Whether a finished draft becomes a document shape.
    fn accept(&self, _draft: &Draft, _settings: &ToolSettings) -> bool {
        true
    }

    fn styled(&self, shape: Shape, style: &ToolStyle, _settings: &ToolSettings) -> Shape {
        style.apply(shape)
    }
}

/// Press, drag and release to create one shape.
#[derive(Debug)]
pub struct DrawTool<B> {
    builder: B,
    settings: ToolSettings,
    style: ToolStyle,
    draft: Option<Draft>,
}

impl<B: ShapeBuilder + Default> DrawTool<B> {
    pub fn new(settings: ToolSettings) -> Self {
        Self::with_builder(B::default(), settings)
    }
}

impl<B: ShapeBuilder> DrawTool<B> {
    pub fn with_builder(builder: B, settings: ToolSettings) -> Self {
        Self {
            builder,
            settings,
            style: ToolStyle::default(),
            draft: None,
        }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }
}

impl<B: ShapeBuilder> Tool for DrawTool<B> {
    fn kind(&self) -> ToolKind {
        self.builder.kind()
    }

    fn pointer_down(&mut self, _doc: &mut Document, event: &PointerEvent) -> bool {
        if !event.is_left() {
            return false;
        }
        let p = event.position;
        let shape = Shape::new(self.builder.begin(p));
        self.draft = Some(Draft {
            start: p,
            shape: self.builder.styled(shape, &self.style, &self.settings),
        });
        true
    }

    fn pointer_move(&mut self, _doc: &mut Document, event: &PointerEvent) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        self.builder.drag(draft, event.position);
        true
    }

    fn pointer_up(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        let Some(mut draft) = self.draft.take() else {
            return false;
        };
        self.builder.release(&mut draft, event.position);
        if self.builder.accept(&draft, &self.settings) {
            let kind = draft.shape.shape_type();
            let id = doc.add_shape(draft.shape);
            tracing::debug!("Committed {:?} {}", kind, id);
        }
        true
    }

    fn cancel(&mut self, _doc: &mut Document) {
        self.draft = None;
    }

    fn cursor(&self, _doc: &Document) -> CursorIcon {
        CursorIcon::Crosshair
    }

    fn preview(&self) -> Option<&Shape> {
        self.draft.as_ref().map(|d| &d.shape)
    }

    fn set_style(&mut self, style: &ToolStyle) {
        self.style = style.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineBuilder;

impl ShapeBuilder for LineBuilder {
    fn kind(&self) -> ToolKind {
        ToolKind::Line
    }

    fn begin(&self, p: Point) -> ShapeKind {
        ShapeKind::Line(LineShape::new(p, p))
    }

    fn drag(&self, draft: &mut Draft, p: Point) {
        if let ShapeKind::Line(line) = &mut draft.shape.kind {
            line.end = p;
        }
    }

    fn accept(&self, draft: &Draft, settings: &ToolSettings) -> bool {
        match &draft.shape.kind {
            ShapeKind::Line(line) => line.start.distance_to(&line.end) > settings.min_line_length,
            _ => false,
        }
    }
}

/// Drags out an axis-aligned rectangle from any corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleBuilder;

impl ShapeBuilder for RectangleBuilder {
    fn kind(&self) -> ToolKind {
        ToolKind::Rectangle
    }

    fn begin(&self, p: Point) -> ShapeKind {
        ShapeKind::Rectangle(RectangleShape::from_corners(p, p))
    }

    fn drag(&self, draft: &mut Draft, p: Point) {
        if let ShapeKind::Rectangle(rect) = &mut draft.shape.kind {
            *rect = RectangleShape::from_corners(draft.start, p);
        }
    }

    fn accept(&self, draft: &Draft, settings: &ToolSettings) -> bool {
        let rect = draft.shape.bounding_rect();
        let min = settings.min_rect_side;
        rect.width > min && rect.height > min
    }
}

/// Press sets the centre; the drag distance is the radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleBuilder;

impl ShapeBuilder for CircleBuilder {
    fn kind(&self) -> ToolKind {
        ToolKind::Circle
    }

    fn begin(&self, p: Point) -> ShapeKind {
        ShapeKind::Circle(CircleShape::new(p, 0.0))
    }

    fn drag(&self, draft: &mut Draft, p: Point) {
        if let ShapeKind::Circle(circle) = &mut draft.shape.kind {
            circle.radius = draft.start.distance_to(&p);
        }
    }

    fn accept(&self, draft: &Draft, settings: &ToolSettings) -> bool {
        match &draft.shape.kind {
            ShapeKind::Circle(circle) => circle.radius > settings.min_circle_radius,
            _ => false,
        }
    }
}

/// Records every pointer position while the button is held. In eraser mode
/// the stroke is a wide white line flagged as an eraser.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreehandBuilder {
    pub eraser: bool,
}

impl ShapeBuilder for FreehandBuilder {
    fn kind(&self) -> ToolKind {
        if self.eraser {
            ToolKind::Eraser
        } else {
            ToolKind::Freehand
        }
    }

    fn begin(&self, p: Point) -> ShapeKind {
        ShapeKind::Freehand(FreehandShape::new(p))
    }

    fn drag(&self, draft: &mut Draft, p: Point) {
        if let ShapeKind::Freehand(path) = &mut draft.shape.kind {
            path.push(p);
        }
    }

    // The release position repeats the last move.
    fn release(&self, _draft: &mut Draft, _p: Point) {}

    fn accept(&self, draft: &Draft, settings: &ToolSettings) -> bool {
        match &draft.shape.kind {
            ShapeKind::Freehand(path) => path.len() >= settings.min_freehand_points,
            _ => false,
        }
    }

    fn styled(&self, shape: Shape, style: &ToolStyle, settings: &ToolSettings) -> Shape {
        if self.eraser {
            shape
                .with_stroke(StrokeStyle::new(Color::WHITE, settings.eraser_width))
                .as_eraser()
        } else {
            style.apply(shape)
        }
    }
}

pub type LineTool = DrawTool<LineBuilder>;
pub type RectangleTool = DrawTool<RectangleBuilder>;
pub type CircleTool = DrawTool<CircleBuilder>;
pub type FreehandTool = DrawTool<FreehandBuilder>;

impl DrawTool<FreehandBuilder> {
    pub fn eraser(settings: ToolSettings) -> Self {
        Self::with_builder(FreehandBuilder { eraser: true }, settings)
    }

    pub fn is_eraser(&self) -> bool {
        self.builder.eraser
    }
}

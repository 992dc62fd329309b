use super::drawing::{Draft, DrawTool, ShapeBuilder};
use super::ToolKind;
use crate::model::{Point, ShapeKind, SineCurveShape, SpiralShape};

/// Drag distance below which the default parameters are kept.
const DRAG_DEADBAND: f64 = 5.0;

const SPIRAL_A: f64 = 0.25;
const SPIRAL_B: f64 = 0.25;
const SPIRAL_TURNS: f64 = 3.0;

const SINE_AMPLITUDE: f64 = 50.0;
const SINE_FREQUENCY: f64 = 0.05;
const SINE_LENGTH: f64 = 400.0;

/// Spiral centred on the press point. Dragging further out loosens the
/// spiral and adds turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralBuilder;

impl SpiralBuilder {
    /// Spiral parameters for a drag of length `distance` from the centre.
    pub fn shape_for(center: Point, distance: f64) -> SpiralShape {
        let mut spiral = SpiralShape::new(center, SPIRAL_A, SPIRAL_B, SPIRAL_TURNS);
        if distance > DRAG_DEADBAND {
            spiral.b = (distance / 100.0).clamp(0.1, 1.0);
            spiral.turns = (distance / 20.0).floor().clamp(1.0, 10.0);
        }
        spiral
    }
}

impl ShapeBuilder for SpiralBuilder {
    fn kind(&self) -> ToolKind {
        ToolKind::Spiral
    }

    fn begin(&self, p: Point) -> ShapeKind {
        ShapeKind::Spiral(Self::shape_for(p, 0.0))
    }

    fn drag(&self, draft: &mut Draft, p: Point) {
        if let ShapeKind::Spiral(spiral) = &mut draft.shape.kind {
            *spiral = Self::shape_for(draft.start, draft.start.distance_to(&p));
        }
    }
}

/// Sine wave starting at the press point. Horizontal drag sets the length and
/// frequency, vertical drag the amplitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineCurveBuilder;

impl SineCurveBuilder {
    pub fn shape_for(start: Point, dx: f64, dy: f64) -> SineCurveShape {
        let mut curve = SineCurveShape::new(start, SINE_AMPLITUDE, SINE_FREQUENCY, SINE_LENGTH);
        let (dx, dy) = (dx.abs(), dy.abs());
        if dx > DRAG_DEADBAND {
            curve.length = dx.max(100.0);
            curve.frequency = 0.01 + (dx % 5.0) * 0.01;
        }
        if dy > DRAG_DEADBAND {
            curve.amplitude = dy.max(10.0);
        }
        curve
    }
}

impl ShapeBuilder for SineCurveBuilder {
    fn kind(&self) -> ToolKind {
        ToolKind::SineCurve
    }

    fn begin(&self, p: Point) -> ShapeKind {
        ShapeKind::SineCurve(Self::shape_for(p, 0.0, 0.0))
    }

    fn drag(&self, draft: &mut Draft, p: Point) {
        let (dx, dy) = (p.x - draft.start.x, p.y - draft.start.y);
        if let ShapeKind::SineCurve(curve) = &mut draft.shape.kind {
            *curve = Self::shape_for(draft.start, dx, dy);
        }
    }
}

pub type SpiralTool = DrawTool<SpiralBuilder>;
pub type SineCurveTool = DrawTool<SineCurveBuilder>;

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use drawpicture_settings::HitTestSettings;

use crate::renderer::Renderer;
use crate::transform::Transform;

mod circle;
mod freehand;
mod group;
mod line;
mod rectangle;
mod sine;
mod spiral;
mod star;
mod super_ellipse;

pub use circle::CircleShape;
pub use freehand::FreehandShape;
pub use group::ShapeGroup;
pub use line::LineShape;
pub use rectangle::RectangleShape;
pub use sine::SineCurveShape;
pub use spiral::SpiralShape;
pub use star::StarShape;
pub use super_ellipse::SuperEllipseShape;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle with a top-left origin on a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalised rectangle spanning two arbitrary corners.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    /// Smallest rectangle containing every point, or `None` for no points.
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::from_points(min, max))
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    /// Inclusive of the edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    pub fn inflate(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const SELECTION: Color = Color::rgb(0, 120, 215);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum DashPattern {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    /// Alternating dash and gap lengths, in stroke widths.
    Custom(Vec<f64>),
}

/// Outline style. Every shape owns its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: DashPattern,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 2.0,
            dash: DashPattern::Solid,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: DashPattern::Solid,
        }
    }
}

/// Stable identity of a shape inside one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Distance tolerances for local containment tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTolerance {
    /// Floor of the stroked-segment tolerance.
    pub stroke_min: f64,
    /// Effective stroked-segment tolerance, `max(stroke_min, width / 2)`.
    pub stroke: f64,
    pub curve: f64,
    pub samples: usize,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self::from_settings(&HitTestSettings::default())
    }
}

impl HitTolerance {
    pub fn from_settings(settings: &HitTestSettings) -> Self {
        Self {
            stroke_min: settings.stroke_tolerance,
            stroke: settings.stroke_tolerance,
            curve: settings.curve_tolerance,
            samples: settings.curve_samples.max(2),
        }
    }

    pub fn with_stroke_width(&self, width: f64) -> Self {
        Self {
            stroke: self.stroke_min.max(width / 2.0),
            ..*self
        }
    }
}

/// Per-variant geometry contract. Everything is in the shape's local space.
pub trait Geometry {
    fn bounding_rect(&self) -> Rect;
    fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool;
    fn draw(&self, renderer: &mut dyn Renderer);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Line,
    Rectangle,
    Circle,
    Spiral,
    SineCurve,
    Freehand,
    Group,
    SuperEllipse,
    Star,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    Line(LineShape),
    Rectangle(RectangleShape),
    Circle(CircleShape),
    Spiral(SpiralShape),
    SineCurve(SineCurveShape),
    Freehand(FreehandShape),
    Group(ShapeGroup),
    SuperEllipse(SuperEllipseShape),
    Star(StarShape),
}

impl Geometry for ShapeKind {
    fn bounding_rect(&self) -> Rect {
        match self {
            ShapeKind::Line(s) => s.bounding_rect(),
            ShapeKind::Rectangle(s) => s.bounding_rect(),
            ShapeKind::Circle(s) => s.bounding_rect(),
            ShapeKind::Spiral(s) => s.bounding_rect(),
            ShapeKind::SineCurve(s) => s.bounding_rect(),
            ShapeKind::Freehand(s) => s.bounding_rect(),
            ShapeKind::Group(s) => s.bounding_rect(),
            ShapeKind::SuperEllipse(s) => s.bounding_rect(),
            ShapeKind::Star(s) => s.bounding_rect(),
        }
    }

    fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool {
        match self {
            ShapeKind::Line(s) => s.contains_local(p, tolerance),
            ShapeKind::Rectangle(s) => s.contains_local(p, tolerance),
            ShapeKind::Circle(s) => s.contains_local(p, tolerance),
            ShapeKind::Spiral(s) => s.contains_local(p, tolerance),
            ShapeKind::SineCurve(s) => s.contains_local(p, tolerance),
            ShapeKind::Freehand(s) => s.contains_local(p, tolerance),
            ShapeKind::Group(s) => s.contains_local(p, tolerance),
            ShapeKind::SuperEllipse(s) => s.contains_local(p, tolerance),
            ShapeKind::Star(s) => s.contains_local(p, tolerance),
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            ShapeKind::Line(s) => s.draw(renderer),
            ShapeKind::Rectangle(s) => s.draw(renderer),
            ShapeKind::Circle(s) => s.draw(renderer),
            ShapeKind::Spiral(s) => s.draw(renderer),
            ShapeKind::SineCurve(s) => s.draw(renderer),
            ShapeKind::Freehand(s) => s.draw(renderer),
            ShapeKind::Group(s) => s.draw(renderer),
            ShapeKind::SuperEllipse(s) => s.draw(renderer),
            ShapeKind::Star(s) => s.draw(renderer),
        }
    }
}

impl ShapeKind {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Line(_) => ShapeType::Line,
            ShapeKind::Rectangle(_) => ShapeType::Rectangle,
            ShapeKind::Circle(_) => ShapeType::Circle,
            ShapeKind::Spiral(_) => ShapeType::Spiral,
            ShapeKind::SineCurve(_) => ShapeType::SineCurve,
            ShapeKind::Freehand(_) => ShapeType::Freehand,
            ShapeKind::Group(_) => ShapeType::Group,
            ShapeKind::SuperEllipse(_) => ShapeType::SuperEllipse,
            ShapeKind::Star(_) => ShapeType::Star,
        }
    }
}

/// A document shape: geometry plus style, placement and flags.
///
/// `Clone` is a full value copy; nothing is shared with the original, which
/// is what lets history snapshots survive later in-place edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub stroke: StrokeStyle,
    pub fill: Option<Color>,
    pub transform: Transform,
    pub layer: String,
    /// Mirrors the owning document's selection.
    #[serde(skip)]
    pub selected: bool,
    /// Paint-over strokes that are never picked by selection.
    #[serde(default)]
    pub is_eraser: bool,
}

impl Shape {
    /// New shape with default style and an identity transform. The id and
    /// layer are assigned when the shape is added to a document.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: ShapeId(0),
            kind,
            stroke: StrokeStyle::default(),
            fill: None,
            transform: Transform::identity(),
            layer: String::new(),
            selected: false,
            is_eraser: false,
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill.filter(|c| !c.is_transparent());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn on_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn as_eraser(mut self) -> Self {
        self.is_eraser = true;
        self
    }

    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn bounding_rect(&self) -> Rect {
        self.kind.bounding_rect()
    }

    pub fn contains_local(&self, p: Point, tolerance: &HitTolerance) -> bool {
        self.kind
            .contains_local(p, &tolerance.with_stroke_width(self.stroke.width))
    }

    /// World-space containment: maps the point into local space and tests it.
    pub fn contains(&self, world: Point, tolerance: &HitTolerance) -> bool {
        self.contains_local(self.transform.apply_inverse(world), tolerance)
    }

    pub fn world_bounds(&self) -> Rect {
        self.transform.apply_rect(self.bounding_rect())
    }

    /// Coarse hit box: local bounds grown by `max(min_padding, stroke width)`,
    /// then transformed.
    pub fn padded_world_bounds(&self, min_padding: f64) -> Rect {
        let margin = min_padding.max(self.stroke.width);
        self.transform.apply_rect(self.bounding_rect().inflate(margin))
    }

    /// Center of the local bounding box, in world space.
    pub fn world_center(&self) -> Point {
        self.transform.apply(self.bounding_rect().center())
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.kind.draw(renderer);
    }
}

/// Distance from `p` to the segment `a`-`b`. A zero-length segment degrades
/// to the distance to `a`.
pub(crate) fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.x * ab.x + ab.y * ab.y;
    if len2 == 0.0 {
        return p.distance_to(&a);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len2).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * ab.x, a.y + t * ab.y))
}

/// Minimum distance from `p` to an open polyline; infinite for no points.
pub(crate) fn distance_to_polyline(p: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => p.distance_to(only),
        _ => points
            .windows(2)
            .map(|pair| distance_to_segment(p, pair[0], pair[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

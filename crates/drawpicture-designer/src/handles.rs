//! On-canvas manipulation handles for a single selected shape.
//!
//! The controller is an explicit state machine:
//!
//! ```text
//!            hover handle            press on handle/body
//!   Idle ───────────────▶ Hovering ───────────────────────▶ Dragging
//!    ▲                        │                                │
//!    └──────── hover away ────┘◀──────── release / cancel ─────┘
//! ```
//!
//! Handles live on the shape's rotation-aligned bounding box: the local
//! bounding box mapped through the shape transform, expressed in a frame
//! centred on the box and rotated with the shape. Pointer positions are mapped
//! into that frame (translation and rotation only, scale is not inverted) and
//! compared against square hit boxes of fixed pixel size.
//!
//! A drag edits the shape live through [`Document::set_shape_transform`].
//! The pre-drag state is captured once when the button goes down and is
//! committed to history on release, only if the transform actually changed.

use smallvec::SmallVec;

use drawpicture_settings::HandleSettings;

use crate::document::Document;
use crate::history::HistorySnapshot;
use crate::input::{InputEvent, Modifiers, PointerEvent};
use crate::model::{Color, Point, Rect, Shape, ShapeId, StrokeStyle};
use crate::renderer::Renderer;
use crate::transform::{clamp_scale, rotate_vector, Transform};

/// Below this, a drag-start coordinate is treated as sitting on the centre
/// line and its axis keeps its scale.
const RATIO_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    Rotate,
    /// Anywhere inside the box: moves the shape.
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    Corner,
    Edge,
    Rotate,
    Body,
}

impl HandleId {
    /// Scale and rotate handles, in drawing order.
    pub const ALL: [HandleId; 9] = [
        HandleId::TopLeft,
        HandleId::Top,
        HandleId::TopRight,
        HandleId::Right,
        HandleId::BottomRight,
        HandleId::Bottom,
        HandleId::BottomLeft,
        HandleId::Left,
        HandleId::Rotate,
    ];

    /// Pick priority when hit boxes overlap on small shapes.
    const PICK_ORDER: [HandleId; 9] = [
        HandleId::Rotate,
        HandleId::TopLeft,
        HandleId::TopRight,
        HandleId::BottomRight,
        HandleId::BottomLeft,
        HandleId::Top,
        HandleId::Right,
        HandleId::Bottom,
        HandleId::Left,
    ];

    pub fn role(self) -> HandleRole {
        match self {
            HandleId::TopLeft | HandleId::TopRight | HandleId::BottomRight | HandleId::BottomLeft => {
                HandleRole::Corner
            }
            HandleId::Top | HandleId::Right | HandleId::Bottom | HandleId::Left => HandleRole::Edge,
            HandleId::Rotate => HandleRole::Rotate,
            HandleId::Body => HandleRole::Body,
        }
    }

    /// The handle that stays fixed while this one scales.
    pub fn opposite(self) -> Option<HandleId> {
        let opposite = match self {
            HandleId::TopLeft => HandleId::BottomRight,
            HandleId::Top => HandleId::Bottom,
            HandleId::TopRight => HandleId::BottomLeft,
            HandleId::Right => HandleId::Left,
            HandleId::BottomRight => HandleId::TopLeft,
            HandleId::Bottom => HandleId::Top,
            HandleId::BottomLeft => HandleId::TopRight,
            HandleId::Left => HandleId::Right,
            HandleId::Rotate | HandleId::Body => return None,
        };
        Some(opposite)
    }

    /// Unit position on the box, `(-1, -1)` being the top-left corner.
    fn unit_offset(self) -> (f64, f64) {
        match self {
            HandleId::TopLeft => (-1.0, -1.0),
            HandleId::Top => (0.0, -1.0),
            HandleId::TopRight => (1.0, -1.0),
            HandleId::Right => (1.0, 0.0),
            HandleId::BottomRight => (1.0, 1.0),
            HandleId::Bottom => (0.0, 1.0),
            HandleId::BottomLeft => (-1.0, 1.0),
            HandleId::Left => (-1.0, 0.0),
            HandleId::Rotate => (0.0, -1.0),
            HandleId::Body => (0.0, 0.0),
        }
    }

    /// Which frame axes a scale drag on this handle changes.
    fn scale_axes(self) -> (bool, bool) {
        match self {
            HandleId::Left | HandleId::Right => (true, false),
            HandleId::Top | HandleId::Bottom => (false, true),
            _ => (true, true),
        }
    }

    fn base_direction(self) -> Option<Compass> {
        let direction = match self {
            HandleId::TopLeft => Compass::NorthWest,
            HandleId::Top => Compass::North,
            HandleId::TopRight => Compass::NorthEast,
            HandleId::Right => Compass::East,
            HandleId::BottomRight => Compass::SouthEast,
            HandleId::Bottom => Compass::South,
            HandleId::BottomLeft => Compass::SouthWest,
            HandleId::Left => Compass::West,
            HandleId::Rotate | HandleId::Body => return None,
        };
        Some(direction)
    }
}

/// Screen directions, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    const CLOCKWISE: [Compass; 8] = [
        Compass::North,
        Compass::NorthEast,
        Compass::East,
        Compass::SouthEast,
        Compass::South,
        Compass::SouthWest,
        Compass::West,
        Compass::NorthWest,
    ];

    /// Rotates by `steps` eighths of a turn, clockwise for positive steps.
    pub fn rotated(self, steps: i32) -> Compass {
        let index = Self::CLOCKWISE
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default() as i32;
        Self::CLOCKWISE[(index + steps).rem_euclid(8) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    Resize(Compass),
    Rotate,
    Move,
    Grabbing,
    Crosshair,
}

/// Cursor for a handle on a shape rotated by `rotation` degrees.
///
/// The rotation is reduced modulo 360 and rounded to the nearest 45° step; the
/// handle's unrotated resize direction is then turned by that many steps.
pub fn cursor_for(handle: HandleId, rotation: f64) -> CursorIcon {
    match handle.base_direction() {
        Some(base) => {
            let steps = (rotation.rem_euclid(360.0) / 45.0).round() as i32 % 8;
            CursorIcon::Resize(base.rotated(steps))
        }
        None if handle == HandleId::Rotate => CursorIcon::Rotate,
        None => CursorIcon::Move,
    }
}

/// The rotation-aligned box a shape's handles sit on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleFrame {
    /// World position of the local bounding-box centre.
    pub center: Point,
    pub half_width: f64,
    pub half_height: f64,
    pub rotation: f64,
}

impl HandleFrame {
    pub fn for_shape(shape: &Shape) -> Self {
        let bounds = shape.bounding_rect();
        let t = &shape.transform;
        Self {
            center: t.apply(bounds.center()),
            half_width: (bounds.width * t.scale_x).abs() / 2.0,
            half_height: (bounds.height * t.scale_y).abs() / 2.0,
            rotation: t.rotation,
        }
    }

    /// World point to frame coordinates.
    pub fn to_frame(&self, world: Point) -> Point {
        rotate_vector(world - self.center, -self.rotation)
    }

    /// Frame coordinates to a world point.
    pub fn to_world(&self, local: Point) -> Point {
        self.center + rotate_vector(local, self.rotation)
    }

    /// Handle centre in frame coordinates.
    pub fn handle_offset(&self, handle: HandleId, rotate_offset: f64) -> Point {
        let (ux, uy) = handle.unit_offset();
        let mut offset = Point::new(ux * self.half_width, uy * self.half_height);
        if handle == HandleId::Rotate {
            offset.y -= rotate_offset;
        }
        offset
    }

    pub fn contains(&self, frame_point: Point) -> bool {
        frame_point.x.abs() <= self.half_width && frame_point.y.abs() <= self.half_height
    }

    /// The box in frame coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(
            -self.half_width,
            -self.half_height,
            2.0 * self.half_width,
            2.0 * self.half_height,
        )
    }
}

/// World positions of the scale and rotate handles.
pub type HandleLayout = SmallVec<[(HandleId, Point); 9]>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HandleState {
    #[default]
    Idle,
    Hovering(HandleId),
    Dragging {
        handle: HandleId,
        origin: Point,
        center: Point,
    },
}

/// Everything a gesture needs, fixed when the button goes down.
#[derive(Debug)]
struct DragSession {
    shape_id: ShapeId,
    handle: HandleId,
    origin: Point,
    frame: HandleFrame,
    start_transform: Transform,
    local_center: Point,
    /// Local point that must keep its world position while scaling.
    anchor_local: Option<Point>,
    moving: bool,
    last_angle: f64,
    sweep: f64,
    snapshot: HistorySnapshot,
    was_modified: bool,
}

impl DragSession {
    fn update(&mut self, settings: &HandleSettings, p: Point, modifiers: Modifiers) -> Option<Transform> {
        match self.handle.role() {
            HandleRole::Body => self.drag_body(settings, p),
            HandleRole::Rotate => Some(self.drag_rotate(settings, p, modifiers.shift)),
            HandleRole::Corner | HandleRole::Edge => self.drag_scale(settings, p, modifiers.shift),
        }
    }

    fn drag_body(&mut self, settings: &HandleSettings, p: Point) -> Option<Transform> {
        if !self.moving {
            if p.distance_to(&self.origin) <= settings.move_threshold {
                return None;
            }
            self.moving = true;
        }
        let mut next = self.start_transform;
        next.translate_by(p.x - self.origin.x, p.y - self.origin.y);
        Some(next)
    }

    fn drag_rotate(&mut self, settings: &HandleSettings, p: Point, snap: bool) -> Transform {
        let angle = angle_of(p - self.frame.center);
        self.sweep += normalize_degrees(angle - self.last_angle);
        self.last_angle = angle;

        let mut rotation = self.start_transform.rotation + self.sweep;
        let step = settings.rotation_snap_degrees;
        if snap && step > 0.0 {
            rotation = (rotation / step).round() * step;
        }
        self.start_transform
            .with_rotation_about(self.local_center, rotation)
    }

    fn drag_scale(&mut self, settings: &HandleSettings, p: Point, uniform: bool) -> Option<Transform> {
        let anchor = self.anchor_local?;
        let start = self.frame.to_frame(self.origin);
        let now = self.frame.to_frame(p);
        let ratio = |now: f64, start: f64| {
            if start.abs() < RATIO_EPSILON {
                1.0
            } else {
                now / start
            }
        };

        let (scale_x_axis, scale_y_axis) = self.handle.scale_axes();
        let mut fx = if scale_x_axis { ratio(now.x, start.x) } else { 1.0 };
        let mut fy = if scale_y_axis { ratio(now.y, start.y) } else { 1.0 };
        if uniform && self.handle.role() == HandleRole::Corner {
            let magnitude = fx.abs().max(fy.abs());
            fx = magnitude.copysign(fx);
            fy = magnitude.copysign(fy);
        }

        let t = self.start_transform;
        let scale_x = clamp_scale(t.scale_x * fx, settings.min_scale);
        let scale_y = clamp_scale(t.scale_y * fy, settings.min_scale);
        Some(t.with_scale_about(anchor, scale_x, scale_y))
    }
}

fn angle_of(v: Point) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

/// Maps an angle difference into `(-180, 180]`.
fn normalize_degrees(delta: f64) -> f64 {
    let d = delta.rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

#[derive(Debug, Default)]
pub struct HandleController {
    settings: HandleSettings,
    state: HandleState,
    session: Option<DragSession>,
}

impl HandleController {
    pub fn new(settings: HandleSettings) -> Self {
        Self {
            settings,
            state: HandleState::Idle,
            session: None,
        }
    }

    pub fn settings(&self) -> &HandleSettings {
        &self.settings
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Routes an input event. Returns true when the controller consumed it.
    pub fn handle_event(&mut self, doc: &mut Document, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(e) => self.pointer_down(doc, e),
            InputEvent::PointerMove(e) => self.pointer_move(doc, e),
            InputEvent::PointerUp(e) => self.pointer_up(doc, e),
            InputEvent::Key(_) => false,
        }
    }

    /// Frame of the shape the handles currently apply to: the single
    /// selected shape, on a visible unlocked layer.
    pub fn frame(&self, doc: &Document) -> Option<HandleFrame> {
        self.target(doc).map(HandleFrame::for_shape)
    }

    pub fn layout(&self, doc: &Document) -> Option<HandleLayout> {
        let frame = self.frame(doc)?;
        Some(
            HandleId::ALL
                .iter()
                .map(|h| {
                    let offset = frame.handle_offset(*h, self.settings.rotate_handle_offset);
                    (*h, frame.to_world(offset))
                })
                .collect(),
        )
    }

    /// Handle (or body) under a world point.
    pub fn handle_at(&self, doc: &Document, point: Point) -> Option<HandleId> {
        let shape = self.target(doc)?;
        let frame = HandleFrame::for_shape(shape);
        let q = frame.to_frame(point);
        let extent = self.settings.handle_half_extent;

        let handle = HandleId::PICK_ORDER.iter().copied().find(|h| {
            let c = frame.handle_offset(*h, self.settings.rotate_handle_offset);
            (q.x - c.x).abs() <= extent && (q.y - c.y).abs() <= extent
        });
        if handle.is_some() {
            return handle;
        }
        if frame.contains(q) || doc.hit_tester().hits(shape, point) {
            return Some(HandleId::Body);
        }
        None
    }

    pub fn pointer_down(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        if !event.is_left() || self.session.is_some() {
            return false;
        }
        let Some(handle) = self.handle_at(doc, event.position) else {
            self.state = HandleState::Idle;
            return false;
        };
        let Some(shape) = self.target(doc) else {
            return false;
        };

        let frame = HandleFrame::for_shape(shape);
        let start_transform = shape.transform;
        let anchor_local = handle.opposite().map(|opposite| {
            let anchor = frame.to_world(frame.handle_offset(opposite, 0.0));
            start_transform.apply_inverse(anchor)
        });
        let session = DragSession {
            shape_id: shape.id,
            handle,
            origin: event.position,
            frame,
            start_transform,
            local_center: shape.bounding_rect().center(),
            anchor_local,
            moving: false,
            last_angle: angle_of(event.position - frame.center),
            sweep: 0.0,
            snapshot: doc.snapshot(),
            was_modified: doc.is_modified(),
        };

        tracing::debug!("Started {:?} drag on {}", handle, session.shape_id);
        self.state = HandleState::Dragging {
            handle,
            origin: event.position,
            center: frame.center,
        };
        self.session = Some(session);
        true
    }

    pub fn pointer_move(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        if self.session.is_none() {
            self.state = match self.handle_at(doc, event.position) {
                Some(handle) => HandleState::Hovering(handle),
                None => HandleState::Idle,
            };
            return false;
        }
        self.apply_drag(doc, event)
    }

    /// Ends the gesture, committing one history entry if anything changed.
    pub fn pointer_up(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.apply_drag(doc, event);
        self.state = HandleState::Idle;
        let Some(session) = self.session.take() else {
            return true;
        };

        let changed = doc
            .shape(session.shape_id)
            .is_some_and(|s| s.transform != session.start_transform);
        if changed {
            doc.commit_snapshot(session.snapshot);
            tracing::debug!("Committed {:?} drag on {}", session.handle, session.shape_id);
        } else {
            doc.set_modified(session.was_modified);
        }
        true
    }

    /// Abandons the gesture and puts the shape back where it started.
    pub fn cancel(&mut self, doc: &mut Document) {
        self.state = HandleState::Idle;
        if let Some(session) = self.session.take() {
            doc.set_shape_transform(session.shape_id, session.start_transform);
            doc.set_modified(session.was_modified);
            tracing::debug!("Cancelled {:?} drag on {}", session.handle, session.shape_id);
        }
    }

    pub fn cursor(&self, doc: &Document) -> CursorIcon {
        let rotation = doc
            .single_selection()
            .and_then(|id| doc.shape(id))
            .map_or(0.0, |s| s.transform.rotation);
        match self.state {
            HandleState::Idle => CursorIcon::Default,
            HandleState::Hovering(handle) => cursor_for(handle, rotation),
            HandleState::Dragging {
                handle: HandleId::Body,
                ..
            } => CursorIcon::Grabbing,
            HandleState::Dragging { handle, .. } => cursor_for(handle, rotation),
        }
    }

    /// Draws the box, the handles and the rotate stalk in world space.
    pub fn paint_overlay(&self, doc: &Document, renderer: &mut dyn Renderer) {
        let Some(frame) = self.frame(doc) else {
            return;
        };
        let extent = self.settings.handle_half_extent;
        let top = frame.handle_offset(HandleId::Top, 0.0);
        let knob = frame.handle_offset(HandleId::Rotate, self.settings.rotate_handle_offset);

        renderer.save();
        renderer.transform(&Transform::compose(frame.center, frame.rotation, 1.0, 1.0));
        renderer.set_stroke(&StrokeStyle::new(Color::SELECTION, 1.0));
        renderer.set_fill(None);
        renderer.rect(frame.rect());
        renderer.line(top, knob);

        renderer.set_fill(Some(Color::WHITE));
        for handle in HandleId::ALL {
            let c = frame.handle_offset(handle, self.settings.rotate_handle_offset);
            if handle == HandleId::Rotate {
                renderer.ellipse(c, extent, extent);
            } else {
                renderer.rect(Rect::new(c.x - extent, c.y - extent, 2.0 * extent, 2.0 * extent));
            }
        }
        renderer.restore();
    }

    fn target<'a>(&self, doc: &'a Document) -> Option<&'a Shape> {
        let shape = doc.shape(doc.single_selection()?)?;
        doc.layer(&shape.layer)
            .filter(|layer| layer.is_editable())
            .map(|_| shape)
    }

    fn apply_drag(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(next) = session.update(&self.settings, event.position, event.modifiers) else {
            return true;
        };
        tracing::trace!("{:?} drag to {:?}", session.handle, next);
        if !doc.set_shape_transform(session.shape_id, next) {
            self.session = None;
            self.state = HandleState::Idle;
            return false;
        }
        true
    }
}

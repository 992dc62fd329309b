//! Affine transform math.
//!
//! A shape's [`Transform`] maps its local coordinates into world coordinates
//! as `translate ∘ rotate ∘ scale`: a local point is scaled first, then
//! rotated about the local origin, then translated. Rotation is stored in
//! degrees and never normalised.
//!
//! Inversion only fails for a zero scale. Callers that map a world point back
//! into local space use [`Transform::apply_inverse`], which returns the point
//! unchanged in that case instead of failing.

use nalgebra::{Matrix3, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::model::{Point, Rect};

/// Smallest scale magnitude reachable through interactive editing.
pub const MIN_SCALE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Point,
    /// Degrees, clockwise on a y-down canvas.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translation: Point::new(0.0, 0.0),
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Builds `translate(position) ∘ rotate(rotation_deg) ∘ scale(scale_x, scale_y)`.
    pub fn compose(position: Point, rotation_deg: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            translation: position,
            rotation: rotation_deg,
            scale_x,
            scale_y,
        }
    }

    pub fn translated(position: Point) -> Self {
        Self::compose(position, 0.0, 1.0, 1.0)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Homogeneous 3x3 matrix of the composition.
    pub fn matrix(&self) -> Matrix3<f64> {
        let translate =
            Matrix3::new_translation(&Vector2::new(self.translation.x, self.translation.y));
        let rotate = Matrix3::new_rotation(self.rotation.to_radians());
        let scale = Matrix3::new_nonuniform_scaling(&Vector2::new(self.scale_x, self.scale_y));
        translate * rotate * scale
    }

    /// Inverse mapping, or `None` when a scale component is zero.
    pub fn invert(&self) -> Option<Affine> {
        if self.scale_x == 0.0 || self.scale_y == 0.0 {
            return None;
        }
        self.matrix().try_inverse().map(Affine)
    }

    pub fn apply(&self, p: Point) -> Point {
        self.translation + self.linear(p)
    }

    /// World to local. A singular transform leaves the point unchanged.
    pub fn apply_inverse(&self, p: Point) -> Point {
        match self.invert() {
            Some(inverse) => inverse.apply(p),
            None => p,
        }
    }

    /// Axis-aligned bounds of the four transformed corners of `rect`.
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        let corners = rect.corners().map(|corner| self.apply(corner));
        Rect::bounding(corners.iter().copied()).unwrap_or(rect)
    }

    /// Rotation and scale without the translation.
    pub fn linear(&self, p: Point) -> Point {
        let sx = p.x * self.scale_x;
        let sy = p.y * self.scale_y;
        rotate_vector(Point::new(sx, sy), self.rotation)
    }

    /// Same transform with a new rotation, re-translated so that the world
    /// image of `local_pivot` does not move.
    pub fn with_rotation_about(&self, local_pivot: Point, rotation: f64) -> Self {
        let anchor = self.apply(local_pivot);
        let mut next = Self { rotation, ..*self };
        next.translation = anchor - next.linear(local_pivot);
        next
    }

    /// Same transform with new scale factors, re-translated so that the world
    /// image of `local_pivot` does not move.
    pub fn with_scale_about(&self, local_pivot: Point, scale_x: f64, scale_y: f64) -> Self {
        let anchor = self.apply(local_pivot);
        let mut next = Self {
            scale_x,
            scale_y,
            ..*self
        };
        next.translation = anchor - next.linear(local_pivot);
        next
    }

    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        self.translation.x += dx;
        self.translation.y += dy;
    }
}

/// General 2D affine matrix, used for inverses (which are not expressible as
/// translate∘rotate∘scale once the scale is non-uniform).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine(Matrix3<f64>);

impl Affine {
    pub fn apply(&self, p: Point) -> Point {
        let mapped = self.0.transform_point(&Point2::new(p.x, p.y));
        Point::new(mapped.x, mapped.y)
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }
}

/// Rotates a vector by `degrees` about the origin.
pub fn rotate_vector(v: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Clamps the magnitude of a scale factor to at least `min`, keeping its sign.
/// Zero becomes `+min`.
pub fn clamp_scale(value: f64, min: f64) -> f64 {
    if value.abs() >= min {
        value
    } else if value < 0.0 {
        -min
    } else {
        min
    }
}

//! Viewport and coordinate transformation for canvas rendering.
//!
//! Converts between screen coordinates (pixels, 0,0 at the top-left of the
//! canvas widget) and world coordinates (document space). Both are y-down, so
//! the mapping is a pan offset followed by a uniform zoom:
//!
//! ```text
//! world  = (screen - pan) / zoom
//! screen = world * zoom + pan
//! ```

use std::fmt;

use drawpicture_settings::ViewSettings;

use crate::model::{Point, Rect};

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    settings: ViewSettings,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Creates a viewport at 100% zoom with no pan.
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            settings,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.clamp_zoom(zoom);
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.settings.zoom_step);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.settings.zoom_step);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Gets the pan offset in pixels.
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount in pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts a screen position to world coordinates.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts world coordinates to a screen position.
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan_x,
            world.y * self.zoom + self.pan_y,
        )
    }

    /// Zooms while keeping the world point under `screen` fixed on screen.
    ///
    /// Useful for "zoom to cursor" with the mouse wheel.
    pub fn zoom_at(&mut self, screen: Point, zoom: f64) {
        let anchor = self.screen_to_world(screen);
        self.zoom = self.clamp_zoom(zoom);
        // screen = world * zoom + pan  =>  pan = screen - world * zoom
        self.pan_x = screen.x - anchor.x * self.zoom;
        self.pan_y = screen.y - anchor.y * self.zoom;
    }

    /// World-space rectangle covered by a canvas of the given pixel size.
    pub fn visible_world_rect(&self, width: f64, height: f64) -> Rect {
        Rect::from_points(
            self.screen_to_world(Point::new(0.0, 0.0)),
            self.screen_to_world(Point::new(width, height)),
        )
    }

    /// World coordinates of the vertical and horizontal grid lines crossing
    /// `area`. Empty for a non-positive grid size.
    pub fn grid_lines(&self, area: Rect) -> (Vec<f64>, Vec<f64>) {
        let size = self.settings.grid_size;
        if size <= 0.0 {
            return (Vec::new(), Vec::new());
        }
        let lines = |from: f64, to: f64| {
            let first = (from / size).ceil() as i64;
            let last = (to / size).floor() as i64;
            (first..=last).map(|i| i as f64 * size).collect::<Vec<_>>()
        };
        (
            lines(area.left(), area.right()),
            lines(area.top(), area.bottom()),
        )
    }

    /// Resets viewport to 1:1 zoom and no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.settings.min_zoom, self.settings.max_zoom)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewSettings::default())
    }
}

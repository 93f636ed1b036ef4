use serde::{Deserialize, Serialize};

use crate::physics::State;

pub const DEFAULT_SCALE: f64 = 0.2;
/// Scale multiplier applied per wheel notch
pub const ZOOM_FACTOR: f64 = 1.1;

/// Which two state components map to screen horizontal / vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisPair {
    XY,
    YZ,
    XZ,
}

impl AxisPair {
    #[inline]
    pub fn indices(self) -> (usize, usize) {
        match self {
            AxisPair::XY => (0, 1),
            AxisPair::YZ => (1, 2),
            AxisPair::XZ => (0, 2),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AxisPair::XY => "x-y",
            AxisPair::YZ => "y-z",
            AxisPair::XZ => "x-z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Shrink `scale`, objects get bigger
    In,
    /// Grow `scale`, objects get smaller
    Out,
}

/// Simulation space to pixel mapping.
///
/// `scale` is simulation units per pixel, so the forward transform divides
/// by it and the inverse multiplies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub shift_x: i32,
    pub shift_y: i32,
    pub axes: AxisPair,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            shift_x: 0,
            shift_y: 0,
            axes: AxisPair::XY,
        }
    }
}

impl ViewTransform {
    pub fn centered(width: f32, height: f32, scale: f64) -> Self {
        let mut view = Self { scale, ..Self::default() };
        view.recenter(width, height, scale);
        view
    }

    /// Reset zoom and put the simulation origin at the surface center
    pub fn recenter(&mut self, width: f32, height: f32, scale: f64) {
        self.scale = scale;
        self.shift_x = (width / 2.0) as i32;
        self.shift_y = (height / 2.0) as i32;
    }

    #[inline]
    pub fn project(&self, point: State) -> (i32, i32) {
        let (ax, ay) = self.axes.indices();
        (
            (point[ax] / self.scale + self.shift_x as f64) as i32,
            (point[ay] / self.scale + self.shift_y as f64) as i32,
        )
    }

    /// Simulation-space coordinates (on the current axis pair) under a pixel
    #[inline]
    pub fn unproject(&self, pixel: (i32, i32)) -> (f64, f64) {
        (
            (pixel.0 as f64 - self.shift_x as f64) * self.scale,
            (pixel.1 as f64 - self.shift_y as f64) * self.scale,
        )
    }

    /// Zoom while keeping the point under `cursor` fixed on screen.
    ///
    /// Shifts saturate at the `i32` range once the anchor is too far off
    /// screen to represent; the scale itself keeps changing.
    pub fn zoom_at(&mut self, cursor: (i32, i32), direction: ZoomDirection) {
        let (cx, cy) = self.unproject(cursor);
        match direction {
            ZoomDirection::Out => self.scale *= ZOOM_FACTOR,
            ZoomDirection::In => self.scale /= ZOOM_FACTOR,
        }
        self.shift_x = (cursor.0 as f64 - (cx / self.scale).round()) as i32;
        self.shift_y = (cursor.1 as f64 - (cy / self.scale).round()) as i32;
    }

    pub fn pan(&mut self, delta: (i32, i32)) {
        self.shift_x = self.shift_x.saturating_add(delta.0);
        self.shift_y = self.shift_y.saturating_add(delta.1);
    }

    pub fn set_axes(&mut self, axes: AxisPair) {
        self.axes = axes;
    }

    /// Pixel radius of something `radius` simulation units wide
    pub fn marker_radius(&self, radius: f64) -> f32 {
        (radius / self.scale) as f32
    }
}

use std::cell::Cell;

use crate::foundation::error::{LayoutError, LayoutResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// One of the two layout axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Horizontal (x / width).
    Horizontal,
    /// Vertical (y / height).
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub(crate) fn of_size(self, s: Size) -> f64 {
        match self {
            Axis::Horizontal => s.width,
            Axis::Vertical => s.height,
        }
    }

    pub(crate) fn of_vec(self, v: Vec2) -> f64 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    pub(crate) fn of_point(self, p: Point) -> f64 {
        match self {
            Axis::Horizontal => p.x,
            Axis::Vertical => p.y,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Source of the UI scale factor.
///
/// The resolver reads the factor once at the start of each node's resolution and never stores
/// it, so a live setting (e.g. a [`Cell`]) may change between calls.
pub trait ScaleSource {
    /// Current UI scale factor.
    fn scale(&self) -> f64;

    /// Scale a raw (unscaled) length.
    fn scaled(&self, value: f64) -> f64 {
        value * self.scale()
    }
}

impl ScaleSource for f64 {
    fn scale(&self) -> f64 {
        *self
    }
}

impl ScaleSource for Cell<f64> {
    fn scale(&self) -> f64 {
        self.get()
    }
}

/// Explicit scale context passed into a resolution call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleContext {
    /// UI scale factor; must be finite and > 0.
    pub gui_scale: f64,
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self { gui_scale: 1.0 }
    }
}

impl ScaleContext {
    /// Build a validated scale context.
    pub fn new(gui_scale: f64) -> LayoutResult<Self> {
        if !gui_scale.is_finite() || gui_scale <= 0.0 {
            return Err(LayoutError::validation(format!(
                "gui scale must be finite and > 0, got {gui_scale}"
            )));
        }
        Ok(Self { gui_scale })
    }
}

impl ScaleSource for ScaleContext {
    fn scale(&self) -> f64 {
        self.gui_scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

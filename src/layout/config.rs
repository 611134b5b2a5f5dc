//! Geometry parameters for the drill grid

use serde::Deserialize;

/// Placement parameters for the drill grid.
///
/// Each diameter group occupies one row. Holes within a row are spaced by
/// `x_spacing`, rows are spaced by `y_spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Geometry {
    /// X coordinate of the first hole of every row (mm)
    pub start_x: f64,

    /// Y coordinate of the first row (mm)
    pub start_y: f64,

    /// Horizontal pitch between holes in a row (mm)
    pub x_spacing: f64,

    /// Vertical pitch between rows (mm)
    pub y_spacing: f64,

    /// Drill depth applied to every hole (mm)
    pub depth: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_y: 0.0,
            x_spacing: 32.0,
            y_spacing: 50.0,
            depth: 15.0,
        }
    }
}

impl Geometry {
    /// Create a new geometry with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of the first hole
    pub fn with_start(mut self, x: f64, y: f64) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    /// Set the hole and row pitch
    pub fn with_spacing(mut self, x_spacing: f64, y_spacing: f64) -> Self {
        self.x_spacing = x_spacing;
        self.y_spacing = y_spacing;
        self
    }

    /// Set the drill depth
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    /// Field names paired with their values, in declaration order
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("x_spacing", self.x_spacing),
            ("y_spacing", self.y_spacing),
            ("depth", self.depth),
        ]
    }
}

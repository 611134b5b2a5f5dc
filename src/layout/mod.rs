//! Drill grid layout
//!
//! Turns an ordered list of diameter groups into drill records. Each group is
//! one row; spindles within a group are placed left to right.
//!
//! No validation happens here. Whatever numbers come in are echoed into the
//! records unchanged, see [`crate::DrillConfig::validate`] for the checks the
//! pipeline runs before rendering.

pub mod config;
pub mod types;

pub use config::Geometry;
pub use types::{DiameterGroup, DrillRecord, SpindleId};

use log::debug;

/// Lay out every spindle of every group on the grid.
///
/// For the k-th group and the j-th spindle within it, the record sits at
/// `(start_x + j * x_spacing, start_y + k * y_spacing)`. Coordinates are
/// accumulated with running cursors, so an empty group still advances the
/// row cursor.
pub fn render(groups: &[DiameterGroup], geometry: &Geometry) -> Vec<DrillRecord> {
    let mut records = Vec::with_capacity(groups.iter().map(|g| g.spindles.len()).sum());

    let mut current_y = geometry.start_y;
    for group in groups {
        debug!(
            "row y={}: diameter {} with {} spindle(s)",
            current_y,
            group.diameter,
            group.spindles.len()
        );

        let mut current_x = geometry.start_x;
        for &spindle_id in &group.spindles {
            records.push(DrillRecord::new(
                spindle_id,
                current_x,
                current_y,
                geometry.depth,
                group.diameter,
            ));
            current_x += geometry.x_spacing;
        }
        current_y += geometry.y_spacing;
    }

    records
}

//! Core types for the drill layout

use serde::Deserialize;

/// Identifier of a machine tool holder
pub type SpindleId = u32;

/// A set of spindle assignments sharing one drill-bit diameter.
///
/// One group forms one row of the layout. Spindle order is emission order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiameterGroup {
    /// Drill-bit diameter in millimeters
    pub diameter: f64,

    /// Spindles drilling this diameter, left to right
    #[serde(default)]
    pub spindles: Vec<SpindleId>,
}

impl DiameterGroup {
    pub fn new(diameter: f64, spindles: impl IntoIterator<Item = SpindleId>) -> Self {
        Self {
            diameter,
            spindles: spindles.into_iter().collect(),
        }
    }

    /// A group without spindles still consumes a row
    pub fn is_empty(&self) -> bool {
        self.spindles.is_empty()
    }
}

/// One drill operation, emitted as a single `DRILL` macro
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrillRecord {
    pub spindle_id: SpindleId,
    pub x: f64,
    pub y: f64,
    /// Always zero; kept so the record mirrors the macro parameters
    pub z: f64,
    pub depth: f64,
    pub diameter: f64,
}

impl DrillRecord {
    pub fn new(spindle_id: SpindleId, x: f64, y: f64, depth: f64, diameter: f64) -> Self {
        Self {
            spindle_id,
            x,
            y,
            z: 0.0,
            depth,
            diameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_z_is_zero() {
        let record = DrillRecord::new(7, 1.0, 2.0, 15.0, 5.0);
        assert_eq!(record.z, 0.0);
        assert_eq!(record.spindle_id, 7);
    }

    #[test]
    fn test_group_without_spindles_key() {
        let group: DiameterGroup = toml::from_str("diameter = 10.0").expect("Should parse");
        assert!(group.is_empty());
        assert_eq!(group.diameter, 10.0);
    }

    #[test]
    fn test_group_rejects_unknown_field() {
        let result: Result<DiameterGroup, _> = toml::from_str("diameter = 10.0\nspindle = [1]");
        assert!(result.is_err());
    }
}

//! Drill configuration loading and validation
//!
//! A configuration is a TOML document listing diameter groups in emission
//! order, plus optional layout geometry and program header sections.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::{DiameterGroup, Geometry};
use crate::renderer::ProgramConfig;

/// Everything needed to generate one drill program
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrillConfig {
    /// Program header
    #[serde(default)]
    pub program: ProgramConfig,

    /// Grid placement
    #[serde(default)]
    pub layout: Geometry,

    /// Diameter groups, one row each, in emission order
    #[serde(default, rename = "group")]
    pub groups: Vec<DiameterGroup>,
}

/// Sample configuration: 5 mm holes on spindles 1-5, 8 mm holes on 6-8
pub const SAMPLE_CONFIG: &str = r#"# Drill test program configuration

[program]
name = "DrillTest"
units = "MM"

[layout]
start_x = 0.0
start_y = 0.0
x_spacing = 32.0
y_spacing = 50.0
depth = 15.0

# One row per group, spindles drilled left to right
[[group]]
diameter = 5.0
spindles = [1, 2, 3, 4, 5]

[[group]]
diameter = 8.0
spindles = [6, 7, 8]
"#;

impl DrillConfig {
    /// Create a configuration with default geometry and header
    pub fn new(groups: Vec<DiameterGroup>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    /// The configuration described by [`SAMPLE_CONFIG`]
    pub fn sample() -> Self {
        Self::new(vec![
            DiameterGroup::new(5.0, 1..=5),
            DiameterGroup::new(8.0, 6..=8),
        ])
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading drill configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: DrillConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Set the grid geometry
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.layout = geometry;
        self
    }

    /// Set the program header
    pub fn with_program(mut self, program: ProgramConfig) -> Self {
        self.program = program;
        self
    }

    /// Total number of holes, which is the number of macros emitted
    pub fn hole_count(&self) -> usize {
        self.groups.iter().map(|g| g.spindles.len()).sum()
    }

    /// Check the configuration before anything is rendered or written.
    ///
    /// Rejects non-finite geometry, non-finite or non-positive diameters,
    /// spindle id 0, a diameter listed in more than one group, and header
    /// fields that would break the line structure of the program.
    /// Negative depth and spacing are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_program_field("name", &self.program.name)?;
        validate_program_field("units", &self.program.units)?;

        for (field, value) in self.layout.fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteGeometry { field, value });
            }
        }

        for (index, group) in self.groups.iter().enumerate() {
            if !group.diameter.is_finite() {
                return Err(ConfigError::NonFiniteDiameter {
                    index,
                    diameter: group.diameter,
                });
            }
            if group.diameter <= 0.0 {
                return Err(ConfigError::NonPositiveDiameter {
                    index,
                    diameter: group.diameter,
                });
            }
            if group.spindles.contains(&0) {
                return Err(ConfigError::ZeroSpindle { index });
            }
            if let Some(first) = self.groups[..index]
                .iter()
                .position(|g| g.diameter == group.diameter)
            {
                return Err(ConfigError::DuplicateDiameter {
                    diameter: group.diameter,
                    first,
                    second: index,
                });
            }
        }

        Ok(())
    }
}

fn validate_program_field(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let reason = if value.trim().is_empty() {
        "must not be empty"
    } else if value.contains(['\n', '\r']) {
        "must not contain line breaks"
    } else if !value.is_ascii() {
        "must be ASCII"
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidProgramField { field, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_matches_sample_toml() {
        let parsed = DrillConfig::from_str(SAMPLE_CONFIG).expect("Should parse");
        assert_eq!(parsed, DrillConfig::sample());
        assert_eq!(parsed.hole_count(), 8);
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config = DrillConfig::from_str("").expect("Should parse");
        assert!(config.groups.is_empty());
        assert_eq!(config.layout, Geometry::default());
        assert_eq!(config.program, ProgramConfig::default());
    }

    #[test]
    fn test_group_order_preserved() {
        let toml_str = r#"
[[group]]
diameter = 8.0
spindles = [4, 5]

[[group]]
diameter = 5.0
spindles = [3, 1, 2]
"#;
        let config = DrillConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.groups[0].diameter, 8.0);
        assert_eq!(config.groups[1].spindles, vec![3, 1, 2]);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = DrillConfig::from_str("[machine]\nmodel = \"rover\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_non_numeric_diameter_rejected() {
        let result = DrillConfig::from_str("[[group]]\ndiameter = \"five\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_negative_spindle_rejected_by_parser() {
        let result = DrillConfig::from_str("[[group]]\ndiameter = 5.0\nspindles = [-1]\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DrillConfig::from_file(Path::new("/nonexistent/drill.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validate_sample() {
        assert!(DrillConfig::sample().validate().is_ok());
    }

    #[test]
    fn test_validate_allows_empty_group_and_negative_depth() {
        let config = DrillConfig::new(vec![DiameterGroup::new(10.0, [])])
            .with_geometry(Geometry::new().with_depth(-15.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_diameter() {
        let config = DrillConfig::new(vec![
            DiameterGroup::new(5.0, [1]),
            DiameterGroup::new(0.0, [2]),
        ]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDiameter { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_diameter() {
        let config = DrillConfig::new(vec![DiameterGroup::new(f64::NAN, [1])]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteDiameter { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_geometry() {
        let config = DrillConfig::sample()
            .with_geometry(Geometry::new().with_spacing(32.0, f64::INFINITY));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteGeometry {
                field: "y_spacing",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_spindle() {
        let config = DrillConfig::new(vec![DiameterGroup::new(5.0, [1, 0])]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroSpindle { index: 0 })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_diameter() {
        let config = DrillConfig::new(vec![
            DiameterGroup::new(5.0, [1]),
            DiameterGroup::new(8.0, [2]),
            DiameterGroup::new(5.0, [3]),
        ]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateDiameter {
                first: 0,
                second: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_program_fields() {
        let config = DrillConfig::sample()
            .with_program(ProgramConfig::new().with_name("Drill\nTest"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProgramField { field: "name", .. })
        ));

        let config = DrillConfig::sample().with_program(ProgramConfig::new().with_units(" "));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProgramField { field: "units", .. })
        ));
    }
}

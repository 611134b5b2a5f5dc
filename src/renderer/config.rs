//! Configuration for CIX program output

use serde::Deserialize;

/// Program header settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgramConfig {
    /// Value of the header `NAME=` line
    pub name: String,

    /// Value of the header `UNITS=` line, echoed verbatim
    pub units: String,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            name: "DrillTest".to_string(),
            units: "MM".to_string(),
        }
    }
}

impl ProgramConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the program name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the units label
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }
}

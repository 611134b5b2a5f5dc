//! CIX text generation from drill records

use crate::layout::DrillRecord;

use super::ProgramConfig;

const INDENT: &str = "    ";

/// Name of the macro emitted for every drill record
pub const DRILL_MACRO: &str = "DRILL";

/// A named operation block with its parameters in emission order
#[derive(Debug, Clone, PartialEq)]
pub struct CixMacro {
    name: String,
    params: Vec<(String, String)>,
}

impl CixMacro {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: vec![],
        }
    }

    /// Append a `PARAM,NAME=<name>,VALUE=<value>` line
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("BEGIN MACRO\n");
        out.push_str(&format!("{}NAME={}\n", INDENT, self.name));
        for (name, value) in &self.params {
            out.push_str(&format!("{}PARAM,NAME={},VALUE={}\n", INDENT, name, value));
        }
        out.push_str("END MACRO\n");
    }
}

impl From<&DrillRecord> for CixMacro {
    fn from(record: &DrillRecord) -> Self {
        CixMacro::new(DRILL_MACRO)
            .param("SPINDLEID", record.spindle_id.to_string())
            .param("X", format_number(record.x))
            .param("Y", format_number(record.y))
            // Z is always emitted as a bare integer zero
            .param("Z", "0")
            .param("DPTH", format_number(record.depth))
            .param("DIAMETER", format_number(record.diameter))
    }
}

/// Build a CIX program incrementally
pub struct CixBuilder {
    config: ProgramConfig,
    macros: Vec<CixMacro>,
}

impl CixBuilder {
    /// Create a new builder for a program with the given header
    pub fn new(config: ProgramConfig) -> Self {
        Self {
            config,
            macros: vec![],
        }
    }

    /// Add an arbitrary macro
    pub fn add_macro(&mut self, mac: CixMacro) {
        self.macros.push(mac);
    }

    /// Add a `DRILL` macro for one record
    pub fn add_drill(&mut self, record: &DrillRecord) {
        self.add_macro(CixMacro::from(record));
    }

    /// Number of macros added so far
    pub fn macro_count(&self) -> usize {
        self.macros.len()
    }

    /// Produce the final program text.
    ///
    /// The header is followed by a blank line, consecutive macros are
    /// separated by one blank line, and `END PROGRAM` follows the last
    /// macro directly.
    pub fn build(self) -> String {
        let mut out = String::new();

        out.push_str("BEGIN PROGRAM\n");
        out.push_str(&format!("{}NAME={}\n", INDENT, self.config.name));
        out.push_str(&format!("{}UNITS={}\n", INDENT, self.config.units));
        out.push('\n');

        for (i, mac) in self.macros.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            mac.write_to(&mut out);
        }

        out.push_str("END PROGRAM\n");
        out
    }
}

/// Serialize drill records, in order, into a complete CIX program
pub fn serialize(records: &[DrillRecord], config: &ProgramConfig) -> String {
    let mut builder = CixBuilder::new(config.clone());
    for record in records {
        builder.add_drill(record);
    }
    builder.build()
}

/// Format a real number for a `VALUE=` field.
///
/// Shortest round-trippable decimal, never exponent notation, always at
/// least one fractional digit: `0.0`, `64.0`, `12.5`. Non-finite values
/// come out as `NaN`, `inf` and `-inf`.
pub fn format_number(value: f64) -> String {
    let mut s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

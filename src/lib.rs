//! CIX Drill - drill test program generator for CIX-based CNC drilling machines
//!
//! This library lays out a grid of drill operations from a list of diameter
//! groups and renders it as a `.cix` control program.
//!
//! # Example
//!
//! ```rust
//! use cix_drill::{generate, DiameterGroup, DrillConfig};
//!
//! let config = DrillConfig::new(vec![
//!     DiameterGroup::new(5.0, [1, 2, 3]),
//!     DiameterGroup::new(8.0, [4, 5]),
//! ]);
//!
//! let program = generate(&config).unwrap();
//! assert!(program.starts_with("BEGIN PROGRAM\n"));
//! assert_eq!(program.matches("BEGIN MACRO").count(), 5);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod renderer;

pub use config::{DrillConfig, SAMPLE_CONFIG};
pub use error::ConfigError;
pub use layout::{render, DiameterGroup, DrillRecord, Geometry, SpindleId};
pub use output::DEFAULT_OUTPUT_FILE;
pub use renderer::{format_number, serialize, ProgramConfig};

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Errors that can occur while generating a program
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The configuration was rejected before rendering
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The program could not be written
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Validate, lay out and serialize a configuration into program text
///
/// # Example
///
/// ```rust
/// use cix_drill::{generate, DrillConfig};
///
/// let program = generate(&DrillConfig::default()).unwrap();
/// assert_eq!(
///     program,
///     "BEGIN PROGRAM\n    NAME=DrillTest\n    UNITS=MM\n\nEND PROGRAM\n"
/// );
/// ```
pub fn generate(config: &DrillConfig) -> Result<String, GenerateError> {
    config.validate()?;

    let records = render(&config.groups, &config.layout);
    debug!(
        "Rendered {} drill record(s) across {} group(s)",
        records.len(),
        config.groups.len()
    );

    Ok(serialize(&records, &config.program))
}

/// Write program text to `path`, replacing any existing file atomically
pub fn write_program(path: &Path, contents: &str) -> Result<(), GenerateError> {
    output::write_atomic(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate a program and write it to `path`.
///
/// The configuration is validated before the file is touched. Returns the
/// number of drill macros written.
pub fn generate_to_file(config: &DrillConfig, path: &Path) -> Result<usize, GenerateError> {
    let program = generate(config)?;
    write_program(path, &program)?;
    Ok(config.hole_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample() {
        let program = generate(&DrillConfig::sample()).unwrap();
        assert_eq!(program.matches("BEGIN MACRO").count(), 8);
        assert_eq!(program.matches("END MACRO").count(), 8);
        assert!(program.ends_with("END PROGRAM\n"));
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = DrillConfig::new(vec![DiameterGroup::new(-5.0, [1])]);
        let err = generate(&config).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Config(ConfigError::NonPositiveDiameter { .. })
        ));
    }

    #[test]
    fn test_generate_to_file_counts_macros() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.cix");
        let count = generate_to_file(&DrillConfig::sample(), &path).unwrap();
        assert_eq!(count, 8);
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.cix");
        let config = DrillConfig::new(vec![DiameterGroup::new(5.0, [0])]);
        assert!(generate_to_file(&config, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.cix");
        let err = write_program(&path, "text").unwrap_err();
        assert!(matches!(err, GenerateError::Write { .. }));
        assert!(err.to_string().contains("out.cix"));
    }
}

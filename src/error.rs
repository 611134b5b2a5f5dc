//! Error types for configuration loading and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// An invalid drill configuration.
///
/// Every variant is raised before anything is written, so a bad
/// configuration never produces an artifact.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("group {index}: diameter must be positive, got {diameter}")]
    NonPositiveDiameter { index: usize, diameter: f64 },

    #[error("group {index}: diameter must be finite, got {diameter}")]
    NonFiniteDiameter { index: usize, diameter: f64 },

    #[error("layout.{field} must be finite, got {value}")]
    NonFiniteGeometry { field: &'static str, value: f64 },

    #[error("group {index}: spindle ids start at 1, got 0")]
    ZeroSpindle { index: usize },

    #[error("diameter {diameter} appears in group {first} and again in group {second}")]
    DuplicateDiameter {
        diameter: f64,
        first: usize,
        second: usize,
    },

    #[error("program.{field} {reason}")]
    InvalidProgramField {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Toml(err) => err.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Errors without a source location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (Self::Toml(err), Some(span)) = (self, self.span()) else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid drill configuration")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

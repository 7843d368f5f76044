//! coordconv: conversions between Cartesian, polar, spherical and cylindrical coordinates
//!
//! The crate is split into a pure conversion core ([`coordinates`], [`convert`]),
//! a presentation layer ([`format`]) and an interactive console shell ([`shell`]).
//! All angles are expressed in degrees at the API boundary.

use thiserror::Error;

pub mod constants;
pub mod convert;
pub mod coordinates;
pub mod format;
pub mod shell;

// Re-export commonly used types
pub use convert::{convert, Outcome};
pub use coordinates::{Cartesian, CoordinateSystem, Cylindrical, Point, Polar, Spherical};
pub use format::{Formatter, OutputStyle};
pub use shell::{Shell, ShellConfig};

/// Main error type for the coordconv library
#[derive(Debug, Error)]
pub enum CoordError {
    /// A conversion was asked for an angle that has no defined value,
    /// e.g. the polar angle of the origin.
    #[error("{operation}: angle is undefined ({reason})")]
    UndefinedAngle {
        /// Name of the conversion that failed
        operation: &'static str,
        /// What made the angle undefined
        reason: String,
    },

    /// A radius came out infinite or NaN, e.g. when squaring huge
    /// components would leave the range of `f64`.
    #[error("{operation}: result is not a finite number ({reason})")]
    NonFinite {
        /// Name of the conversion that failed
        operation: &'static str,
        /// Which value was not finite
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for coordconv operations
pub type Result<T> = std::result::Result<T, CoordError>;

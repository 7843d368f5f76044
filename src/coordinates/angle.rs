//! # Angle Representation Module
//!
//! Angles enter and leave this crate in degrees, while the trigonometry in
//! `std` works in radians. The `Angle` type keeps the value in the unit it was
//! created with and only converts when the other unit is asked for, so a
//! user-entered `53.13` degrees is reported back exactly as `53.13`.
//!
//! ## Examples
//!
//! ```rust
//! use coordconv::coordinates::angle::Angle;
//!
//! let angle = Angle::from_degrees(90.0);
//! assert_eq!(angle.to_degrees(), 90.0);
//! assert!((angle.sin() - 1.0).abs() < 1e-15);
//! ```

use crate::constants::{DEG2RAD, DEG360, RAD2DEG};

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement stored in its original unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Angle between the positive x-axis and the point `(x, y)`
    ///
    /// Wraps `f64::atan2`, so the result lies in (-180°, 180°]. For the
    /// origin `atan2` returns 0, which is kept as the angle.
    pub fn atan2(y: f64, x: f64) -> Self {
        Angle::from_radians(y.atan2(x))
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was created from degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was created from radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the angle in degrees wrapped into [0, 360)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coordconv::coordinates::angle::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(-90.0).normalized_degrees(), 270.0);
    /// assert_eq!(Angle::from_degrees(720.0).normalized_degrees(), 0.0);
    /// ```
    pub fn normalized_degrees(&self) -> f64 {
        let wrapped = self.to_degrees().rem_euclid(DEG360);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if wrapped >= DEG360 {
            0.0
        } else {
            wrapped
        }
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }
}

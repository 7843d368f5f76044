//! # Cartesian Coordinate Module
//!
//! `Cartesian` is the hub of every supported conversion: the polar, spherical
//! and cylindrical types all convert into it, and it converts into each of
//! them. A 2D point is a `Cartesian` with `z = 0`.
//!
//! ## Examples
//!
//! ```rust
//! use coordconv::coordinates::Cartesian;
//!
//! let polar = Cartesian::planar(3.0, 4.0).to_polar().unwrap();
//! assert_eq!(polar.r, 5.0);
//! assert!((polar.theta - 53.13010235415598).abs() < 1e-12);
//! ```

use super::angle::Angle;
use super::{Cylindrical, Polar, Spherical};
use crate::{CoordError, Result};
use nalgebra::{SVector, Vector2, Vector3};
use serde::Serialize;

/// Rectangular coordinates `(x, y, z)`
///
/// Any finite values are accepted; nothing is normalized on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Euclidean norm computed on the vector divided by its largest component
///
/// Squaring the raw components overflows above ~1e154 and underflows below
/// ~1e-154; after scaling every component lies in [-1, 1].
fn scaled_norm<const D: usize>(vec: SVector<f64, D>) -> f64 {
    let scale = vec.amax();
    if scale == 0.0 {
        return 0.0;
    }
    scale * (vec / scale).norm()
}

/// Rejects a radius that left the range of `f64`
fn finite_radius(operation: &'static str, r: f64) -> Result<f64> {
    if r.is_finite() {
        Ok(r)
    } else {
        Err(CoordError::NonFinite {
            operation,
            reason: format!("r = {}", r),
        })
    }
}

impl Cartesian {
    /// Creates a point from its three components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian { x, y, z }
    }

    /// Creates a point on the x-y plane (`z = 0`)
    pub fn planar(x: f64, y: f64) -> Self {
        Cartesian { x, y, z: 0.0 }
    }

    /// Distance from the origin, `sqrt(x² + y² + z²)`
    ///
    /// Stays finite for every finite point whose true distance fits in `f64`.
    pub fn magnitude(&self) -> f64 {
        scaled_norm(self.to_vector3())
    }

    /// Distance from the z-axis, `sqrt(x² + y²)`
    pub fn planar_radius(&self) -> f64 {
        scaled_norm(Vector2::new(self.x, self.y))
    }

    /// Converts to polar coordinates, ignoring `z`
    ///
    /// - `r = sqrt(x² + y²)`
    /// - `theta = atan2(y, x)` in degrees, within (-180, 180]
    ///
    /// At the origin theta is reported as 0.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::NonFinite`] when the radius does not fit in `f64`
    /// (components near `f64::MAX`) or a component is not finite.
    pub fn to_polar(&self) -> Result<Polar> {
        Ok(Polar {
            r: finite_radius("cartesian to polar", self.planar_radius())?,
            theta: Angle::atan2(self.y, self.x).to_degrees(),
        })
    }

    /// Converts to spherical coordinates
    ///
    /// - `r = sqrt(x² + y² + z²)`
    /// - `theta = acos(z / r)` in degrees (angle from +z)
    /// - `phi = atan2(y, x)` in degrees
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::UndefinedAngle`] for the origin, where `z / r`
    /// has no value and the polar angle is undefined, and
    /// [`CoordError::NonFinite`] when the radius does not fit in `f64`.
    pub fn to_spherical(&self) -> Result<Spherical> {
        let r = finite_radius("cartesian to spherical", self.magnitude())?;
        if r == 0.0 {
            return Err(CoordError::UndefinedAngle {
                operation: "cartesian to spherical",
                reason: "r = 0, the polar angle of the origin has no value".to_string(),
            });
        }

        // |z| <= r in exact arithmetic; rounding can push the ratio past 1
        let cos_theta = (self.z / r).clamp(-1.0, 1.0);
        let theta = Angle::from_radians(cos_theta.acos());
        let phi = Angle::atan2(self.y, self.x);

        Ok(Spherical {
            r,
            theta: theta.to_degrees(),
            phi: phi.to_degrees(),
        })
    }

    /// Converts to cylindrical coordinates
    ///
    /// The radius and angle are the polar ones; `z` passes through unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Cartesian::to_polar`].
    pub fn to_cylindrical(&self) -> Result<Cylindrical> {
        Ok(Cylindrical {
            r: finite_radius("cartesian to cylindrical", self.planar_radius())?,
            theta: Angle::atan2(self.y, self.x).to_degrees(),
            z: self.z,
        })
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    #[test]
    fn test_cartesian_creation() {
        let coord = Cartesian::new(1.0, 2.0, 3.0);
        assert_eq!(coord.x, 1.0);
        assert_eq!(coord.y, 2.0);
        assert_eq!(coord.z, 3.0);

        let flat = Cartesian::planar(1.0, 2.0);
        assert_eq!(flat.z, 0.0);
    }

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Cartesian::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_relative_eq!(
            Cartesian::new(2.0, 3.0, 6.0).magnitude(),
            7.0,
            max_relative = 1e-14
        );
        assert_eq!(Cartesian::default().magnitude(), 0.0);
        assert_eq!(Cartesian::new(3.0, 4.0, 12.0).planar_radius(), 5.0);
    }

    #[test]
    fn test_to_polar() {
        let polar = Cartesian::planar(3.0, 4.0).to_polar().unwrap();
        assert_relative_eq!(polar.r, 5.0);
        assert_relative_eq!(polar.theta, 53.13010235415598, epsilon = 1e-12);

        let left = Cartesian::planar(-2.0, 0.0).to_polar().unwrap();
        assert_relative_eq!(left.r, 2.0);
        assert_relative_eq!(left.theta, 180.0);
    }

    #[test]
    fn test_to_polar_at_origin() {
        let polar = Cartesian::default().to_polar().unwrap();
        assert_eq!(polar.r, 0.0);
        assert_eq!(polar.theta, 0.0);
    }

    #[test]
    fn test_to_spherical() {
        let spherical = Cartesian::new(1.0, 1.0, 1.0).to_spherical().unwrap();
        assert_relative_eq!(spherical.r, 3.0_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(spherical.theta, 54.735610317245346, epsilon = 1e-12);
        assert_relative_eq!(spherical.phi, 45.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1.0, 0.0)]
    #[case(0.0, 1.0)]
    #[case(-3.0, 4.0)]
    #[case(-1e-3, -7.5)]
    fn test_planar_point_lies_on_equator(#[case] x: f64, #[case] y: f64) {
        let spherical = Cartesian::planar(x, y).to_spherical().unwrap();
        assert_abs_diff_eq!(spherical.theta, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_spherical_on_axis() {
        let north = Cartesian::new(0.0, 0.0, 2.0).to_spherical().unwrap();
        assert_eq!(north.r, 2.0);
        assert_eq!(north.theta, 0.0);
        assert_eq!(north.phi, 0.0);

        let south = Cartesian::new(0.0, 0.0, -2.0).to_spherical().unwrap();
        assert_relative_eq!(south.theta, 180.0);
    }

    #[test]
    fn test_to_spherical_at_origin_is_domain_error() {
        let result = Cartesian::default().to_spherical();
        assert!(matches!(
            result,
            Err(CoordError::UndefinedAngle {
                operation: "cartesian to spherical",
                ..
            })
        ));
    }

    #[test]
    fn test_to_cylindrical_keeps_height() {
        let cylindrical = Cartesian::new(0.0, -2.0, 7.5).to_cylindrical().unwrap();
        assert_relative_eq!(cylindrical.r, 2.0);
        assert_relative_eq!(cylindrical.theta, -90.0);
        assert_eq!(cylindrical.z, 7.5);
    }

    #[rstest]
    #[case(1e-200)]
    #[case(-1e-200)]
    #[case(1e200)]
    #[case(-1e200)]
    fn test_magnitude_survives_extreme_scales(#[case] scale: f64) {
        let coord = Cartesian::new(3.0 * scale, 4.0 * scale, 12.0 * scale);
        assert_relative_eq!(coord.magnitude(), 13.0 * scale.abs(), max_relative = 1e-14);
        assert_relative_eq!(coord.planar_radius(), 5.0 * scale.abs(), max_relative = 1e-14);
    }

    #[test]
    fn test_radius_beyond_f64_is_an_error() {
        let huge = Cartesian::new(f64::MAX, f64::MAX, 0.0);
        assert!(matches!(
            huge.to_polar(),
            Err(CoordError::NonFinite {
                operation: "cartesian to polar",
                ..
            })
        ));
        assert!(matches!(
            huge.to_spherical(),
            Err(CoordError::NonFinite { .. })
        ));
        assert!(matches!(
            huge.to_cylindrical(),
            Err(CoordError::NonFinite {
                operation: "cartesian to cylindrical",
                ..
            })
        ));
    }

    #[test]
    fn test_vector3_conversion() {
        let vec = Cartesian::new(1.0, 2.0, 3.0).to_vector3();
        assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    }
}

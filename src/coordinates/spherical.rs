//! Spherical coordinates
//!
//! Uses the physics convention: `theta` is the polar angle measured from the
//! +z axis (0° at the north pole, 90° on the x-y plane) and `phi` is the
//! azimuth measured from +x towards +y. Both are in degrees and neither is
//! range-checked.

use super::angle::Angle;
use super::Cartesian;
use serde::Serialize;

/// Spherical coordinates `(r, theta, phi)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Spherical {
    pub r: f64,
    /// Polar angle from +z, degrees
    pub theta: f64,
    /// Azimuth from +x, degrees
    pub phi: f64,
}

impl Spherical {
    /// Creates a point from a radius, the polar angle and the azimuth (degrees)
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Spherical { r, theta, phi }
    }

    /// Converts to Cartesian coordinates
    ///
    /// - `x = r * sin(theta) * cos(phi)`
    /// - `y = r * sin(theta) * sin(phi)`
    /// - `z = r * cos(theta)`
    pub fn to_cartesian(&self) -> Cartesian {
        let theta = Angle::from_degrees(self.theta);
        let phi = Angle::from_degrees(self.phi);
        let sin_theta = theta.sin();

        Cartesian::new(
            self.r * sin_theta * phi.cos(),
            self.r * sin_theta * phi.sin(),
            self.r * theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_spherical_to_cartesian() {
        let cartesian = Spherical::new(5.0, 45.0, 45.0).to_cartesian();
        assert_abs_diff_eq!(cartesian.x, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(cartesian.y, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(cartesian.z, 3.5355339059327378, epsilon = 1e-12);
    }

    #[test]
    fn test_pole_has_no_planar_component() {
        let cartesian = Spherical::new(3.0, 0.0, 123.0).to_cartesian();
        assert_abs_diff_eq!(cartesian.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(cartesian.y, 0.0, epsilon = 1e-15);
        assert_eq!(cartesian.z, 3.0);
    }

    #[test]
    fn test_round_trip_through_cartesian() {
        let original = Spherical::new(2.0, 60.0, -30.0);
        let back = original.to_cartesian().to_spherical().unwrap();
        assert_abs_diff_eq!(back.r, original.r, epsilon = 1e-12);
        assert_abs_diff_eq!(back.theta, original.theta, epsilon = 1e-9);
        assert_abs_diff_eq!(back.phi, original.phi, epsilon = 1e-9);
    }
}

//! Cylindrical coordinates: a polar radius and angle plus a height along z

use super::angle::Angle;
use super::Cartesian;
use serde::Serialize;

/// Cylindrical coordinates `(r, theta, z)`, theta in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Cylindrical {
    pub r: f64,
    pub theta: f64,
    /// Height along the z-axis
    pub z: f64,
}

impl Cylindrical {
    /// Creates a point from a radius, an angle in degrees and a height
    pub fn new(r: f64, theta: f64, z: f64) -> Self {
        Cylindrical { r, theta, z }
    }

    /// Converts to Cartesian coordinates; the height becomes `z` unchanged
    pub fn to_cartesian(&self) -> Cartesian {
        let theta = Angle::from_degrees(self.theta);
        Cartesian::new(self.r * theta.cos(), self.r * theta.sin(), self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cylindrical_to_cartesian() {
        let cartesian = Cylindrical::new(5.0, 45.0, 10.0).to_cartesian();
        assert_abs_diff_eq!(cartesian.x, 3.5355339059327378, epsilon = 1e-12);
        assert_abs_diff_eq!(cartesian.y, 3.5355339059327378, epsilon = 1e-12);
        assert_eq!(cartesian.z, 10.0);
    }

    #[test]
    fn test_round_trip_through_cartesian() {
        let original = Cylindrical::new(4.0, 135.0, -2.0);
        let back = original.to_cartesian().to_cylindrical().unwrap();
        assert_abs_diff_eq!(back.r, original.r, epsilon = 1e-12);
        assert_abs_diff_eq!(back.theta, original.theta, epsilon = 1e-9);
        assert_eq!(back.z, original.z);
    }
}

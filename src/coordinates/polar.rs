//! Polar coordinates on the x-y plane

use super::angle::Angle;
use super::Cartesian;
use serde::Serialize;

/// Polar coordinates `(r, theta)`, theta in degrees from the +x axis
///
/// A negative radius is accepted and simply mirrors the point through the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Polar {
    pub r: f64,
    pub theta: f64,
}

impl Polar {
    /// Creates a point from a radius and an angle in degrees
    pub fn new(r: f64, theta: f64) -> Self {
        Polar { r, theta }
    }

    /// Converts to Cartesian coordinates on the x-y plane
    ///
    /// - `x = r * cos(theta)`
    /// - `y = r * sin(theta)`
    pub fn to_cartesian(&self) -> Cartesian {
        let theta = Angle::from_degrees(self.theta);
        Cartesian::planar(self.r * theta.cos(), self.r * theta.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_polar_to_cartesian() {
        let cartesian = Polar::new(2.0, 90.0).to_cartesian();
        assert_abs_diff_eq!(cartesian.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(cartesian.y, 2.0, epsilon = 1e-15);
        assert_eq!(cartesian.z, 0.0);
    }

    #[test]
    fn test_negative_radius_mirrors_point() {
        let cartesian = Polar::new(-1.0, 0.0).to_cartesian();
        assert_abs_diff_eq!(cartesian.x, -1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(cartesian.y, 0.0, epsilon = 1e-15);
    }

    #[rstest]
    #[case(1.0, 0.0)]
    #[case(5.0, 53.13)]
    #[case(2.5, 179.0)]
    #[case(0.75, 270.0)]
    #[case(10.0, 359.5)]
    fn test_round_trip_recovers_radius_and_angle(#[case] r: f64, #[case] theta: f64) {
        let back = Polar::new(r, theta).to_cartesian().to_polar().unwrap();
        assert_abs_diff_eq!(back.r, r, epsilon = 1e-12);
        assert_abs_diff_eq!(
            Angle::from_degrees(back.theta).normalized_degrees(),
            theta,
            epsilon = 1e-9
        );
    }
}

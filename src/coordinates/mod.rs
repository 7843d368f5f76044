pub mod angle;
pub mod cartesian;
pub mod cylindrical;
pub mod polar;
pub mod spherical;

pub use cartesian::Cartesian;
pub use cylindrical::Cylindrical;
pub use polar::Polar;
pub use spherical::Spherical;

use crate::constants::{MENU_FIRST, MENU_LAST};
use serde::Serialize;
use std::fmt;

/// The four coordinate systems offered by the menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    Cartesian = 1,
    Polar = 2,
    Spherical = 3,
    Cylindrical = 4,
}

impl CoordinateSystem {
    /// All systems in menu order
    pub const ALL: [CoordinateSystem; 4] = [
        CoordinateSystem::Cartesian,
        CoordinateSystem::Polar,
        CoordinateSystem::Spherical,
        CoordinateSystem::Cylindrical,
    ];

    /// Number of the system in the menu
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Labels of the values the user has to enter for a point in this system
    ///
    /// Cartesian input is planar; the optional `z` is asked for separately.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            CoordinateSystem::Cartesian => &["x", "y"],
            CoordinateSystem::Polar => &["r", "theta (in degrees)"],
            CoordinateSystem::Spherical => &["r", "theta (in degrees)", "phi (in degrees)"],
            CoordinateSystem::Cylindrical => &["r", "theta (in degrees)", "height"],
        }
    }

    /// Whether points in this system carry a third dimension
    pub fn is_3d(self) -> bool {
        matches!(
            self,
            CoordinateSystem::Spherical | CoordinateSystem::Cylindrical
        )
    }
}

impl TryFrom<u32> for CoordinateSystem {
    type Error = u32;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        if (MENU_FIRST..=MENU_LAST).contains(&number) {
            Ok(Self::ALL[(number - MENU_FIRST) as usize])
        } else {
            Err(number)
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateSystem::Cartesian => "Cartesian",
            CoordinateSystem::Polar => "Polar",
            CoordinateSystem::Spherical => "Spherical",
            CoordinateSystem::Cylindrical => "Cylindrical",
        };
        f.write_str(name)
    }
}

/// A point in any of the four systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum Point {
    Cartesian(Cartesian),
    Polar(Polar),
    Spherical(Spherical),
    Cylindrical(Cylindrical),
}

impl Point {
    /// The system this point is expressed in
    pub fn system(&self) -> CoordinateSystem {
        match self {
            Point::Cartesian(_) => CoordinateSystem::Cartesian,
            Point::Polar(_) => CoordinateSystem::Polar,
            Point::Spherical(_) => CoordinateSystem::Spherical,
            Point::Cylindrical(_) => CoordinateSystem::Cylindrical,
        }
    }

    /// Component values paired with their output labels, in display order
    pub fn components(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Point::Cartesian(c) => vec![("x", c.x), ("y", c.y), ("z", c.z)],
            Point::Polar(p) => vec![("r", p.r), ("theta (in degrees)", p.theta)],
            Point::Spherical(s) => vec![
                ("r", s.r),
                ("theta (in degrees)", s.theta),
                ("phi (in degrees)", s.phi),
            ],
            Point::Cylindrical(c) => vec![("r", c.r), ("theta (in degrees)", c.theta), ("z", c.z)],
        }
    }

    /// Applies `f` to every component, keeping the system
    pub fn map(self, f: impl Fn(f64) -> f64) -> Point {
        match self {
            Point::Cartesian(c) => Cartesian::new(f(c.x), f(c.y), f(c.z)).into(),
            Point::Polar(p) => Polar::new(f(p.r), f(p.theta)).into(),
            Point::Spherical(s) => Spherical::new(f(s.r), f(s.theta), f(s.phi)).into(),
            Point::Cylindrical(c) => Cylindrical::new(f(c.r), f(c.theta), f(c.z)).into(),
        }
    }
}

impl From<Cartesian> for Point {
    fn from(c: Cartesian) -> Self {
        Point::Cartesian(c)
    }
}

impl From<Polar> for Point {
    fn from(p: Polar) -> Self {
        Point::Polar(p)
    }
}

impl From<Spherical> for Point {
    fn from(s: Spherical) -> Self {
        Point::Spherical(s)
    }
}

impl From<Cylindrical> for Point {
    fn from(c: Cylindrical) -> Self {
        Point::Cylindrical(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, CoordinateSystem::Cartesian)]
    #[case(2, CoordinateSystem::Polar)]
    #[case(3, CoordinateSystem::Spherical)]
    #[case(4, CoordinateSystem::Cylindrical)]
    fn test_menu_numbers(#[case] number: u32, #[case] system: CoordinateSystem) {
        assert_eq!(CoordinateSystem::try_from(number), Ok(system));
        assert_eq!(system.number(), number);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(42)]
    fn test_out_of_range_menu_numbers(#[case] number: u32) {
        assert_eq!(CoordinateSystem::try_from(number), Err(number));
    }

    #[test]
    fn test_fields_match_point_components() {
        assert_eq!(CoordinateSystem::Polar.fields().len(), 2);
        assert_eq!(CoordinateSystem::Spherical.fields().len(), 3);
        assert_eq!(CoordinateSystem::Cylindrical.fields()[2], "height");
        assert!(!CoordinateSystem::Cartesian.is_3d());
        assert!(CoordinateSystem::Cylindrical.is_3d());
    }

    #[test]
    fn test_point_system() {
        let point = Point::from(Spherical::new(1.0, 2.0, 3.0));
        assert_eq!(point.system(), CoordinateSystem::Spherical);
        assert_eq!(point.components()[2], ("phi (in degrees)", 3.0));
    }

    #[test]
    fn test_point_map_keeps_system() {
        let doubled = Point::from(Polar::new(1.5, -20.0)).map(|v| v * 2.0);
        assert_eq!(doubled, Point::Polar(Polar::new(3.0, -40.0)));
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = CoordinateSystem::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["Cartesian", "Polar", "Spherical", "Cylindrical"]);
    }
}

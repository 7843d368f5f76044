//! The coordinate converter
//!
//! Six conversions are supported: Cartesian into each of the other three
//! systems, and each of those back into Cartesian. [`convert`] dispatches a
//! point to the matching conversion and echoes the input unchanged for every
//! other (source, target) pair, including same-system pairs. Polar to
//! spherical, spherical to cylindrical and the like are not wired up.

use crate::coordinates::{Cartesian, CoordinateSystem, Cylindrical, Point, Polar, Spherical};
use crate::Result;
use log::debug;
use serde::Serialize;

/// Result of dispatching a point to a target system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    /// The pair is supported and `to` holds the converted point
    Converted { from: Point, to: Point },
    /// The pair has no conversion; the input is passed through untouched
    Echo { point: Point },
}

impl Outcome {
    /// The point that should be shown to the user
    pub fn point(&self) -> &Point {
        match self {
            Outcome::Converted { to, .. } => to,
            Outcome::Echo { point } => point,
        }
    }
}

/// Radius and angle (degrees) of the planar point `(x, y)`
///
/// Fails with [`crate::CoordError::NonFinite`] when the radius overflows `f64`.
pub fn cartesian_to_polar(x: f64, y: f64) -> Result<Polar> {
    Cartesian::planar(x, y).to_polar()
}

/// Planar point of a polar pair; the result has `z = 0`
pub fn polar_to_cartesian(polar: Polar) -> Cartesian {
    polar.to_cartesian()
}

/// Radius, polar angle from +z and azimuth of `(x, y, z)`, angles in degrees
///
/// Fails with [`crate::CoordError::UndefinedAngle`] at the origin and with
/// [`crate::CoordError::NonFinite`] when the radius overflows `f64`.
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> Result<Spherical> {
    Cartesian::new(x, y, z).to_spherical()
}

/// Rectangular point of a spherical triple
pub fn spherical_to_cartesian(spherical: Spherical) -> Cartesian {
    spherical.to_cartesian()
}

/// Polar radius and angle of `(x, y)` with `z` kept as the height
pub fn cartesian_to_cylindrical(x: f64, y: f64, z: f64) -> Result<Cylindrical> {
    Cartesian::new(x, y, z).to_cylindrical()
}

/// Rectangular point of a cylindrical triple; the height becomes `z`
pub fn cylindrical_to_cartesian(cylindrical: Cylindrical) -> Cartesian {
    cylindrical.to_cartesian()
}

/// Whether a conversion exists from `source` to `target`
pub fn is_supported(source: CoordinateSystem, target: CoordinateSystem) -> bool {
    use CoordinateSystem as Sys;
    matches!(
        (source, target),
        (Sys::Cartesian, Sys::Polar | Sys::Spherical | Sys::Cylindrical)
            | (Sys::Polar | Sys::Spherical | Sys::Cylindrical, Sys::Cartesian)
    )
}

/// Converts `point` into `target`, or echoes it when the pair is unsupported
///
/// # Errors
///
/// Propagates the domain error of Cartesian to spherical at the origin and
/// the [`crate::CoordError::NonFinite`] error of the Cartesian conversions.
pub fn convert(target: CoordinateSystem, point: Point) -> Result<Outcome> {
    let converted: Option<Point> = match (point, target) {
        (Point::Cartesian(c), CoordinateSystem::Polar) => {
            Some(cartesian_to_polar(c.x, c.y)?.into())
        }
        (Point::Cartesian(c), CoordinateSystem::Spherical) => {
            Some(cartesian_to_spherical(c.x, c.y, c.z)?.into())
        }
        (Point::Cartesian(c), CoordinateSystem::Cylindrical) => {
            Some(cartesian_to_cylindrical(c.x, c.y, c.z)?.into())
        }
        (Point::Polar(p), CoordinateSystem::Cartesian) => Some(polar_to_cartesian(p).into()),
        (Point::Spherical(s), CoordinateSystem::Cartesian) => {
            Some(spherical_to_cartesian(s).into())
        }
        (Point::Cylindrical(c), CoordinateSystem::Cartesian) => {
            Some(cylindrical_to_cartesian(c).into())
        }
        _ => None,
    };

    let outcome = match converted {
        Some(to) => Outcome::Converted { from: point, to },
        None => Outcome::Echo { point },
    };
    debug!("{} -> {}: {:?}", point.system(), target, outcome);
    Ok(outcome)
}

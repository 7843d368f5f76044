//! Presentation of conversion outcomes
//!
//! The conversion core returns plain numbers; this module turns them into the
//! lines the shell prints. Converted values are shown with a fixed number of
//! decimal digits, echoed inputs are shown as entered.

use crate::constants::DEFAULT_PRECISION;
use crate::convert::Outcome;
use crate::coordinates::Point;
use crate::{CoordError, Result};
use serde_json::json;

// Echoed magnitudes outside [EXPONENT_BELOW, EXPONENT_ABOVE) print as `1e20`
const EXPONENT_ABOVE: f64 = 1e15;
const EXPONENT_BELOW: f64 = 1e-4;

/// Output style of the formatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputStyle {
    /// `r = 5.00, theta (in degrees) = 53.13`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Renders outcomes with a fixed number of decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    precision: usize,
    style: OutputStyle,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new(DEFAULT_PRECISION, OutputStyle::Text)
    }
}

impl Formatter {
    /// Creates a formatter printing `precision` decimal digits
    ///
    /// The precision is used as given. Input read by the shell is bounded
    /// by [`crate::constants::MAX_PRECISION`] before it gets here.
    pub fn new(precision: usize, style: OutputStyle) -> Self {
        Formatter { precision, style }
    }

    /// Number of decimal digits of converted values
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }

    /// Formats a value with exactly `precision` decimal digits
    ///
    /// A value that rounds to zero is printed without its sign.
    ///
    /// ```rust
    /// use coordconv::format::{Formatter, OutputStyle};
    ///
    /// let formatter = Formatter::new(1, OutputStyle::Text);
    /// assert_eq!(formatter.fixed(1.2246467991473532e-16), "0.0");
    /// assert_eq!(formatter.fixed(-0.04), "0.0");
    /// assert_eq!(formatter.fixed(-0.05), "-0.1");
    /// ```
    pub fn fixed(&self, value: f64) -> String {
        let text = format!("{:.*}", self.precision, value);
        match text.strip_prefix('-') {
            Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => {
                unsigned.to_string()
            }
            _ => text,
        }
    }

    /// Rounds a value to `precision` decimal digits
    pub fn round(&self, value: f64) -> f64 {
        // Going through the decimal text keeps the rounding identical to `fixed`
        self.fixed(value).parse().unwrap_or(value)
    }

    /// Renders one outcome as a single line (without trailing newline)
    pub fn render(&self, outcome: &Outcome) -> Result<String> {
        match self.style {
            OutputStyle::Text => Ok(self.render_text(outcome)),
            OutputStyle::Json => self.render_json(outcome),
        }
    }

    /// Renders an error so it can be shown in place of a result
    pub fn render_error(&self, err: &CoordError) -> String {
        match self.style {
            OutputStyle::Text => format!("error: {}", err),
            OutputStyle::Json => json!({ "kind": "error", "message": err.to_string() }).to_string(),
        }
    }

    fn render_text(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Converted { from, to } => {
                let mut components = to.components();
                // Polar input is planar, so its Cartesian result has no z to show
                if matches!(to, Point::Cartesian(_)) && !from.system().is_3d() {
                    components.truncate(2);
                }
                join(components.into_iter().map(|(label, v)| (label, self.fixed(v))))
            }
            Outcome::Echo { point } => join(
                echo_components(point)
                    .into_iter()
                    .map(|(label, v)| (label, shortest(v))),
            ),
        }
    }

    fn render_json(&self, outcome: &Outcome) -> Result<String> {
        let rounded = match *outcome {
            Outcome::Converted { from, to } => Outcome::Converted {
                from,
                to: to.map(|v| self.round(v)),
            },
            echo => echo,
        };
        Ok(serde_json::to_string(&rounded)?)
    }
}

/// Labels used when an unsupported pair echoes its input
fn echo_components(point: &Point) -> Vec<(&'static str, f64)> {
    match *point {
        Point::Cartesian(c) if c.z == 0.0 => vec![("x", c.x), ("y", c.y)],
        Point::Cylindrical(c) => vec![("r", c.r), ("theta (in degrees)", c.theta), ("height", c.z)],
        other => other.components(),
    }
}

/// Shortest round-trip text of a value, switching to exponent form for
/// very large and very small magnitudes
fn shortest(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}

fn join(parts: impl Iterator<Item = (&'static str, String)>) -> String {
    parts
        .map(|(label, value)| format!("{} = {}", label, value))
        .collect::<Vec<_>>()
        .join(", ")
}

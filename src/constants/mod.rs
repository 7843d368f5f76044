//! Constants shared by the conversion core and the shell

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a complete circle
pub const DEG360: f64 = 360.0;

// Menu
/// Lowest valid coordinate system number in the menu
pub const MENU_FIRST: u32 = 1;
/// Highest valid coordinate system number in the menu
pub const MENU_LAST: u32 = 4;

// Output
/// Largest number of decimal digits accepted at the prompt and on the command line
///
/// A sanity bound on output length, not a limit of `f64`: small values such as
/// `1e-12` need more than 17 decimals to show their significant digits.
pub const MAX_PRECISION: usize = 100;
/// Precision used when none is given, e.g. for JSON output in scripted runs
pub const DEFAULT_PRECISION: usize = 2;

/// Words that end the interactive session at any prompt
pub const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

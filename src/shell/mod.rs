//! Interactive console shell
//!
//! Each round asks for a source system, a target system, the source values
//! and a precision, then prints the converted (or echoed) point. Invalid lines
//! are reported and asked again. The shell stops at end of input or when a
//! quit word (`q`, `quit`, `exit`) is entered at any prompt.
//!
//! The shell is generic over its reader and writer, so a whole session can be
//! driven from a string:
//!
//! ```rust
//! use coordconv::{Shell, ShellConfig};
//!
//! let input = "1\n2\n3\n4\n2\n";
//! let mut output = Vec::new();
//! let rounds = Shell::new(input.as_bytes(), &mut output, ShellConfig::default())
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(rounds, 1);
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("r = 5.00, theta (in degrees) = 53.13"));
//! ```

pub mod input;

use crate::convert::convert;
use crate::coordinates::{Cartesian, CoordinateSystem, Cylindrical, Point, Polar, Spherical};
use crate::format::{Formatter, OutputStyle};
use crate::Result;
use input::InputError;
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// Settings taken from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// Fixed precision; when `None` the user is asked every round
    pub precision: Option<usize>,
    pub style: OutputStyle,
    /// Stop after the first completed conversion
    pub once: bool,
}

/// Prompt loop reading from `R` and writing prompts and results to `W`
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W, config: ShellConfig) -> Self {
        Shell {
            reader,
            writer,
            config,
        }
    }

    /// Runs rounds until input ends or the user quits
    ///
    /// Returns the number of completed conversions.
    pub fn run(&mut self) -> Result<usize> {
        info!("Starting coordinate conversion shell ({:?})", self.config);
        let mut rounds = 0;

        while let ControlFlow::Continue(()) = self.round()? {
            rounds += 1;
            if self.config.once {
                break;
            }
        }

        info!("Shell finished after {} conversion(s)", rounds);
        Ok(rounds)
    }

    /// Runs one conversion; `Break` means the session is over
    pub fn round(&mut self) -> Result<ControlFlow<()>> {
        let Some(source) = self.choose_system("convert from")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(target) = self.choose_system("convert to")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(point) = self.read_point(source, target)? else {
            return Ok(ControlFlow::Break(()));
        };
        let precision = match self.config.precision {
            Some(precision) => precision,
            None => match self.ask("Set precision", input::parse_precision)? {
                Some(precision) => precision,
                None => return Ok(ControlFlow::Break(())),
            },
        };

        let formatter = Formatter::new(precision, self.config.style);
        let line = match convert(target, point) {
            Ok(outcome) => formatter.render(&outcome)?,
            Err(err) => {
                warn!("Conversion {} -> {} failed: {}", source, target, err);
                formatter.render_error(&err)
            }
        };
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;

        Ok(ControlFlow::Continue(()))
    }

    /// Gives back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn choose_system(&mut self, purpose: &str) -> Result<Option<CoordinateSystem>> {
        let mut menu = format!("Choose the coordinate system to {}: ", purpose);
        for system in CoordinateSystem::ALL {
            menu.push_str(&format!("\n{}: {}", system.number(), system));
        }
        self.ask(&menu, input::parse_menu_choice)
    }

    fn read_point(
        &mut self,
        source: CoordinateSystem,
        target: CoordinateSystem,
    ) -> Result<Option<Point>> {
        let mut values = Vec::with_capacity(3);
        for field in source.fields() {
            match self.ask(&format!("Enter {}", field), input::parse_number)? {
                Some(value) => values.push(value),
                None => return Ok(None),
            }
        }

        let point = match source {
            CoordinateSystem::Cartesian => {
                // Only a 3D target makes use of z
                let z = if target.is_3d() {
                    match self.ask("Enter z (leave empty for 0)", |line| {
                        input::parse_optional_number(line, 0.0)
                    })? {
                        Some(z) => z,
                        None => return Ok(None),
                    }
                } else {
                    0.0
                };
                Point::from(Cartesian::new(values[0], values[1], z))
            }
            CoordinateSystem::Polar => Point::from(Polar::new(values[0], values[1])),
            CoordinateSystem::Spherical => {
                Point::from(Spherical::new(values[0], values[1], values[2]))
            }
            CoordinateSystem::Cylindrical => {
                Point::from(Cylindrical::new(values[0], values[1], values[2]))
            }
        };
        debug!("Read {:?}", point);
        Ok(Some(point))
    }

    /// Prints `prompt` and reads lines until `parse` accepts one
    ///
    /// `None` means input ended or the user asked to quit.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<Option<T>> {
        loop {
            writeln!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("End of input");
                return Ok(None);
            }
            if input::is_quit(&line) {
                debug!("Quit requested");
                return Ok(None);
            }

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    warn!("Rejected input: {}", err);
                    writeln!(self.writer, "{}", err)?;
                }
            }
        }
    }
}

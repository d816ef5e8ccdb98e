#![warn(missing_docs)]

//! 2D geometry primitives for the snowflake generator.
//!
//! Provides a mutable [`Point`] value type, an ordered [`Polyline`] of
//! points with the in-place transforms used during snowflake assembly,
//! and the [`Surface`] trait consumed by renderers.
//!
//! # Example
//!
//! ```
//! use snowflake_geom::{DrawCommand, Point, Polyline};
//!
//! let mut line = Polyline::new();
//! line.append(Point::new(1.0, 2.0));
//! line.append(Point::new(3.0, 4.0));
//!
//! assert_eq!(line.to_gcode(), "G1 X1.00 Y2.00\nG1 X3.00 Y4.00\n");
//!
//! let mut commands: Vec<DrawCommand> = Vec::new();
//! line.draw(&mut commands);
//! assert_eq!(commands.len(), 4);
//! ```

pub mod point;
pub mod polyline;
pub mod surface;

pub use point::{format_coord, Point, GCODE_PRECISION};
pub use polyline::Polyline;
pub use surface::{DrawCommand, Surface};

/// Convert degrees to radians.
pub fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

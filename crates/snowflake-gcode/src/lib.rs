#![warn(missing_docs)]

//! G-code generation for snowflake outlines.
//!
//! Two levels of output are available:
//!
//! - [`Polyline::to_gcode`](snowflake_geom::Polyline::to_gcode) gives the bare
//!   `G1 X.. Y..` line per point.
//! - [`generate_gcode`] wraps those lines into a complete program with the
//!   flavor's start/end sequences, tool lift and lower moves, and feed rates.
//!
//! # Example
//!
//! ```
//! use snowflake_geom::{Point, Polyline};
//! use snowflake_gcode::{generate_gcode, GcodeFlavor, GcodeSettings};
//!
//! let outline = Polyline::from_points(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(20.0, 0.0),
//!     Point::new(10.0, 15.0),
//! ]);
//!
//! let settings = GcodeSettings {
//!     flavor: GcodeFlavor::Grbl,
//!     origin: (100.0, 100.0),
//!     ..Default::default()
//! };
//!
//! let program = generate_gcode(&outline, &settings)?;
//! assert!(program.contains("G1 X120.00 Y100.00\n"));
//! # Ok::<(), snowflake_gcode::GcodeError>(())
//! ```

pub mod error;
pub mod flavor;
pub mod gcode;

pub use error::{GcodeError, Result};
pub use flavor::GcodeFlavor;
pub use gcode::{generate_gcode, GcodeGenerator, GcodeSettings};

#![warn(missing_docs)]

//! Parametric snowflake outline generator.
//!
//! Builds an n-armed, mirror-symmetric snowflake outline as a single
//! closed [`Polyline`], ready to be drawn on a [`Surface`] or exported as
//! G-code or SVG.
//!
//! # Example
//!
//! ```
//! use snowflake::{SnowflakeBuilder, SnowflakeOptions};
//!
//! let options = SnowflakeOptions::from_toml_str("numArms = 6\nnumSpikes = 3\n")?;
//! let flake = SnowflakeBuilder::from_options(options).build_seeded(2024)?;
//!
//! let gcode = flake.to_gcode();
//! assert_eq!(gcode.lines().next(), Some("G1 X3.00 Y1.50"));
//! assert_eq!(gcode.lines().count(), 6 * flake.points_per_arm());
//! # Ok::<(), snowflake::SnowflakeError>(())
//! ```

pub mod builder;
pub mod error;
pub mod export;
pub mod options;
pub mod snowflake;
pub mod source;

pub use builder::{SnowflakeBuilder, SPIKE_ANGLE_DEGREES, TIP_EXTENSION};
pub use error::{Result, SnowflakeError};
pub use options::{SnowflakeOptions, MAX_RANDOM_SPIKES, MIN_RANDOM_SPIKES};
pub use snowflake::Snowflake;
pub use source::{RangeSource, Sequence};

pub use snowflake_geom::{DrawCommand, Point, Polyline, Surface};

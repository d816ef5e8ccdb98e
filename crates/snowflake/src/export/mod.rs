//! Exporters that consume a finished outline.
//!
//! G-code output lives in the `snowflake-gcode` crate; this module holds
//! the vector formats.

pub mod svg;

pub use svg::{to_svg, SvgPath, SvgSettings};

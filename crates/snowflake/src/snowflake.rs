//! The assembled snowflake.

use snowflake_geom::{Polyline, Surface};

use crate::builder::SnowflakeBuilder;
use crate::error::Result;
use crate::options::SnowflakeOptions;
use crate::source::RangeSource;

/// A fully constructed snowflake outline.
///
/// Geometry is computed once at construction; afterwards the snowflake is
/// read-only and only its path is exposed.
#[derive(Debug, Clone)]
pub struct Snowflake {
    options: SnowflakeOptions,
    num_spikes: u32,
    gap_size: f64,
    path: Polyline,
}

impl Snowflake {
    /// Build a snowflake using the thread-local random generator.
    pub fn new(options: SnowflakeOptions) -> Result<Self> {
        SnowflakeBuilder::from_options(options).build()
    }

    /// Build a snowflake drawing random values from `source`.
    pub fn with_source<S: RangeSource + ?Sized>(
        options: SnowflakeOptions,
        source: &mut S,
    ) -> Result<Self> {
        SnowflakeBuilder::from_options(options).build_with(source)
    }

    pub(crate) fn from_parts(
        options: SnowflakeOptions,
        num_spikes: u32,
        gap_size: f64,
        path: Polyline,
    ) -> Self {
        Self {
            options,
            num_spikes,
            gap_size,
            path,
        }
    }

    /// Options used, with the spike count resolved.
    pub fn options(&self) -> &SnowflakeOptions {
        &self.options
    }

    /// Number of arms.
    pub fn num_arms(&self) -> u32 {
        self.options.num_arms
    }

    /// Spikes per half-arm.
    pub fn num_spikes(&self) -> u32 {
        self.num_spikes
    }

    /// Half the per-spike length budget.
    pub fn gap_size(&self) -> f64 {
        self.gap_size
    }

    /// Points in one complete (mirrored and tipped) arm.
    pub fn points_per_arm(&self) -> usize {
        6 * self.num_spikes as usize + 5
    }

    /// The closed outline.
    pub fn path(&self) -> &Polyline {
        &self.path
    }

    /// Take ownership of the outline.
    pub fn into_path(self) -> Polyline {
        self.path
    }

    /// Trace the outline on `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.path.draw(surface);
    }

    /// One `G1 X.. Y..` line per outline point.
    pub fn to_gcode(&self) -> String {
        self.path.to_gcode()
    }
}

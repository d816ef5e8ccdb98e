//! Complete G-code programs for a single closed outline.

use serde::{Deserialize, Serialize};
use snowflake_geom::{format_coord, Point, Polyline, GCODE_PRECISION};
use tracing::debug;

use crate::error::{GcodeError, Result};
use crate::flavor::GcodeFlavor;

/// Settings for program generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeSettings {
    /// G-code dialect for start/end sequences.
    pub flavor: GcodeFlavor,
    /// Drawing feed rate (mm/min).
    pub feed_rate: f64,
    /// Travel feed rate (mm/min).
    pub travel_rate: f64,
    /// Z height while drawing (mm).
    pub draw_z: f64,
    /// Z height while travelling (mm).
    pub travel_z: f64,
    /// Offset added to every point, e.g. the bed center (mm).
    pub origin: (f64, f64),
    /// Return to the first point so the outline is closed.
    pub close_loop: bool,
    /// Emit a leading comment block describing the job.
    pub comments: bool,
}

impl Default for GcodeSettings {
    fn default() -> Self {
        Self {
            flavor: GcodeFlavor::Marlin,
            feed_rate: 1500.0,
            travel_rate: 3000.0,
            draw_z: 0.0,
            travel_z: 5.0,
            origin: (0.0, 0.0),
            close_loop: true,
            comments: true,
        }
    }
}

impl GcodeSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [("feed_rate", self.feed_rate), ("travel_rate", self.travel_rate)] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(GcodeError::InvalidSettings(format!(
                    "{name} must be a positive number, got {rate}"
                )));
            }
        }
        for (name, value) in [
            ("draw_z", self.draw_z),
            ("travel_z", self.travel_z),
            ("origin.x", self.origin.0),
            ("origin.y", self.origin.1),
        ] {
            if !value.is_finite() {
                return Err(GcodeError::InvalidSettings(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.travel_z < self.draw_z {
            return Err(GcodeError::InvalidSettings(
                "travel_z must not be below draw_z".into(),
            ));
        }
        Ok(())
    }
}

/// Incrementally writes a G-code program.
pub struct GcodeGenerator {
    settings: GcodeSettings,
    output: String,
}

impl GcodeGenerator {
    /// Create a generator after validating `settings`.
    pub fn new(settings: GcodeSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            output: String::new(),
        })
    }

    /// Settings in use.
    pub fn settings(&self) -> &GcodeSettings {
        &self.settings
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn coord(&self, value: f64) -> String {
        format_coord(value, GCODE_PRECISION)
    }

    /// Write the job comments and the flavor's start sequence.
    pub fn header(&mut self, polyline: &Polyline) {
        if self.settings.comments {
            self.line("; snowflake outline");
            let flavor = format!("; flavor: {:?}", self.settings.flavor);
            self.line(&flavor);
            let points = format!("; points: {}", polyline.len());
            self.line(&points);
        }
        let start = self.settings.flavor.start_gcode();
        self.output.push_str(start);
    }

    /// Lift the tool and travel to `point`.
    pub fn travel_to(&mut self, point: &Point) {
        let lift = format!(
            "G0 Z{} F{}",
            self.coord(self.settings.travel_z),
            self.coord(self.settings.travel_rate)
        );
        self.line(&lift);
        let travel = format!("G0 X{} Y{}", self.coord(point.x), self.coord(point.y));
        self.line(&travel);
    }

    /// Lower the tool and trace every point, one `G1` line each.
    pub fn outline(&mut self, polyline: &Polyline) -> Result<()> {
        let (ox, oy) = self.settings.origin;
        let shifted: Polyline = polyline
            .iter()
            .map(|p| {
                let mut p = *p;
                p.relative_move(ox, oy);
                p
            })
            .collect();
        let Some(start) = shifted.first().copied() else {
            return Err(GcodeError::EmptyPath);
        };
        self.travel_to(&start);

        let lower = format!(
            "G1 Z{} F{}",
            self.coord(self.settings.draw_z),
            self.coord(self.settings.feed_rate)
        );
        self.line(&lower);

        self.output.push_str(&shifted.to_gcode());
        if self.settings.close_loop {
            self.line(&start.to_gcode());
        }
        Ok(())
    }

    /// Lift the tool and write the flavor's end sequence.
    pub fn footer(&mut self) {
        let lift = format!("G0 Z{}", self.coord(self.settings.travel_z));
        self.line(&lift);
        let end = self.settings.flavor.end_gcode();
        self.output.push_str(end);
    }

    /// Return the finished program.
    pub fn finish(self) -> String {
        self.output
    }
}

/// Generate a complete program tracing `polyline`.
pub fn generate_gcode(polyline: &Polyline, settings: &GcodeSettings) -> Result<String> {
    if polyline.is_empty() {
        return Err(GcodeError::EmptyPath);
    }
    let mut generator = GcodeGenerator::new(settings.clone())?;
    generator.header(polyline);
    generator.outline(polyline)?;
    generator.footer();
    let program = generator.finish();
    debug!(
        points = polyline.len(),
        bytes = program.len(),
        flavor = ?settings.flavor,
        "generated gcode"
    );
    Ok(program)
}

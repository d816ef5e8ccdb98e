//! SVG export for snowflake outlines.
//!
//! [`SvgPath`] is a [`Surface`] that turns drawing calls into SVG path
//! data. [`to_svg`] wraps a polyline into a standalone document sized to
//! its bounds.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use snowflake_geom::{format_coord, Polyline, Surface};

/// Styling and layout for SVG output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvgSettings {
    /// Stroke color.
    pub stroke: String,
    /// Stroke width in drawing units.
    pub stroke_width: f64,
    /// Fill color (`"none"` for an outline).
    pub fill: String,
    /// Empty space around the shape in drawing units.
    pub margin: f64,
    /// Decimal places for coordinates.
    pub precision: usize,
}

impl Default for SvgSettings {
    fn default() -> Self {
        Self {
            stroke: "black".into(),
            stroke_width: 0.5,
            fill: "none".into(),
            margin: 5.0,
            precision: 3,
        }
    }
}

/// Accumulates SVG path data (`M`, `L`, `Z` commands).
///
/// The y axis is flipped so that +y points up, as on a plotter bed.
#[derive(Debug, Clone)]
pub struct SvgPath {
    data: String,
    precision: usize,
}

impl SvgPath {
    /// Create an empty path writer.
    pub fn new(precision: usize) -> Self {
        Self {
            data: String::new(),
            precision,
        }
    }

    /// The path data accumulated so far.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Consume the writer, returning the path data.
    pub fn into_data(self) -> String {
        self.data
    }

    fn push_command(&mut self, command: char, x: f64, y: f64) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        let _ = write!(
            self.data,
            "{command}{},{}",
            format_coord(x, self.precision),
            format_coord(-y, self.precision)
        );
    }
}

impl Default for SvgPath {
    fn default() -> Self {
        Self::new(SvgSettings::default().precision)
    }
}

impl Surface for SvgPath {
    fn begin_path(&mut self) {
        self.data.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_command('M', x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_command('L', x, y);
    }

    fn close_path(&mut self) {
        if !self.data.is_empty() {
            self.data.push_str(" Z");
        }
    }
}

/// Render a polyline as a standalone SVG document.
///
/// The view box is fitted to the polyline's bounds plus the margin. An
/// empty polyline produces a document with an empty view box and no path.
pub fn to_svg(polyline: &Polyline, settings: &SvgSettings) -> String {
    let precision = settings.precision;
    let mut svg = String::new();
    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);

    let Some((min, max)) = polyline.bounds() else {
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 0 0"></svg>"#
        );
        return svg;
    };

    let margin = settings.margin;
    let width = max.x - min.x + 2.0 * margin;
    let height = max.y - min.y + 2.0 * margin;
    // y is flipped, so the top edge sits at -max.y.
    let left = min.x - margin;
    let top = -max.y - margin;

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="{l} {t} {w} {h}">"#,
        w = format_coord(width, precision),
        h = format_coord(height, precision),
        l = format_coord(left, precision),
        t = format_coord(top, precision),
    );

    let mut path = SvgPath::new(precision);
    polyline.draw(&mut path);
    let _ = writeln!(
        svg,
        r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
        path.data(),
        settings.fill,
        settings.stroke,
        settings.stroke_width,
    );
    let _ = writeln!(svg, "</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowflake_geom::Point;

    fn triangle() -> Polyline {
        Polyline::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ])
    }

    #[test]
    fn test_svg_path_commands() {
        let mut path = SvgPath::new(1);
        triangle().draw(&mut path);
        assert_eq!(path.data(), "M0.0,0.0 L10.0,0.0 L5.0,-8.0 Z");
    }

    #[test]
    fn test_svg_path_empty_polyline() {
        let mut path = SvgPath::default();
        Polyline::new().draw(&mut path);
        assert_eq!(path.data(), "");
    }

    #[test]
    fn test_begin_path_resets() {
        let mut path = SvgPath::new(0);
        path.move_to(1.0, 1.0);
        path.begin_path();
        path.move_to(2.0, 2.0);
        assert_eq!(path.into_data(), "M2,-2");
    }

    #[test]
    fn test_to_svg_view_box() {
        let settings = SvgSettings {
            margin: 1.0,
            precision: 1,
            ..Default::default()
        };
        let svg = to_svg(&triangle(), &settings);
        assert!(svg.contains(r#"viewBox="-1.0 -9.0 12.0 10.0""#), "{svg}");
        assert!(svg.contains(r#"d="M0.0,0.0 L10.0,0.0 L5.0,-8.0 Z""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_to_svg_empty() {
        let svg = to_svg(&Polyline::new(), &SvgSettings::default());
        assert!(!svg.contains("<path"));
    }
}

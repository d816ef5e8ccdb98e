//! Mutable 2D point.

use nalgebra::{Point2, Rotation2};
use serde::{Deserialize, Serialize};

/// Decimal places used for G-code coordinates.
pub const GCODE_PRECISION: usize = 2;

/// A point in the drawing plane.
///
/// Points are plain values: copying one never shares state with the
/// original. [`rotate`](Point::rotate) and [`relative_move`](Point::relative_move)
/// mutate in place and return `&mut Self` so calls can be chained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Rotate about the origin by `theta` radians.
    pub fn rotate(&mut self, theta: f64) -> &mut Self {
        let rotated = Rotation2::new(theta) * Point2::new(self.x, self.y);
        self.x = rotated.x;
        self.y = rotated.y;
        self
    }

    /// Translate by `(dx, dy)`.
    pub fn relative_move(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (Point2::from(*self) - Point2::from(*other)).norm()
    }

    /// Linear move to this point, e.g. `G1 X3.00 Y1.50`.
    pub fn to_gcode(&self) -> String {
        format!(
            "G1 X{} Y{}",
            format_coord(self.x, GCODE_PRECISION),
            format_coord(self.y, GCODE_PRECISION)
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// Format a coordinate in fixed-point notation.
///
/// Values that round to zero are printed unsigned, so `-0.001` becomes
/// `0.00` rather than `-0.00`.
pub fn format_coord(value: f64, precision: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = precision);
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

//! Ordered point sequences.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::surface::Surface;

/// An ordered sequence of points.
///
/// Order is significant: it is the order in which the path is drawn or
/// emitted. The polyline owns its points exclusively. [`append`](Polyline::append)
/// takes a point by value, while [`extend`](Polyline::extend) and `clone`
/// copy, so no two polylines ever share a point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Create an empty polyline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a polyline from points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Points in path order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over points in path order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Starting point.
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Ending point.
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Add a point to the end.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append copies of every point of `other`, in order.
    pub fn extend(&mut self, other: &Polyline) {
        self.points.extend_from_slice(&other.points);
    }

    /// Rotate every point about the origin by `theta` radians.
    pub fn rotate(&mut self, theta: f64) {
        for point in &mut self.points {
            point.rotate(theta);
        }
    }

    /// Mirror across the x axis.
    pub fn reflect(&mut self) {
        for point in &mut self.points {
            point.y = -point.y;
        }
    }

    /// Reverse the point order.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        let bounds = self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(bounds)
    }

    /// One `G1` move per point, each terminated by a newline.
    pub fn to_gcode(&self) -> String {
        let mut output = String::with_capacity(self.points.len() * 20);
        for point in &self.points {
            output.push_str(&point.to_gcode());
            output.push('\n');
        }
        output
    }

    /// Trace the polyline as a closed path on `surface`.
    ///
    /// An empty polyline issues no calls at all.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };

        surface.begin_path();
        surface.move_to(first.x, first.y);
        for point in rest {
            surface.line_to(point.x, point.y);
        }
        surface.close_path();
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

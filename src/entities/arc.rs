//! Circular arc entity (type 100)

use super::{DirectoryAttributes, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value};

/// A circular arc in a plane parallel to XY
///
/// The arc runs counterclockwise from `start` to `end` around `center`.
/// Only the center's z value is written; it is the plane's offset along Z.
/// The z values of `start` and `end` are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArc {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub center: Point3<f64>,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl CircularArc {
    pub fn new(center: Point3<f64>, start: Point3<f64>, end: Point3<f64>) -> Self {
        CircularArc {
            common: DirectoryAttributes::solid(),
            center,
            start,
            end,
        }
    }

    /// A full circle: start and end coincide at `(cx + radius, cy)`
    pub fn circle(center: Point3<f64>, radius: f64) -> Self {
        let on_circle = Point3::new(center.x + radius, center.y, center.z);
        Self::new(center, on_circle, on_circle)
    }

    pub fn is_full_circle(&self) -> bool {
        self.start.x == self.end.x && self.start.y == self.end.y
    }

    /// Distance from the center to the start point in the arc plane
    pub fn radius(&self) -> f64 {
        (self.start.x - self.center.x).hypot(self.start.y - self.center.y)
    }
}

impl Geometry for CircularArc {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::CircularArc
    }

    fn parameters(&self) -> Vec<Value> {
        [
            self.center.z,
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
        ]
        .into_iter()
        .map(Value::Real)
        .collect()
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

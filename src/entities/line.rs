//! Line entity (type 110)

use super::{DirectoryAttributes, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value};

/// A bounded straight line segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Line {
    /// Create a line between two points
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Line {
            common: DirectoryAttributes::new(),
            start,
            end,
        }
    }

    /// Create a line from raw coordinates
    pub fn from_coords(start: [f64; 3], end: [f64; 3]) -> Self {
        Self::new(Point3::from(start), Point3::from(end))
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }
}

impl Geometry for Line {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::Line
    }

    fn parameters(&self) -> Vec<Value> {
        self.start
            .iter()
            .chain(self.end.iter())
            .map(|&c| Value::Real(c))
            .collect()
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

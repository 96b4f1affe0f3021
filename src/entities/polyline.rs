//! Closed planar polyline as copious data (type 106, form 12)

use super::{DirectoryAttributes, Geometry};
use crate::types::{EntityTypeNumber, LineFontPattern, Point3, Value};

/// Interpretation flag for x, y, z triples
const XYZ_TRIPLES: i64 = 2;

/// A chain of straight segments through 3D points
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub points: Vec<Point3<f64>>,
}

impl Polyline {
    pub fn new(points: impl IntoIterator<Item = Point3<f64>>) -> Self {
        Polyline {
            common: DirectoryAttributes::new().with_line_font(LineFontPattern::Solid),
            points: points.into_iter().collect(),
        }
    }

    pub fn push(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    /// First vertex, where a tabulated cylinder swept from this curve starts
    pub fn first_point(&self) -> Option<Point3<f64>> {
        self.points.first().copied()
    }
}

impl Geometry for Polyline {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::CopiousData
    }

    fn form_number(&self) -> i64 {
        12
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(2 + self.points.len() * 3);
        values.push(Value::Integer(XYZ_TRIPLES));
        values.push(Value::from(self.points.len()));
        for point in &self.points {
            values.extend(point.iter().map(|&c| Value::Real(c)));
        }
        values
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

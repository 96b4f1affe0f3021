//! Sphere entity (type 158)

use super::{DirectoryAttributes, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value};

/// Solid sphere given by radius and center
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub radius: f64,
    pub center: Point3<f64>,
}

impl Sphere {
    pub fn new(radius: f64, center: Point3<f64>) -> Self {
        Sphere {
            common: DirectoryAttributes::solid(),
            radius,
            center,
        }
    }
}

impl Geometry for Sphere {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::Sphere
    }

    fn parameters(&self) -> Vec<Value> {
        [self.radius, self.center.x, self.center.y, self.center.z]
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

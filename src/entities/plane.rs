//! Plane entity (type 108)

use super::{DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Value};

/// A bounded plane `a*x + b*y + c*z = d`
///
/// Form 1 is a positive bounded plane; [`Plane::as_hole`] switches to form -1,
/// which cuts the bounded region out of its surroundings.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub coefficients: [f64; 4],
    /// Closed curve bounding the plane
    pub boundary: EntityRef,
    pub hole: bool,
}

impl Plane {
    /// The XY plane bounded by `boundary`
    pub fn new(boundary: impl Into<EntityRef>) -> Self {
        Plane {
            common: DirectoryAttributes::new(),
            coefficients: [0.0, 0.0, 1.0, 0.0],
            boundary: boundary.into(),
            hole: false,
        }
    }

    pub fn with_coefficients(mut self, a: f64, b: f64, c: f64, d: f64) -> Self {
        self.coefficients = [a, b, c, d];
        self
    }

    pub fn as_hole(mut self) -> Self {
        self.hole = true;
        self
    }
}

impl Geometry for Plane {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::Plane
    }

    fn form_number(&self) -> i64 {
        if self.hole {
            -1
        } else {
            1
        }
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.coefficients.iter().map(|&c| Value::Real(c)).collect();
        values.push(Value::from(self.boundary));
        values.push(Value::Integer(0));
        values.push(Value::Integer(0));
        values
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

//! Rational B-spline surface entity (type 128)

use super::{DirectoryAttributes, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value};

/// Bilinear rational B-spline patch spanned by four corner points
///
/// Degree 1 in both directions, polynomial (all weights 1), open and
/// non-periodic, parameterized over `[0, 1] x [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RationalBSplineSurface {
    /// Directory attributes
    pub common: DirectoryAttributes,
    /// Control points in `(u0,v0) (u1,v0) (u0,v1) (u1,v1)` order
    pub corners: [Point3<f64>; 4],
}

impl RationalBSplineSurface {
    pub fn bilinear(corners: [Point3<f64>; 4]) -> Self {
        RationalBSplineSurface {
            common: DirectoryAttributes::solid(),
            corners,
        }
    }
}

impl Geometry for RationalBSplineSurface {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::RationalBSplineSurface
    }

    fn parameters(&self) -> Vec<Value> {
        // K1 K2 M1 M2, then PROP1..PROP5: open, polynomial, non-periodic
        let mut values: Vec<Value> = [1, 1, 1, 1, 0, 0, 1, 0, 0]
            .into_iter()
            .map(Value::Integer)
            .collect();
        let knots = [0.0, 0.0, 1.0, 1.0];
        values.extend(knots.iter().chain(knots.iter()).map(|&k| Value::Real(k)));
        values.extend([1.0; 4].into_iter().map(Value::Real));
        for corner in &self.corners {
            values.extend(corner.iter().map(|&c| Value::Real(c)));
        }
        values.extend([0.0, 1.0, 0.0, 1.0].into_iter().map(Value::Real));
        values
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

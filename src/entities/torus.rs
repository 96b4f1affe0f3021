//! Torus entity (type 160)

use super::{DirectoryAttributes, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value, Vector3};

/// Solid torus
#[derive(Debug, Clone, PartialEq)]
pub struct Torus {
    /// Directory attributes
    pub common: DirectoryAttributes,
    /// Distance from the center to the center of the ring
    pub major_radius: f64,
    /// Radius of the ring
    pub minor_radius: f64,
    pub center: Point3<f64>,
    /// Axis of rotation through the center
    pub axis: Vector3<f64>,
}

impl Torus {
    pub fn new(major_radius: f64, minor_radius: f64, center: Point3<f64>, axis: Vector3<f64>) -> Self {
        Torus {
            common: DirectoryAttributes::solid(),
            major_radius,
            minor_radius,
            center,
            axis,
        }
    }
}

impl Geometry for Torus {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::Torus
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values = vec![Value::Real(self.major_radius), Value::Real(self.minor_radius)];
        values.extend(self.center.iter().map(|&c| Value::Real(c)));
        values.extend(self.axis.iter().map(|&c| Value::Real(c)));
        values
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_parameters() {
        let torus = Torus::new(10.0, 2.0, Point3::new(0.0, 0.0, 1.0), Vector3::z());
        let values = torus.parameters();
        assert_eq!(values.len(), 8);
        assert_eq!(values[4], Value::Real(1.0));
        assert_eq!(values[7], Value::Real(1.0));
    }
}

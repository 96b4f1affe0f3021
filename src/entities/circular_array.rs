//! Circular array entity (type 414)

use super::{DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value};

/// Copies of a base entity spaced evenly along a circular arc
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArray {
    /// Directory attributes
    pub common: DirectoryAttributes,
    /// Entity or subfigure to replicate
    pub base: EntityRef,
    /// Number of locations, counting the base
    pub count: u32,
    pub center: Point3<f64>,
    pub radius: f64,
    /// Angle of the first location in radians
    pub start_angle: f64,
    /// Angle between consecutive locations in radians
    pub delta_angle: f64,
}

impl CircularArray {
    pub fn new(
        base: impl Into<EntityRef>,
        count: u32,
        center: Point3<f64>,
        radius: f64,
        start_angle: f64,
        delta_angle: f64,
    ) -> Self {
        CircularArray {
            common: DirectoryAttributes::new(),
            base: base.into(),
            count,
            center,
            radius,
            start_angle,
            delta_angle,
        }
    }
}

impl Geometry for CircularArray {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::CircularArray
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values = vec![Value::from(self.base), Value::from(self.count)];
        values.extend(self.center.iter().map(|&c| Value::Real(c)));
        values.push(Value::Real(self.radius));
        values.push(Value::Real(self.start_angle));
        values.push(Value::Real(self.delta_angle));
        // DO flag: every location is displayed
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

//! Tabulated cylinder entity (type 122)

use super::{DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value, Vector3};

/// Surface swept by translating a directrix curve along a straight line
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedCylinder {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub directrix: EntityRef,
    /// Where the directrix start point ends up after the sweep
    pub terminate: Point3<f64>,
}

impl TabulatedCylinder {
    pub fn new(directrix: impl Into<EntityRef>, terminate: Point3<f64>) -> Self {
        TabulatedCylinder {
            common: DirectoryAttributes::new(),
            directrix: directrix.into(),
            terminate,
        }
    }

    /// Extrude a curve that starts at `start` by `offset`
    pub fn extrude(directrix: impl Into<EntityRef>, start: Point3<f64>, offset: Vector3<f64>) -> Self {
        Self::new(directrix, start + offset)
    }
}

impl Geometry for TabulatedCylinder {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::TabulatedCylinder
    }

    fn parameters(&self) -> Vec<Value> {
        vec![
            Value::from(self.directrix),
            Value::Real(self.terminate.x),
            Value::Real(self.terminate.y),
            Value::Real(self.terminate.z),
        ]
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

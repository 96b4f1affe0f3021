//! Surface of revolution entity (type 120)

use std::f64::consts::TAU;

use super::{DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Value};

/// Surface swept by rotating a generatrix curve about an axis line
#[derive(Debug, Clone, PartialEq)]
pub struct RevolvedSurface {
    /// Directory attributes
    pub common: DirectoryAttributes,
    /// Line entity used as the axis of rotation
    pub axis: EntityRef,
    /// Curve that is rotated
    pub generatrix: EntityRef,
    /// Start angle in radians
    pub start_angle: f64,
    /// Terminate angle in radians
    pub end_angle: f64,
}

impl RevolvedSurface {
    /// A full revolution, 0 to 2π
    pub fn new(axis: impl Into<EntityRef>, generatrix: impl Into<EntityRef>) -> Self {
        RevolvedSurface {
            common: DirectoryAttributes::new(),
            axis: axis.into(),
            generatrix: generatrix.into(),
            start_angle: 0.0,
            end_angle: TAU,
        }
    }

    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }
}

impl Geometry for RevolvedSurface {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::SurfaceOfRevolution
    }

    fn parameters(&self) -> Vec<Value> {
        vec![
            Value::from(self.axis),
            Value::from(self.generatrix),
            Value::Real(self.start_angle),
            Value::Real(self.end_angle),
        ]
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

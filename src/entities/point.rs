//! Point entity (type 116)

use super::{DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Point3, Value};

/// A point in model space
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Directory attributes
    pub common: DirectoryAttributes,
    /// Location of the point
    pub location: Point3<f64>,
    /// Subfigure used as display symbol, none by default
    pub display_symbol: EntityRef,
}

impl Point {
    /// Create a point from coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::at(Point3::new(x, y, z))
    }

    /// Create a point at a location
    pub fn at(location: Point3<f64>) -> Self {
        Point {
            common: DirectoryAttributes::solid(),
            location,
            display_symbol: None,
        }
    }

    pub fn with_display_symbol(mut self, symbol: impl Into<EntityRef>) -> Self {
        self.display_symbol = symbol.into();
        self
    }
}

impl Geometry for Point {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::Point
    }

    fn parameters(&self) -> Vec<Value> {
        let symbol = match self.display_symbol {
            Some(pointer) => Value::from(pointer),
            None => Value::Integer(0),
        };
        vec![
            Value::from(self.location.x),
            Value::from(self.location.y),
            Value::from(self.location.z),
            symbol,
        ]
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

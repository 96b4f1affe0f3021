//! Curve on a parametric surface entity (type 142)

use super::{DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Value};

/// How the curve was created (CRTN)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveCreation {
    Unspecified = 0,
    #[default]
    Projection = 1,
    Intersection = 2,
    Isoparametric = 3,
}

/// Which representation a receiver should prefer (PREF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferredRepresentation {
    Unspecified = 0,
    ParameterSpace = 1,
    #[default]
    ModelSpace = 2,
    Either = 3,
}

/// A curve lying on a surface, given in parameter space and model space
#[derive(Debug, Clone, PartialEq)]
pub struct CurveOnSurface {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub creation: CurveCreation,
    pub surface: EntityRef,
    /// The curve in the surface's parameter space, written as 0 when absent
    pub parameter_curve: EntityRef,
    /// The curve in model space
    pub model_curve: EntityRef,
    pub preferred: PreferredRepresentation,
}

impl CurveOnSurface {
    pub fn new(
        surface: impl Into<EntityRef>,
        parameter_curve: impl Into<EntityRef>,
        model_curve: impl Into<EntityRef>,
    ) -> Self {
        CurveOnSurface {
            common: DirectoryAttributes::new(),
            creation: CurveCreation::default(),
            surface: surface.into(),
            parameter_curve: parameter_curve.into(),
            model_curve: model_curve.into(),
            preferred: PreferredRepresentation::default(),
        }
    }

    pub fn with_creation(mut self, creation: CurveCreation) -> Self {
        self.creation = creation;
        self
    }

    pub fn with_preferred(mut self, preferred: PreferredRepresentation) -> Self {
        self.preferred = preferred;
        self
    }
}

impl Geometry for CurveOnSurface {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::CurveOnParametricSurface
    }

    fn parameters(&self) -> Vec<Value> {
        let parameter_curve = match self.parameter_curve {
            Some(pointer) => Value::from(pointer),
            None => Value::Integer(0),
        };
        vec![
            Value::Integer(self.creation as i64),
            Value::from(self.surface),
            parameter_curve,
            Value::from(self.model_curve),
            Value::Integer(self.preferred as i64),
        ]
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

//! Trimmed parametric surface entity (type 144)

use super::{references, DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Value};

/// A surface cut down by an outer boundary and optional holes
///
/// Boundaries are curve-on-surface entities. Without an outer boundary the
/// surface's own boundary applies (N1 = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedSurface {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub surface: EntityRef,
    pub outer: Option<EntityRef>,
    pub inner: Vec<EntityRef>,
}

impl TrimmedSurface {
    pub fn new(surface: impl Into<EntityRef>, outer: impl Into<EntityRef>) -> Self {
        TrimmedSurface {
            common: DirectoryAttributes::new(),
            surface: surface.into(),
            outer: Some(outer.into()),
            inner: Vec::new(),
        }
    }

    /// Trimmed only by inner boundaries
    pub fn untrimmed_outer(surface: impl Into<EntityRef>) -> Self {
        TrimmedSurface {
            common: DirectoryAttributes::new(),
            surface: surface.into(),
            outer: None,
            inner: Vec::new(),
        }
    }

    pub fn with_inner<I, R>(mut self, boundaries: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.inner.extend(references(boundaries));
        self
    }

    pub fn add_inner(&mut self, boundary: impl Into<EntityRef>) {
        self.inner.push(boundary.into());
    }
}

impl Geometry for TrimmedSurface {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::TrimmedParametricSurface
    }

    fn parameters(&self) -> Vec<Value> {
        let (n1, outer) = match self.outer {
            Some(outer) => (1, Value::from(outer)),
            None => (0, Value::Integer(0)),
        };
        let mut values = vec![
            Value::from(self.surface),
            Value::Integer(n1),
            Value::from(self.inner.len()),
            outer,
        ];
        values.extend(self.inner.iter().copied().map(Value::from));
        values
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

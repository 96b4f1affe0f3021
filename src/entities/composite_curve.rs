//! Composite curve entity (type 102)

use super::{references, DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, Value};

/// An ordered chain of curves treated as one curve
///
/// Member curves must be committed before the composite curve is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeCurve {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub curves: Vec<EntityRef>,
}

impl CompositeCurve {
    pub fn new<I, R>(curves: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        CompositeCurve {
            common: DirectoryAttributes::new(),
            curves: references(curves),
        }
    }

    pub fn push(&mut self, curve: impl Into<EntityRef>) {
        self.curves.push(curve.into());
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl Geometry for CompositeCurve {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::CompositeCurve
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.curves.len() + 1);
        values.push(Value::from(self.curves.len()));
        values.extend(self.curves.iter().copied().map(Value::from));
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
    use crate::types::DirectoryPointer;

    #[test]
    fn test_count_precedes_pointers() {
        let first = DirectoryPointer::new(1).unwrap();
        let second = DirectoryPointer::new(3).unwrap();
        let curve = CompositeCurve::new([first, second]);
        assert_eq!(
            curve.parameters(),
            vec![Value::Integer(2), Value::from(first), Value::from(second)]
        );
    }

    #[test]
    fn test_push_keeps_count_current() {
        let mut curve = CompositeCurve::default();
        assert!(curve.is_empty());
        curve.push(DirectoryPointer::new(5));
        curve.push(None);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.parameters()[0], Value::Integer(2));
        assert!(curve.parameters()[2].is_unresolved_pointer());
    }
}

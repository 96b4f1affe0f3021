//! Subfigure definition entity (type 308)

use super::{references, DirectoryAttributes, EntityRef, Geometry};
use crate::types::{EntityTypeNumber, EntityUse, Hierarchy, StatusNumber, Value};

/// A named group of entities that can be instanced or arrayed
///
/// Written with the definition entity-use flag and deferred hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct SubfigureDefinition {
    /// Directory attributes
    pub common: DirectoryAttributes,
    /// Nesting depth of subfigures inside this one
    pub depth: i64,
    pub name: String,
    pub members: Vec<EntityRef>,
}

impl SubfigureDefinition {
    pub fn new<I, R>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        let status = StatusNumber::new()
            .with_entity_use(EntityUse::Definition)
            .with_hierarchy(Hierarchy::GlobalDefer);
        SubfigureDefinition {
            common: DirectoryAttributes::new().with_status(status),
            depth: 0,
            name: name.into(),
            members: references(members),
        }
    }

    pub fn push(&mut self, member: impl Into<EntityRef>) {
        self.members.push(member.into());
    }
}

impl Geometry for SubfigureDefinition {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::SubfigureDefinition
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values = vec![
            Value::Integer(self.depth),
            Value::from(self.name.as_str()),
            Value::from(self.members.len()),
        ];
        values.extend(self.members.iter().copied().map(Value::from));
        values
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

//! Status number (directory entry field 9)

use std::fmt;

/// Blank status digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankStatus {
    #[default]
    Visible = 0,
    Blanked = 1,
}

/// Subordinate entity switch digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subordinate {
    #[default]
    Independent = 0,
    PhysicallyDependent = 1,
    LogicallyDependent = 2,
    PhysicallyAndLogicallyDependent = 3,
}

/// Entity use flag digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityUse {
    #[default]
    Geometry = 0,
    Annotation = 1,
    Definition = 2,
    Other = 3,
    LogicalOrPositional = 4,
    Parametric2D = 5,
    ConstructionGeometry = 6,
}

/// Hierarchy digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hierarchy {
    #[default]
    GlobalTopDown = 0,
    GlobalDefer = 1,
    UseHierarchyProperty = 2,
}

/// The four two-digit status fields, rendered as `BBSSUUHH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusNumber {
    pub blank: BlankStatus,
    pub subordinate: Subordinate,
    pub entity_use: EntityUse,
    pub hierarchy: Hierarchy,
}

impl StatusNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank(mut self, blank: BlankStatus) -> Self {
        self.blank = blank;
        self
    }

    pub fn with_subordinate(mut self, subordinate: Subordinate) -> Self {
        self.subordinate = subordinate;
        self
    }

    pub fn with_entity_use(mut self, entity_use: EntityUse) -> Self {
        self.entity_use = entity_use;
        self
    }

    pub fn with_hierarchy(mut self, hierarchy: Hierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }
}

impl fmt::Display for StatusNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}{:02}",
            self.blank as u8, self.subordinate as u8, self.entity_use as u8, self.hierarchy as u8
        )
    }
}

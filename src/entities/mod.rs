//! IGES entities and the geometry catalog
//!
//! [`Entity`] is the generic record the encoder compiles: a type number, a
//! form number, ordered parameter values and the directory attributes. The
//! catalog types ([`Point`], [`Line`], [`CompositeCurve`], ...) are typed
//! producers that describe one kind of geometry and turn into an `Entity`
//! through the [`Geometry`] trait.

use std::fmt;

use crate::error::{IgesError, Result};
use crate::types::{
    Color, DirectoryPointer, EntityTypeNumber, LineFontPattern, LineWeight, StatusNumber, Value,
};

pub mod arc;
pub mod bspline_surface;
pub mod circular_array;
pub mod composite_curve;
pub mod curve_on_surface;
pub mod general_note;
pub mod line;
pub mod plane;
pub mod point;
pub mod polyline;
pub mod revolved_surface;
pub mod sphere;
pub mod spline;
pub mod subfigure;
pub mod tabulated_cylinder;
pub mod torus;
pub mod transformation_matrix;
pub mod trimmed_surface;

pub use arc::CircularArc;
pub use bspline_surface::RationalBSplineSurface;
pub use circular_array::CircularArray;
pub use composite_curve::CompositeCurve;
pub use curve_on_surface::{CurveCreation, CurveOnSurface, PreferredRepresentation};
pub use general_note::GeneralNote;
pub use line::Line;
pub use plane::Plane;
pub use point::Point;
pub use polyline::Polyline;
pub use revolved_surface::RevolvedSurface;
pub use sphere::Sphere;
pub use spline::{SplineCurve, SplineSegment, SplineType};
pub use subfigure::SubfigureDefinition;
pub use tabulated_cylinder::TabulatedCylinder;
pub use torus::Torus;
pub use transformation_matrix::TransformationMatrix;
pub use trimmed_surface::TrimmedSurface;

/// Reference to another entity: its directory pointer once committed
pub type EntityRef = Option<DirectoryPointer>;

/// Directory entry attributes shared by every entity
///
/// Entity type, form number, both pointers and the parameter line count are
/// not here; the encoder fills those in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryAttributes {
    /// Field 3, structure (0 = not a macro instance)
    pub structure: i64,
    pub line_font: LineFontPattern,
    pub level: i64,
    pub view: i64,
    /// Field 7, transformation matrix entity applied to this one
    pub transform: EntityRef,
    pub label_display: i64,
    pub status: StatusNumber,
    pub line_weight: LineWeight,
    pub color: Color,
    /// Field 18, at most 8 characters
    pub label: String,
    /// Field 19, blank when unset
    pub subscript: Option<u32>,
}

impl DirectoryAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_font(mut self, line_font: LineFontPattern) -> Self {
        self.line_font = line_font;
        self
    }

    pub fn with_line_weight(mut self, line_weight: LineWeight) -> Self {
        self.line_weight = line_weight;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_status(mut self, status: StatusNumber) -> Self {
        self.status = status;
        self
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    pub fn with_transform(mut self, transform: impl Into<EntityRef>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_subscript(mut self, subscript: u32) -> Self {
        self.subscript = Some(subscript);
        self
    }

    /// Solid line font, thinnest line weight
    pub(crate) fn solid() -> Self {
        Self::new()
            .with_line_font(LineFontPattern::Solid)
            .with_line_weight(LineWeight::THIN)
    }
}

/// A typed geometry producer that can be compiled as an IGES entity
pub trait Geometry {
    /// Entity type number written in directory fields 1 and 10
    fn entity_type(&self) -> EntityTypeNumber;

    /// Form number (directory field 15)
    fn form_number(&self) -> i64 {
        0
    }

    /// Parameter values following the entity type in the Parameter record
    fn parameters(&self) -> Vec<Value>;

    /// Directory attributes of this entity
    fn directory(&self) -> &DirectoryAttributes;

    /// Mutable directory attributes of this entity
    fn directory_mut(&mut self) -> &mut DirectoryAttributes;

    /// Build the record the encoder compiles
    fn to_entity(&self) -> Entity {
        Entity::new(self.entity_type(), self.form_number())
            .with_parameters(self.parameters())
            .with_directory(self.directory().clone())
    }
}

/// Implements `From<T>` and `From<&T>` for [`Entity`] on catalog types
macro_rules! impl_into_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(geometry: $ty) -> Self {
                    geometry.to_entity()
                }
            }

            impl From<&$ty> for Entity {
                fn from(geometry: &$ty) -> Self {
                    geometry.to_entity()
                }
            }
        )*
    };
}

impl_into_entity!(
    CircularArc,
    CircularArray,
    CompositeCurve,
    CurveOnSurface,
    GeneralNote,
    Line,
    Plane,
    Point,
    Polyline,
    RationalBSplineSurface,
    RevolvedSurface,
    Sphere,
    SplineCurve,
    SubfigureDefinition,
    TabulatedCylinder,
    Torus,
    TransformationMatrix,
    TrimmedSurface,
);

/// Generic IGES entity record
///
/// Pointers stay unset until the entity is committed to a document and are
/// frozen from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    entity_type: EntityTypeNumber,
    form_number: i64,
    parameters: Vec<Value>,
    directory: DirectoryAttributes,
    extended_data: Option<bool>,
    directory_pointer: EntityRef,
    parameter_pointer: Option<u32>,
    parameter_line_count: Option<u32>,
}

impl Entity {
    pub fn new(entity_type: EntityTypeNumber, form_number: i64) -> Self {
        Self {
            entity_type,
            form_number,
            parameters: Vec::new(),
            directory: DirectoryAttributes::default(),
            extended_data: None,
            directory_pointer: None,
            parameter_pointer: None,
            parameter_line_count: None,
        }
    }

    pub fn with_parameters<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.add_parameters(values);
        self
    }

    pub fn with_directory(mut self, directory: DirectoryAttributes) -> Self {
        self.directory = directory;
        self
    }

    /// Force the two trailing extended-data zeros on or off for this entity
    pub fn with_extended_data(mut self, enabled: bool) -> Self {
        self.extended_data = Some(enabled);
        self
    }

    pub fn add_parameter(&mut self, value: impl Into<Value>) {
        self.parameters.push(value.into());
    }

    pub fn add_parameters<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.parameters.extend(values.into_iter().map(Into::into));
    }

    pub fn entity_type(&self) -> EntityTypeNumber {
        self.entity_type
    }

    pub fn form_number(&self) -> i64 {
        self.form_number
    }

    pub fn set_form_number(&mut self, form_number: i64) {
        self.form_number = form_number;
    }

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    pub fn directory(&self) -> &DirectoryAttributes {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.directory
    }

    /// Per-entity extended-data override, `None` to follow the document table
    pub fn extended_data(&self) -> Option<bool> {
        self.extended_data
    }

    pub fn set_extended_data(&mut self, enabled: Option<bool>) {
        self.extended_data = enabled;
    }

    pub fn set_color(&mut self, color: Color) {
        self.directory.color = color;
    }

    pub fn set_line_font(&mut self, line_font: LineFontPattern) {
        self.directory.line_font = line_font;
    }

    pub fn set_line_weight(&mut self, line_weight: LineWeight) {
        self.directory.line_weight = line_weight;
    }

    pub fn set_level(&mut self, level: i64) {
        self.directory.level = level;
    }

    pub fn set_status(&mut self, status: StatusNumber) {
        self.directory.status = status;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.directory.label = label.into();
    }

    pub fn directory_pointer(&self) -> EntityRef {
        self.directory_pointer
    }

    pub fn parameter_pointer(&self) -> Option<u32> {
        self.parameter_pointer
    }

    pub fn parameter_line_count(&self) -> Option<u32> {
        self.parameter_line_count
    }

    pub fn is_committed(&self) -> bool {
        self.directory_pointer.is_some()
    }

    /// Pointer value for embedding in another entity's parameters
    pub fn as_reference(&self) -> Value {
        Value::Pointer(self.directory_pointer)
    }

    /// Short name used in diagnostics, e.g. `CompositeCurve (102/0)`
    pub fn describe(&self) -> String {
        format!(
            "{} ({}/{})",
            self.entity_type,
            self.entity_type.code(),
            self.form_number
        )
    }

    pub(crate) fn freeze(
        &mut self,
        directory_pointer: DirectoryPointer,
        parameter_pointer: u32,
        parameter_line_count: u32,
    ) -> Result<()> {
        if let Some(existing) = self.directory_pointer {
            return Err(IgesError::AlreadyCommitted {
                pointer: existing.line(),
            });
        }
        self.directory_pointer = Some(directory_pointer);
        self.parameter_pointer = Some(parameter_pointer);
        self.parameter_line_count = Some(parameter_line_count);
        Ok(())
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.directory_pointer {
            Some(pointer) => write!(f, "{} at D{}", self.describe(), pointer),
            None => write!(f, "{} (uncommitted)", self.describe()),
        }
    }
}

/// Collect references into pointer values
pub(crate) fn references<I, R>(refs: I) -> Vec<EntityRef>
where
    I: IntoIterator<Item = R>,
    R: Into<EntityRef>,
{
    refs.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_is_uncommitted() {
        let entity = Entity::new(EntityTypeNumber::Point, 0).with_parameters([1.0, 2.0, 3.0]);
        assert!(!entity.is_committed());
        assert_eq!(entity.parameters().len(), 3);
        assert_eq!(entity.as_reference(), Value::Pointer(None));
        assert_eq!(entity.parameter_pointer(), None);
    }

    #[test]
    fn test_describe() {
        let entity = Entity::new(EntityTypeNumber::CompositeCurve, 0);
        assert_eq!(entity.describe(), "CompositeCurve (102/0)");
        assert_eq!(entity.to_string(), "CompositeCurve (102/0) (uncommitted)");
    }

    #[test]
    fn test_freeze_once() {
        let mut entity = Entity::new(EntityTypeNumber::Line, 0);
        let pointer = DirectoryPointer::new(3).unwrap();
        entity.freeze(pointer, 2, 1).unwrap();
        assert_eq!(entity.directory_pointer(), Some(pointer));
        assert_eq!(entity.parameter_line_count(), Some(1));
        assert_eq!(entity.as_reference(), Value::from(pointer));

        let err = entity.freeze(DirectoryPointer::new(5).unwrap(), 3, 1).unwrap_err();
        assert!(matches!(err, IgesError::AlreadyCommitted { pointer: 3 }));
        assert_eq!(entity.directory_pointer(), Some(pointer));
    }

    #[test]
    fn test_directory_setters() {
        let mut entity = Entity::new(EntityTypeNumber::Line, 0);
        entity.set_color(Color::Red);
        entity.set_label("EDGE");
        entity.set_level(4);
        assert_eq!(entity.directory().color, Color::Red);
        assert_eq!(entity.directory().label, "EDGE");
        assert_eq!(entity.directory().level, 4);
    }

    #[test]
    fn test_geometry_into_entity() {
        let point = Point::new(3.5, 15.0, 0.0);
        let entity: Entity = (&point).into();
        assert_eq!(entity.entity_type(), EntityTypeNumber::Point);
        assert_eq!(entity.directory(), point.directory());
    }
}

//! Value types shared by the encoder and the entity catalog

pub mod color;
pub mod entity_type;
pub mod line_font;
pub mod line_weight;
pub mod pointer;
pub mod status;
pub mod units;
pub mod value;

pub use color::Color;
pub use entity_type::EntityTypeNumber;
pub use line_font::LineFontPattern;
pub use line_weight::LineWeight;
pub use pointer::DirectoryPointer;
pub use status::{BlankStatus, EntityUse, Hierarchy, StatusNumber, Subordinate};
pub use units::ModelUnits;
pub use value::Value;

/// Points and vectors are plain nalgebra types
pub use nalgebra::{Point3, Vector3};

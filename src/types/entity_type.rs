//! Entity type numbers

use std::fmt;

/// IGES entity type number (directory entry fields 1 and 10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityTypeNumber {
    CircularArc,
    CompositeCurve,
    ConicArc,
    CopiousData,
    Plane,
    Line,
    ParametricSplineCurve,
    ParametricSplineSurface,
    Point,
    RuledSurface,
    SurfaceOfRevolution,
    TabulatedCylinder,
    TransformationMatrix,
    Flash,
    RationalBSplineCurve,
    RationalBSplineSurface,
    OffsetCurve,
    OffsetSurface,
    Boundary,
    CurveOnParametricSurface,
    BoundedSurface,
    TrimmedParametricSurface,
    Sphere,
    Torus,
    PlaneSurface,
    RightCircularCylindricalSurface,
    RightCircularConicalSurface,
    SphericalSurface,
    ToroidalSurface,
    GeneralNote,
    SubfigureDefinition,
    SubfigureInstance,
    Drawing,
    Property,
    View,
    CircularArray,
    /// Any type number without a named variant
    Other(u16),
}

impl EntityTypeNumber {
    /// Numeric type code
    pub fn code(&self) -> i64 {
        match self {
            EntityTypeNumber::CircularArc => 100,
            EntityTypeNumber::CompositeCurve => 102,
            EntityTypeNumber::ConicArc => 104,
            EntityTypeNumber::CopiousData => 106,
            EntityTypeNumber::Plane => 108,
            EntityTypeNumber::Line => 110,
            EntityTypeNumber::ParametricSplineCurve => 112,
            EntityTypeNumber::ParametricSplineSurface => 114,
            EntityTypeNumber::Point => 116,
            EntityTypeNumber::RuledSurface => 118,
            EntityTypeNumber::SurfaceOfRevolution => 120,
            EntityTypeNumber::TabulatedCylinder => 122,
            EntityTypeNumber::TransformationMatrix => 124,
            EntityTypeNumber::Flash => 125,
            EntityTypeNumber::RationalBSplineCurve => 126,
            EntityTypeNumber::RationalBSplineSurface => 128,
            EntityTypeNumber::OffsetCurve => 130,
            EntityTypeNumber::OffsetSurface => 140,
            EntityTypeNumber::Boundary => 141,
            EntityTypeNumber::CurveOnParametricSurface => 142,
            EntityTypeNumber::BoundedSurface => 143,
            EntityTypeNumber::TrimmedParametricSurface => 144,
            EntityTypeNumber::Sphere => 158,
            EntityTypeNumber::Torus => 160,
            EntityTypeNumber::PlaneSurface => 190,
            EntityTypeNumber::RightCircularCylindricalSurface => 192,
            EntityTypeNumber::RightCircularConicalSurface => 194,
            EntityTypeNumber::SphericalSurface => 196,
            EntityTypeNumber::ToroidalSurface => 198,
            EntityTypeNumber::GeneralNote => 212,
            EntityTypeNumber::SubfigureDefinition => 308,
            EntityTypeNumber::SubfigureInstance => 408,
            EntityTypeNumber::Drawing => 404,
            EntityTypeNumber::Property => 406,
            EntityTypeNumber::View => 410,
            EntityTypeNumber::CircularArray => 414,
            EntityTypeNumber::Other(code) => i64::from(*code),
        }
    }

    /// Map a numeric code back to a named variant where one exists
    pub fn from_code(code: u16) -> Self {
        const NAMED: [EntityTypeNumber; 36] = [
            EntityTypeNumber::CircularArc,
            EntityTypeNumber::CompositeCurve,
            EntityTypeNumber::ConicArc,
            EntityTypeNumber::CopiousData,
            EntityTypeNumber::Plane,
            EntityTypeNumber::Line,
            EntityTypeNumber::ParametricSplineCurve,
            EntityTypeNumber::ParametricSplineSurface,
            EntityTypeNumber::Point,
            EntityTypeNumber::RuledSurface,
            EntityTypeNumber::SurfaceOfRevolution,
            EntityTypeNumber::TabulatedCylinder,
            EntityTypeNumber::TransformationMatrix,
            EntityTypeNumber::Flash,
            EntityTypeNumber::RationalBSplineCurve,
            EntityTypeNumber::RationalBSplineSurface,
            EntityTypeNumber::OffsetCurve,
            EntityTypeNumber::OffsetSurface,
            EntityTypeNumber::Boundary,
            EntityTypeNumber::CurveOnParametricSurface,
            EntityTypeNumber::BoundedSurface,
            EntityTypeNumber::TrimmedParametricSurface,
            EntityTypeNumber::Sphere,
            EntityTypeNumber::Torus,
            EntityTypeNumber::PlaneSurface,
            EntityTypeNumber::RightCircularCylindricalSurface,
            EntityTypeNumber::RightCircularConicalSurface,
            EntityTypeNumber::SphericalSurface,
            EntityTypeNumber::ToroidalSurface,
            EntityTypeNumber::GeneralNote,
            EntityTypeNumber::SubfigureDefinition,
            EntityTypeNumber::SubfigureInstance,
            EntityTypeNumber::Drawing,
            EntityTypeNumber::Property,
            EntityTypeNumber::View,
            EntityTypeNumber::CircularArray,
        ];
        NAMED
            .into_iter()
            .find(|named| named.code() == i64::from(code))
            .unwrap_or(EntityTypeNumber::Other(code))
    }
}

impl fmt::Display for EntityTypeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityTypeNumber::Other(code) => write!(f, "Entity{code}"),
            named => write!(f, "{named:?}"),
        }
    }
}

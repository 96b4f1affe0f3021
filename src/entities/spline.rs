//! Parametric spline curve entity (type 112)

use super::{DirectoryAttributes, Geometry};
use crate::error::{IgesError, Result};
use crate::types::{EntityTypeNumber, Value};

/// Coefficients per segment: a, b, c, d for each of x, y, z
pub const COEFFICIENTS_PER_SEGMENT: usize = 12;

/// Spline type (CTYPE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplineType {
    Linear = 1,
    Quadratic = 2,
    #[default]
    Cubic = 3,
    WilsonFowler = 4,
    ModifiedWilsonFowler = 5,
    BSpline = 6,
}

/// One polynomial piece starting at `breakpoint`
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSegment {
    pub breakpoint: f64,
    pub coefficients: [f64; COEFFICIENTS_PER_SEGMENT],
}

impl SplineSegment {
    /// Build a segment; `coefficients` must hold exactly 12 numbers
    pub fn new(breakpoint: f64, coefficients: &[f64]) -> Result<Self> {
        let coefficients = <[f64; COEFFICIENTS_PER_SEGMENT]>::try_from(coefficients).map_err(|_| {
            IgesError::InvalidParameters(format!(
                "spline segment needs {COEFFICIENTS_PER_SEGMENT} coefficients, got {}",
                coefficients.len()
            ))
        })?;
        Ok(Self {
            breakpoint,
            coefficients,
        })
    }
}

/// Curve made of parametric polynomial segments
///
/// The evaluation data are already computed; this type only lays them out.
/// With `k` segments added the record declares `k - 1` spans: the last
/// segment supplies the final breakpoint and the terminal point data.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCurve {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub spline_type: SplineType,
    /// Degree of continuity with respect to arc length
    pub continuity: i64,
    /// 2 for planar, 3 for non-planar
    pub dimensions: i64,
    pub segments: Vec<SplineSegment>,
}

impl SplineCurve {
    pub fn new(spline_type: SplineType, continuity: i64, dimensions: i64) -> Self {
        SplineCurve {
            common: DirectoryAttributes::new(),
            spline_type,
            continuity,
            dimensions,
            segments: Vec::new(),
        }
    }

    /// Append a segment; fails unless `coefficients` holds 12 numbers
    pub fn add_segment(&mut self, breakpoint: f64, coefficients: &[f64]) -> Result<()> {
        self.segments.push(SplineSegment::new(breakpoint, coefficients)?);
        Ok(())
    }

    /// Number of spans written as N
    pub fn span_count(&self) -> i64 {
        self.segments.len() as i64 - 1
    }
}

impl Geometry for SplineCurve {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::ParametricSplineCurve
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values = vec![
            Value::Integer(self.spline_type as i64),
            Value::Integer(self.continuity),
            Value::Integer(self.dimensions),
            Value::Integer(self.span_count()),
        ];
        values.extend(self.segments.iter().map(|s| Value::Real(s.breakpoint)));
        for segment in &self.segments {
            values.extend(segment.coefficients.iter().map(|&c| Value::Real(c)));
        }
        values
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

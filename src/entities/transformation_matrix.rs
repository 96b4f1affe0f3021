//! Transformation matrix entity (type 124)
//!
//! Maps model coordinates as `x' = R * x + T`. Other entities reference it
//! through directory field 7.

use nalgebra::{Matrix3, Matrix4, Rotation3, Unit};

use super::{DirectoryAttributes, Geometry};
use crate::error::{IgesError, Result};
use crate::types::{EntityTypeNumber, Point3, Value, Vector3};

#[derive(Debug, Clone, PartialEq)]
pub struct TransformationMatrix {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub rotation: Matrix3<f64>,
    pub translation: Vector3<f64>,
    /// 0 for right-handed output coordinates, 1 for left-handed
    pub form: i64,
}

impl TransformationMatrix {
    pub fn new(rotation: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        TransformationMatrix {
            common: DirectoryAttributes::new(),
            rotation,
            translation,
            form: 0,
        }
    }

    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    pub fn translation(offset: Vector3<f64>) -> Self {
        Self::new(Matrix3::identity(), offset)
    }

    /// Rotation by `angle` radians about `axis` through the origin
    pub fn rotation_about(axis: Vector3<f64>, angle: f64) -> Result<Self> {
        if axis.norm() == 0.0 {
            return Err(IgesError::InvalidParameters(
                "rotation axis has zero length".to_string(),
            ));
        }
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle);
        Ok(Self::new(*rotation.matrix(), Vector3::zeros()))
    }

    /// Build from row-major numbers: 9 (rotation only) or 12 (`R11 R12 R13 T1 ...`)
    pub fn from_values(values: &[f64]) -> Result<Self> {
        match values.len() {
            9 => Ok(Self::new(Matrix3::from_row_slice(values), Vector3::zeros())),
            12 => {
                let rotation = Matrix3::from_fn(|r, c| values[r * 4 + c]);
                let translation = Vector3::new(values[3], values[7], values[11]);
                Ok(Self::new(rotation, translation))
            }
            n => Err(IgesError::InvalidParameters(format!(
                "transformation matrix takes 9 or 12 numbers, got {n}"
            ))),
        }
    }

    pub fn with_form(mut self, form: i64) -> Self {
        self.form = form;
        self
    }

    /// Homogeneous 4x4 form
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        let mut matrix = self.rotation.to_homogeneous();
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        matrix
    }

    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotation * point.coords + self.translation)
    }
}

impl Default for TransformationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Geometry for TransformationMatrix {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::TransformationMatrix
    }

    fn form_number(&self) -> i64 {
        self.form
    }

    fn parameters(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(12);
        for row in 0..3 {
            for col in 0..3 {
                values.push(Value::Real(self.rotation[(row, col)]));
            }
            values.push(Value::Real(self.translation[row]));
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

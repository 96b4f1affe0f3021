//! General note entity (type 212)

use super::{DirectoryAttributes, Geometry};
use crate::types::{EntityTypeNumber, LineFontPattern, Value};

/// Annotation text; the parameter values are passed through unchanged
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralNote {
    /// Directory attributes
    pub common: DirectoryAttributes,
    pub form: i64,
    pub values: Vec<Value>,
}

impl GeneralNote {
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        GeneralNote {
            common: DirectoryAttributes::new().with_line_font(LineFontPattern::Solid),
            form: 0,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_form(mut self, form: i64) -> Self {
        self.form = form;
        self
    }
}

impl Geometry for GeneralNote {
    fn entity_type(&self) -> EntityTypeNumber {
        EntityTypeNumber::GeneralNote
    }

    fn form_number(&self) -> i64 {
        self.form
    }

    fn parameters(&self) -> Vec<Value> {
        self.values.clone()
    }

    fn directory(&self) -> &DirectoryAttributes {
        &self.common
    }

    fn directory_mut(&mut self) -> &mut DirectoryAttributes {
        &mut self.common
    }
}

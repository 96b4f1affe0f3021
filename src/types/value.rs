//! Typed parameter values

use super::DirectoryPointer;

/// A single Parameter-section value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Written as a Hollerith string
    String(String),
    Integer(i64),
    Real(f64),
    /// Directory pointer of another entity; `None` until that entity is committed
    Pointer(Option<DirectoryPointer>),
    /// Defaulted parameter, written as an empty field
    Default,
}

impl Value {
    /// True for pointer values that do not reference a committed entity yet
    pub fn is_unresolved_pointer(&self) -> bool {
        matches!(self, Value::Pointer(None))
    }

    /// Short type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Pointer(_) => "pointer",
            Value::Default => "default",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<DirectoryPointer> for Value {
    fn from(pointer: DirectoryPointer) -> Self {
        Value::Pointer(Some(pointer))
    }
}

impl From<Option<DirectoryPointer>> for Value {
    fn from(pointer: Option<DirectoryPointer>) -> Self {
        Value::Pointer(pointer)
    }
}

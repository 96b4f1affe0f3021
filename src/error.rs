//! Error types for igesrust library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for igesrust operations
#[derive(Debug, Error)]
pub enum IgesError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A parameter value has no IGES text representation
    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(String),

    /// An entity was compiled without any parameter tokens
    #[error("Empty parameter record: an entity needs at least one parameter")]
    EmptyRecord,

    /// A pointer parameter was still unresolved when its entity was compiled
    #[error("Missing back reference in {entity}: parameter {index} points to an uncommitted entity")]
    MissingBackReference { entity: String, index: usize },

    /// The transformation matrix pointer names no committed entity
    #[error("Missing transformation matrix in {entity}: directory line {pointer} is not a committed entity")]
    MissingTransform { entity: String, pointer: u32 },

    /// A directory entry value does not fit its 8-column field
    #[error("Directory field {field} overflows 8 columns: {value:?}")]
    DirectoryFieldOverflow { field: &'static str, value: String },

    /// A section grew past the 7-digit sequence number field
    #[error("Section {section} has {lines} lines, more than its sequence field can number")]
    SectionOverflow { section: char, lines: usize },

    /// The entity already carries frozen pointers
    #[error("Entity already committed at directory line {pointer}")]
    AlreadyCommitted { pointer: u32 },

    /// Invalid document or formatting settings
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Settings file could not be parsed
    #[error("Failed to parse settings file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A geometry producer was handed malformed input
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for igesrust operations
pub type Result<T> = std::result::Result<T, IgesError>;

impl From<String> for IgesError {
    fn from(s: String) -> Self {
        IgesError::Custom(s)
    }
}

impl From<&str> for IgesError {
    fn from(s: &str) -> Self {
        IgesError::Custom(s.to_string())
    }
}

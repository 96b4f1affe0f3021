//! Line font patterns for directory entries

use super::DirectoryPointer;

/// IGES line font pattern (directory entry field 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFontPattern {
    /// No pattern specified
    #[default]
    NoPattern,
    Solid,
    Dashed,
    Phantom,
    Centerline,
    Dotted,
    /// Pointer to a Line Font Definition entity (type 304)
    Definition(DirectoryPointer),
}

impl LineFontPattern {
    /// Raw value written into the directory entry
    pub fn number(&self) -> i64 {
        match self {
            LineFontPattern::NoPattern => 0,
            LineFontPattern::Solid => 1,
            LineFontPattern::Dashed => 2,
            LineFontPattern::Phantom => 3,
            LineFontPattern::Centerline => 4,
            LineFontPattern::Dotted => 5,
            LineFontPattern::Definition(pointer) => -i64::from(pointer.line()),
        }
    }
}

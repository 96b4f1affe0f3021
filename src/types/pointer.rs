//! Directory pointer type
//!
//! A directory pointer is the Directory-section line number of an entity's
//! first directory line. It is how entities reference each other.

use std::fmt;
use std::num::NonZeroU32;

/// Line number of an entity's first Directory-section line
///
/// Line 0 does not exist in any IGES section, so a zero pointer is not
/// representable; "unset" is expressed as `Option<DirectoryPointer>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectoryPointer(NonZeroU32);

impl DirectoryPointer {
    /// Create a pointer from a line number; `None` for line 0
    #[inline]
    pub const fn new(line: u32) -> Option<Self> {
        match NonZeroU32::new(line) {
            Some(n) => Some(DirectoryPointer(n)),
            None => None,
        }
    }

    /// Get the raw line number
    #[inline]
    pub const fn line(&self) -> u32 {
        self.0.get()
    }

    /// The pointer of the directory entry committed right after this one
    #[inline]
    pub fn next_entry(&self) -> DirectoryPointer {
        DirectoryPointer(self.0.saturating_add(2))
    }
}

impl From<DirectoryPointer> for u32 {
    fn from(pointer: DirectoryPointer) -> Self {
        pointer.line()
    }
}

impl TryFrom<u32> for DirectoryPointer {
    type Error = crate::error::IgesError;

    fn try_from(line: u32) -> Result<Self, Self::Error> {
        DirectoryPointer::new(line).ok_or_else(|| {
            crate::error::IgesError::InvalidParameters("directory pointer 0 is unset".to_string())
        })
    }
}

impl fmt::Display for DirectoryPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

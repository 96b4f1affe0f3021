//! Color numbers for directory entries

use super::DirectoryPointer;

/// IGES color number (directory entry field 13)
///
/// Values 0-8 select one of the predefined colors. A Color Definition
/// entity is referenced by its negated directory pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// No color assigned (receiver default)
    #[default]
    NoColor,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    /// Pointer to a Color Definition entity (type 314)
    Definition(DirectoryPointer),
}

impl Color {
    /// Create a color from a raw directory field value
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            0 => Some(Color::NoColor),
            1 => Some(Color::Black),
            2 => Some(Color::Red),
            3 => Some(Color::Green),
            4 => Some(Color::Blue),
            5 => Some(Color::Yellow),
            6 => Some(Color::Magenta),
            7 => Some(Color::Cyan),
            8 => Some(Color::White),
            n if n < 0 => u32::try_from(-n)
                .ok()
                .and_then(DirectoryPointer::new)
                .map(Color::Definition),
            _ => None,
        }
    }

    /// Raw value written into the directory entry
    pub fn number(&self) -> i64 {
        match self {
            Color::NoColor => 0,
            Color::Black => 1,
            Color::Red => 2,
            Color::Green => 3,
            Color::Blue => 4,
            Color::Yellow => 5,
            Color::Magenta => 6,
            Color::Cyan => 7,
            Color::White => 8,
            Color::Definition(pointer) => -i64::from(pointer.line()),
        }
    }
}

//! Line weight representation for directory entries

/// Line weight number (directory entry field 12)
///
/// The actual thickness is `gradation * max_width / max_gradations`, both
/// taken from the Global section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LineWeight {
    /// Use the receiving system's default (0)
    #[default]
    ReceiverDefault,
    /// Gradation number, 1..=max line weight gradations
    Gradation(u32),
}

impl LineWeight {
    /// Create a line weight from a raw value
    pub fn from_value(value: u32) -> Self {
        match value {
            0 => LineWeight::ReceiverDefault,
            v => LineWeight::Gradation(v),
        }
    }

    /// Get the raw value
    pub fn value(&self) -> u32 {
        match self {
            LineWeight::ReceiverDefault => 0,
            LineWeight::Gradation(v) => *v,
        }
    }

    /// Thinnest explicit gradation
    pub const THIN: LineWeight = LineWeight::Gradation(1);
}

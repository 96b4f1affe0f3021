//! Running line counters for the Directory and Parameter sections

use super::section::SectionCode;

/// Next free line number per section
///
/// Counters start at 1 and only grow; a line number handed out once is
/// never handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPointerTracker {
    next: [u32; 5],
}

impl SectionPointerTracker {
    pub fn new() -> Self {
        Self { next: [1; 5] }
    }

    /// Next free line of `section` without reserving it
    pub fn peek(&self, section: SectionCode) -> u32 {
        self.next[section.index()]
    }

    /// Reserve `line_count` lines and return the first of them
    pub fn allocate(&mut self, section: SectionCode, line_count: u32) -> u32 {
        let slot = &mut self.next[section.index()];
        let start = *slot;
        *slot = slot.saturating_add(line_count);
        start
    }

    /// Lines handed out so far
    pub fn allocated(&self, section: SectionCode) -> u32 {
        self.peek(section) - 1
    }
}

impl Default for SectionPointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

//! Fixed-column section lines and the Terminate record

use std::fmt;

use crate::error::{IgesError, Result};

/// Columns 1-72 of every line carry data
pub const RECORD_DATA_WIDTH: usize = 72;

/// Full width of every emitted line
pub const RECORD_WIDTH: usize = 80;

/// Largest sequence number the 7-column counter can hold
pub const MAX_SEQUENCE: usize = 9_999_999;

/// One-letter section identifier written in column 73
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionCode {
    Start,
    Global,
    Directory,
    Parameter,
    Terminate,
}

impl SectionCode {
    pub fn letter(&self) -> char {
        match self {
            SectionCode::Start => 'S',
            SectionCode::Global => 'G',
            SectionCode::Directory => 'D',
            SectionCode::Parameter => 'P',
            SectionCode::Terminate => 'T',
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Ordered data lines of one section
///
/// Lines are stored without their sequence field; numbering happens at
/// render time so it is always contiguous from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    code: SectionCode,
    lines: Vec<String>,
}

impl Section {
    pub fn new(code: SectionCode) -> Self {
        Self {
            code,
            lines: Vec::new(),
        }
    }

    pub fn code(&self) -> SectionCode {
        self.code
    }

    /// Append one data line (at most 72 columns)
    pub fn push(&mut self, line: impl Into<String>) -> Result<()> {
        let line = line.into();
        if line.len() > RECORD_DATA_WIDTH {
            return Err(self.too_wide(&line));
        }
        self.lines.push(line);
        Ok(())
    }

    /// Append several lines; nothing is appended if any line is too wide
    pub fn extend<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let lines: Vec<String> = lines.into_iter().collect();
        self.check_width(&lines)?;
        self.lines.extend(lines);
        Ok(())
    }

    /// Fail unless every line fits the 72-column data area
    pub fn check_width<S: AsRef<str>>(&self, lines: &[S]) -> Result<()> {
        match lines.iter().find(|line| line.as_ref().len() > RECORD_DATA_WIDTH) {
            Some(line) => Err(self.too_wide(line.as_ref())),
            None => Ok(()),
        }
    }

    fn too_wide(&self, line: &str) -> IgesError {
        IgesError::Custom(format!(
            "section {} line exceeds {RECORD_DATA_WIDTH} columns: {line:?}",
            self.code
        ))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Data lines without the section letter and sequence number
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render every line at 80 columns into `out`
    pub fn render_into(&self, out: &mut String) -> Result<()> {
        if self.lines.len() > MAX_SEQUENCE {
            return Err(IgesError::SectionOverflow {
                section: self.code.letter(),
                lines: self.lines.len(),
            });
        }
        for (i, line) in self.lines.iter().enumerate() {
            out.push_str(&format_record(line, self.code, i + 1));
            out.push('\n');
        }
        Ok(())
    }
}

/// Pad `data` to 72 columns and stamp the section letter and sequence number
pub fn format_record(data: &str, code: SectionCode, sequence: usize) -> String {
    format!(
        "{data:<width$}{}{sequence:>7}",
        code.letter(),
        width = RECORD_DATA_WIDTH
    )
}

/// The single Terminate line holding the line count of each section
pub fn terminate_line(start: usize, global: usize, directory: usize, parameter: usize) -> String {
    format!(
        "S{start:>7}G{global:>7}D{directory:>7}P{parameter:>7}{:>41}{:>7}",
        SectionCode::Terminate.letter(),
        1
    )
}

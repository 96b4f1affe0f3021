//! Shared test utilities for igesrust integration tests.
//!
//! Rendered files are parsed back into fixed-column records so tests can
//! check sequence numbers, section letters and the D/P pointers.

#![allow(dead_code)]

pub mod builders;

use igesrust::{GlobalParameters, IgesDocument};

/// Timestamp used wherever output must be reproducible
pub const FIXED_TIMESTAMP: &str = "20240102.030405";

/// Empty document with a fixed timestamp
pub fn fixed_document() -> IgesDocument {
    IgesDocument::with_global(GlobalParameters::new().with_timestamp(FIXED_TIMESTAMP))
        .expect("default parameters are valid")
}

/// One 80-column record of a rendered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Columns 1-72
    pub data: String,
    /// Column 73
    pub section: char,
    /// Columns 74-80
    pub sequence: usize,
}

impl Record {
    /// 8-column Directory field, numbered from 1
    pub fn field(&self, index: usize) -> &str {
        let start = (index - 1) * 8;
        self.data[start..start + 8].trim()
    }

    /// Directory back pointer stored in columns 66-72 of a Parameter line
    pub fn back_pointer(&self) -> usize {
        self.data[65..72].trim().parse().expect("numeric back pointer")
    }
}

/// Split rendered text into records, asserting the fixed layout on the way
pub fn parse_records(text: &str) -> Vec<Record> {
    assert!(text.ends_with('\n'), "file must end with a newline");
    text.lines()
        .map(|line| {
            assert_eq!(line.len(), 80, "line is not 80 columns: {line:?}");
            Record {
                data: line[..72].to_string(),
                section: line[72..73].chars().next().expect("section letter"),
                sequence: line[73..80].trim().parse().expect("numeric sequence"),
            }
        })
        .collect()
}

/// Records of one section in file order
pub fn section(records: &[Record], letter: char) -> Vec<Record> {
    records.iter().filter(|r| r.section == letter).cloned().collect()
}

/// Rendered Parameter record of the entity at Directory line `directory`
///
/// Data columns are joined with trailing padding removed.
pub fn parameter_record(records: &[Record], directory: usize) -> String {
    section(records, 'P')
        .iter()
        .filter(|r| r.back_pointer() == directory)
        .map(|r| r.data[..64].trim_end().to_string())
        .collect()
}

/// Counts stored on the Terminate line, in S G D P order
pub fn terminate_counts(records: &[Record]) -> [usize; 4] {
    let last = records.last().expect("terminate line");
    assert_eq!(last.section, 'T');
    let field = |i: usize| -> usize {
        let chunk = &last.data[i * 8..i * 8 + 8];
        assert_eq!(&chunk[..1], ["S", "G", "D", "P"][i]);
        chunk[1..].trim().parse().expect("numeric count")
    };
    [field(0), field(1), field(2), field(3)]
}

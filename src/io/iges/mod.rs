//! IGES writer module
//!
//! Encoding runs leaf-first: [`ValueFormatter`] turns values into tokens,
//! [`LineWrapper`] packs tokens into fixed-width lines,
//! [`SectionPointerTracker`] hands out line numbers and
//! [`EntityRecordCompiler`] produces the Directory and Parameter lines of
//! one entity. [`IgesWriter`] writes a rendered document out.

mod line_wrapper;
mod pointer_tracker;
mod record_compiler;
mod section;
mod value_formatter;

pub use line_wrapper::{LineWrapper, BACK_POINTER_COLUMN, BACK_POINTER_WIDTH};
pub use pointer_tracker::SectionPointerTracker;
pub use record_compiler::{CompiledRecord, EntityRecordCompiler, DIRECTORY_FIELD_WIDTH};
pub use section::{
    format_record, terminate_line, Section, SectionCode, MAX_SEQUENCE, RECORD_DATA_WIDTH,
    RECORD_WIDTH,
};
pub use value_formatter::ValueFormatter;

use crate::document::IgesDocument;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// IGES file writer
pub struct IgesWriter<'a> {
    document: &'a IgesDocument,
}

impl<'a> IgesWriter<'a> {
    /// Create a writer for a document
    pub fn new(document: &'a IgesDocument) -> Self {
        Self { document }
    }

    /// Write to a file
    ///
    /// The document is rendered before the file is created, so a document
    /// that cannot be encoded never truncates an existing file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.document.render()?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let text = self.document.render()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }
}

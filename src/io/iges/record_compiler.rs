//! Entity to Directory/Parameter record compilation

use std::fmt::Display;

use tracing::debug;

use super::line_wrapper::LineWrapper;
use super::pointer_tracker::SectionPointerTracker;
use super::section::SectionCode;
use super::value_formatter::ValueFormatter;
use crate::entities::Entity;
use crate::error::{IgesError, Result};
use crate::global::GlobalParameters;
use crate::types::DirectoryPointer;

/// Width of one Directory-section field
pub const DIRECTORY_FIELD_WIDTH: usize = 8;

/// Lines of one compiled entity plus the pointers that tie them together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRecord {
    pub directory_pointer: DirectoryPointer,
    pub parameter_pointer: u32,
    pub directory_lines: [String; 2],
    pub parameter_lines: Vec<String>,
}

impl CompiledRecord {
    pub fn parameter_line_count(&self) -> u32 {
        self.parameter_lines.len() as u32
    }
}

/// Compiles entities against one document's Global settings
#[derive(Debug, Clone)]
pub struct EntityRecordCompiler<'a> {
    global: &'a GlobalParameters,
    formatter: ValueFormatter,
    wrapper: LineWrapper,
}

impl<'a> EntityRecordCompiler<'a> {
    pub fn new(global: &'a GlobalParameters) -> Result<Self> {
        global.validate()?;
        let wrapper = LineWrapper::new(
            global.parameter_delimiter,
            global.record_delimiter,
            global.parameter_width(),
        )?;
        Ok(Self {
            global,
            formatter: global.formatter(),
            wrapper,
        })
    }

    /// Compile `entity` at the tracker's next free lines
    ///
    /// The tracker only advances when compilation succeeds.
    pub fn compile(
        &self,
        entity: &Entity,
        tracker: &mut SectionPointerTracker,
    ) -> Result<CompiledRecord> {
        let directory_line = tracker.peek(SectionCode::Directory);
        let directory_pointer = DirectoryPointer::new(directory_line)
            .ok_or_else(|| IgesError::Custom("directory counter is at line 0".to_string()))?;

        let tokens = self.parameter_tokens(entity)?;
        let parameter_lines = self.wrapper.with_back_pointer(directory_line).wrap(&tokens)?;
        let line_count = u32::try_from(parameter_lines.len()).map_err(|_| IgesError::SectionOverflow {
            section: SectionCode::Parameter.letter(),
            lines: parameter_lines.len(),
        })?;
        let parameter_pointer = tracker.peek(SectionCode::Parameter);

        let directory_lines = self.directory_lines(entity, parameter_pointer, line_count)?;

        tracker.allocate(SectionCode::Directory, 2);
        tracker.allocate(SectionCode::Parameter, line_count);

        debug!(
            entity = %entity.describe(),
            directory = directory_line,
            parameter = parameter_pointer,
            parameter_lines = line_count,
            "compiled entity record"
        );

        Ok(CompiledRecord {
            directory_pointer,
            parameter_pointer,
            directory_lines,
            parameter_lines,
        })
    }

    fn parameter_tokens(&self, entity: &Entity) -> Result<Vec<String>> {
        if entity.parameters().is_empty() {
            return Err(IgesError::EmptyRecord);
        }
        let mut tokens = Vec::with_capacity(entity.parameters().len() + 3);
        tokens.push(entity.entity_type().code().to_string());

        for (i, value) in entity.parameters().iter().enumerate() {
            if value.is_unresolved_pointer() {
                return Err(IgesError::MissingBackReference {
                    entity: entity.describe(),
                    index: i + 1,
                });
            }
            tokens.push(self.formatter.format(value)?);
        }

        let extended = entity
            .extended_data()
            .unwrap_or_else(|| self.global.extended_data_for(entity.entity_type().code()));
        if extended {
            tokens.push("0".to_string());
            tokens.push("0".to_string());
        }
        Ok(tokens)
    }

    fn directory_lines(
        &self,
        entity: &Entity,
        parameter_pointer: u32,
        parameter_line_count: u32,
    ) -> Result<[String; 2]> {
        let attrs = entity.directory();
        let entity_type = entity.entity_type().code();
        let transform = attrs.transform.map_or(0, |pointer| pointer.line());
        let subscript = attrs.subscript.map(|s| s.to_string()).unwrap_or_default();

        let first = [
            field("entity type", entity_type)?,
            field("parameter pointer", parameter_pointer)?,
            field("structure", attrs.structure)?,
            field("line font pattern", attrs.line_font.number())?,
            field("level", attrs.level)?,
            field("view", attrs.view)?,
            field("transformation matrix", transform)?,
            field("label display", attrs.label_display)?,
            field("status number", attrs.status)?,
        ]
        .concat();

        let second = [
            field("entity type", entity_type)?,
            field("line weight", attrs.line_weight.value())?,
            field("color", attrs.color.number())?,
            field("parameter line count", parameter_line_count)?,
            field("form number", entity.form_number())?,
            field("reserved", "")?,
            field("reserved", "")?,
            field("entity label", &attrs.label)?,
            field("entity subscript", subscript)?,
        ]
        .concat();

        Ok([first, second])
    }
}

/// Right-justify a value in one 8-column Directory field
fn field(name: &'static str, value: impl Display) -> Result<String> {
    let text = value.to_string();
    if text.len() > DIRECTORY_FIELD_WIDTH {
        return Err(IgesError::DirectoryFieldOverflow { field: name, value: text });
    }
    Ok(format!("{text:>width$}", width = DIRECTORY_FIELD_WIDTH))
}

//! IGES document structure
//!
//! [`IgesDocument`] owns the four data sections of a file and assembles them
//! with the Terminate line. Entities are compiled the moment they are
//! committed, in caller order, so an entity can only reference entities that
//! were committed before it.

use std::cell::Cell;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::config::IgesSettings;
use crate::entities::Entity;
use crate::error::{IgesError, Result};
use crate::global::GlobalParameters;
use crate::io::iges::{
    terminate_line, EntityRecordCompiler, IgesWriter, Section, SectionCode, SectionPointerTracker,
    RECORD_DATA_WIDTH,
};
use crate::types::{DirectoryPointer, EntityTypeNumber, Value};

/// Where a document is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    /// Nothing committed and nothing rendered yet
    Empty,
    /// Entities committed since the last render
    Accumulating,
    /// Rendered, and nothing committed since
    Finalized,
}

/// Registry entry kept for every committed entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedEntity {
    pub entity_type: EntityTypeNumber,
    pub form_number: i64,
    pub label: String,
    pub directory_pointer: DirectoryPointer,
    pub parameter_pointer: u32,
    pub parameter_line_count: u32,
}

/// An IGES file under construction
#[derive(Debug, Clone)]
pub struct IgesDocument {
    /// Free-form Start section text, after the generated header line
    prolog: Vec<String>,
    global: GlobalParameters,
    tracker: SectionPointerTracker,
    directory: Section,
    parameter: Section,
    /// Committed entities in commit order, keyed by directory pointer
    entities: IndexMap<DirectoryPointer, CommittedEntity>,
    /// Entity count at the last successful render
    rendered_at: Cell<Option<usize>>,
}

impl IgesDocument {
    /// Create a new empty document with default Global parameters
    pub fn new() -> Self {
        IgesDocument {
            prolog: Vec::new(),
            global: GlobalParameters::new(),
            tracker: SectionPointerTracker::new(),
            directory: Section::new(SectionCode::Directory),
            parameter: Section::new(SectionCode::Parameter),
            entities: IndexMap::new(),
            rendered_at: Cell::new(None),
        }
    }

    /// Create a document with specific Global parameters
    pub fn with_global(global: GlobalParameters) -> Result<Self> {
        global.validate()?;
        let mut doc = Self::new();
        doc.global = global;
        Ok(doc)
    }

    /// Create a document configured from a settings file
    pub fn from_settings(settings: &IgesSettings) -> Result<Self> {
        let mut global = GlobalParameters::new();
        settings.apply(&mut global)?;
        let mut doc = Self::with_global(global)?;
        doc.set_prolog(settings.start.prolog.iter().cloned())?;
        Ok(doc)
    }

    // ==================== Start section ====================

    pub fn prolog(&self) -> &[String] {
        &self.prolog
    }

    /// Replace the prolog; fails without changes if any line is not ASCII
    pub fn set_prolog<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        lines.iter().try_for_each(|line| check_prolog_line(line))?;
        self.prolog = lines;
        Ok(())
    }

    pub fn add_prolog_line(&mut self, line: impl Into<String>) -> Result<()> {
        let line = line.into();
        check_prolog_line(&line)?;
        self.prolog.push(line);
        Ok(())
    }

    /// Start section data lines: the generated header, then the prolog
    ///
    /// Prolog lines wider than the data area continue on the next line.
    pub fn start_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("IGES file written by igesrust {}", crate::VERSION)];
        for line in &self.prolog {
            if line.is_empty() {
                lines.push(String::new());
                continue;
            }
            // ASCII only, so every byte boundary is a char boundary
            lines.extend(
                line.as_bytes()
                    .chunks(RECORD_DATA_WIDTH)
                    .map(|chunk| String::from_utf8_lossy(chunk).into_owned()),
            );
        }
        lines
    }

    // ==================== Global section ====================

    pub fn global(&self) -> &GlobalParameters {
        &self.global
    }

    /// Mutable Global parameters, available only until the first commit
    ///
    /// Entities already compiled depend on the delimiters, precision and
    /// line length, so those settings freeze with the first commit.
    pub fn global_mut(&mut self) -> Option<&mut GlobalParameters> {
        if self.entities.is_empty() {
            Some(&mut self.global)
        } else {
            None
        }
    }

    // ==================== Entities ====================

    /// Compile an entity and append its records
    ///
    /// On success the entity's pointers are frozen and its directory pointer
    /// is returned for use in later entities' parameters. On failure the
    /// document and the entity are left unchanged.
    pub fn commit(&mut self, entity: &mut Entity) -> Result<DirectoryPointer> {
        if let Some(pointer) = entity.directory_pointer() {
            return Err(IgesError::AlreadyCommitted {
                pointer: pointer.line(),
            });
        }

        self.check_references(entity)?;

        let compiler = EntityRecordCompiler::new(&self.global)?;
        let mut tracker = self.tracker.clone();
        let record = compiler.compile(entity, &mut tracker)?;
        let line_count = record.parameter_line_count();
        self.directory.check_width(&record.directory_lines)?;
        self.parameter.check_width(&record.parameter_lines)?;

        entity.freeze(record.directory_pointer, record.parameter_pointer, line_count)?;

        self.tracker = tracker;
        self.directory.extend(record.directory_lines)?;
        self.parameter.extend(record.parameter_lines)?;
        self.entities.insert(
            record.directory_pointer,
            CommittedEntity {
                entity_type: entity.entity_type(),
                form_number: entity.form_number(),
                label: entity.directory().label.clone(),
                directory_pointer: record.directory_pointer,
                parameter_pointer: record.parameter_pointer,
                parameter_line_count: line_count,
            },
        );

        debug!(
            entity = %entity.describe(),
            directory_pointer = record.directory_pointer.line(),
            parameter_pointer = record.parameter_pointer,
            parameter_lines = line_count,
            "committed entity"
        );
        Ok(record.directory_pointer)
    }

    /// Every pointer the entity carries must name an entity committed earlier
    fn check_references(&self, entity: &Entity) -> Result<()> {
        for (i, value) in entity.parameters().iter().enumerate() {
            if let Value::Pointer(Some(pointer)) = value {
                if !self.entities.contains_key(pointer) {
                    return Err(IgesError::MissingBackReference {
                        entity: entity.describe(),
                        index: i + 1,
                    });
                }
            }
        }
        if let Some(pointer) = entity.directory().transform {
            if !self.entities.contains_key(&pointer) {
                return Err(IgesError::MissingTransform {
                    entity: entity.describe(),
                    pointer: pointer.line(),
                });
            }
        }
        Ok(())
    }

    /// Commit an owned entity or catalog geometry
    pub fn add(&mut self, entity: impl Into<Entity>) -> Result<DirectoryPointer> {
        let mut entity = entity.into();
        self.commit(&mut entity)
    }

    /// Registry entry of a committed entity
    pub fn entity(&self, pointer: DirectoryPointer) -> Option<&CommittedEntity> {
        self.entities.get(&pointer)
    }

    /// Committed entities in commit order
    pub fn entities(&self) -> impl Iterator<Item = &CommittedEntity> {
        self.entities.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Directory section data lines, without sequence numbers
    pub fn directory_lines(&self) -> &[String] {
        self.directory.lines()
    }

    /// Parameter section data lines, without sequence numbers
    pub fn parameter_lines(&self) -> &[String] {
        self.parameter.lines()
    }

    pub fn state(&self) -> DocumentState {
        match self.rendered_at.get() {
            Some(count) if count == self.entities.len() => DocumentState::Finalized,
            _ if self.entities.is_empty() => DocumentState::Empty,
            _ => DocumentState::Accumulating,
        }
    }

    // ==================== Output ====================

    /// Assemble the complete file text
    ///
    /// Every call recomputes the Start and Global sections and the
    /// Terminate counts, so rendering twice without a commit in between
    /// yields identical text. Committing after a render makes the earlier
    /// text stale.
    pub fn render(&self) -> Result<String> {
        let mut start = Section::new(SectionCode::Start);
        start.extend(self.start_lines())?;
        let mut global = Section::new(SectionCode::Global);
        global.extend(self.global.render_lines()?)?;

        let line_total = start.len() + global.len() + self.directory.len() + self.parameter.len() + 1;
        let mut out = String::with_capacity(line_total * 81);
        start.render_into(&mut out)?;
        global.render_into(&mut out)?;
        self.directory.render_into(&mut out)?;
        self.parameter.render_into(&mut out)?;
        out.push_str(&terminate_line(
            start.len(),
            global.len(),
            self.directory.len(),
            self.parameter.len(),
        ));
        out.push('\n');

        self.rendered_at.set(Some(self.entities.len()));
        Ok(out)
    }

    /// Write the rendered document to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        IgesWriter::new(self).write_to_writer(writer)
    }

    /// Write the rendered document to a file
    ///
    /// A failed save leaves the document untouched and can be retried.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match IgesWriter::new(self).write_to_file(path) {
            Ok(()) => {
                info!(
                    path = %path.display(),
                    entities = self.entities.len(),
                    "saved IGES file"
                );
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to save IGES file");
                Err(err)
            }
        }
    }
}

fn check_prolog_line(line: &str) -> Result<()> {
    if line.is_ascii() {
        Ok(())
    } else {
        Err(IgesError::UnsupportedValueType(format!(
            "prolog line {line:?} contains non-ASCII characters"
        )))
    }
}

impl Default for IgesDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CompositeCurve, Line, Point};

    fn document() -> IgesDocument {
        let global = GlobalParameters::new().with_timestamp("20240102.030405");
        IgesDocument::with_global(global).unwrap()
    }

    #[test]
    fn test_new_document_is_empty() {
        let doc = IgesDocument::new();
        assert_eq!(doc.state(), DocumentState::Empty);
        assert_eq!(doc.entity_count(), 0);
        assert!(doc.directory_lines().is_empty());
    }

    #[test]
    fn test_commit_assigns_pointers() {
        let mut doc = document();
        let mut point = Entity::from(Point::new(3.5, 15.0, 0.0));
        let pointer = doc.commit(&mut point).unwrap();
        assert_eq!(pointer.line(), 1);
        assert_eq!(point.directory_pointer(), Some(pointer));
        assert_eq!(point.parameter_pointer(), Some(1));
        assert_eq!(point.parameter_line_count(), Some(1));
        assert_eq!(doc.directory_lines().len(), 2);
        assert_eq!(doc.state(), DocumentState::Accumulating);
    }

    #[test]
    fn test_second_commit_rejected() {
        let mut doc = document();
        let mut point = Entity::from(Point::new(0.0, 0.0, 0.0));
        doc.commit(&mut point).unwrap();
        let err = doc.commit(&mut point).unwrap_err();
        assert!(matches!(err, IgesError::AlreadyCommitted { pointer: 1 }));
        assert_eq!(doc.entity_count(), 1);
    }

    #[test]
    fn test_failed_commit_leaves_document_unchanged() {
        let mut doc = document();
        doc.add(Point::new(1.0, 1.0, 1.0)).unwrap();
        let before = doc.render().unwrap();

        let mut curve = Entity::from(CompositeCurve::new([None::<DirectoryPointer>]));
        assert!(doc.commit(&mut curve).is_err());
        assert!(!curve.is_committed());
        assert_eq!(doc.render().unwrap(), before);

        let next = doc.add(Point::new(2.0, 2.0, 2.0)).unwrap();
        assert_eq!(next.line(), 3);
    }

    #[test]
    fn test_global_frozen_after_commit() {
        let mut doc = document();
        doc.global_mut().unwrap().author = "Someone".to_string();
        doc.add(Line::from_coords([0.0; 3], [1.0; 3])).unwrap();
        assert!(doc.global_mut().is_none());
        assert_eq!(doc.global().author, "Someone");
    }

    #[test]
    fn test_state_machine() {
        let mut doc = document();
        doc.add(Point::new(0.0, 0.0, 0.0)).unwrap();
        doc.render().unwrap();
        assert_eq!(doc.state(), DocumentState::Finalized);
        doc.add(Point::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(doc.state(), DocumentState::Accumulating);
    }

    #[test]
    fn test_registry_in_commit_order() {
        let mut doc = document();
        let a = doc.add(Line::from_coords([0.0; 3], [1.0, 0.0, 0.0])).unwrap();
        let b = doc.add(Line::from_coords([1.0, 0.0, 0.0], [1.0, 1.0, 0.0])).unwrap();
        let c = doc.add(CompositeCurve::new([a, b])).unwrap();
        let order: Vec<u32> = doc.entities().map(|e| e.directory_pointer.line()).collect();
        assert_eq!(order, vec![1, 3, 5]);
        assert_eq!(doc.entity(c).unwrap().entity_type, EntityTypeNumber::CompositeCurve);
    }

    #[test]
    fn test_long_prolog_lines_are_split() {
        let mut doc = document();
        doc.add_prolog_line("x".repeat(100)).unwrap();
        let lines = doc.start_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].len(), 72);
        assert_eq!(lines[2].len(), 28);
    }

    #[test]
    fn test_non_ascii_prolog_rejected() {
        let mut doc = document();
        doc.add_prolog_line("Bracket").unwrap();
        let err = doc.add_prolog_line("é".repeat(72)).unwrap_err();
        assert!(matches!(err, IgesError::UnsupportedValueType(_)));
        assert!(doc.set_prolog(["ok", "naïve"]).is_err());
        assert_eq!(doc.prolog(), ["Bracket"]);
        assert!(doc.render().is_ok());
    }

    #[test]
    fn test_pointer_to_uncommitted_line_rejected() {
        let mut doc = document();
        let line = doc.add(Line::from_coords([0.0; 3], [1.0, 0.0, 0.0])).unwrap();
        let before = doc.render().unwrap();

        let err = doc
            .add(CompositeCurve::new([Some(line), DirectoryPointer::new(99)]))
            .unwrap_err();
        match err {
            IgesError::MissingBackReference { entity, index } => {
                assert_eq!(entity, "CompositeCurve (102/0)");
                assert_eq!(index, 3);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(doc.entity_count(), 1);
        assert_eq!(doc.render().unwrap(), before);
    }

    #[test]
    fn test_transform_must_be_committed() {
        let mut doc = document();
        let mut point = Entity::from(Point::new(0.0, 0.0, 0.0));
        point.directory_mut().transform = DirectoryPointer::new(7);
        let err = doc.commit(&mut point).unwrap_err();
        assert!(matches!(err, IgesError::MissingTransform { pointer: 7, .. }));
        assert!(!point.is_committed());
        assert_eq!(doc.entity_count(), 0);
    }

    #[test]
    fn test_entity_cannot_reference_itself() {
        let mut doc = document();
        let curve = CompositeCurve::new([DirectoryPointer::new(1)]);
        assert!(matches!(
            doc.add(curve),
            Err(IgesError::MissingBackReference { index: 2, .. })
        ));
    }
}

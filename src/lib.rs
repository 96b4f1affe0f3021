//! # igesrust
//!
//! A pure Rust library for writing CAD geometry in the IGES exchange format.
//!
//! IGES files are fixed-column text: every line is 80 characters, split into
//! Start, Global, Directory, Parameter and Terminate sections. Each entity
//! occupies two Directory lines and one or more Parameter lines, and the two
//! sections point at each other by line number. This crate does the
//! bookkeeping: values are formatted, wrapped into lines and numbered, and
//! entities reference each other through the directory pointers returned on
//! commit.
//!
//! ## Features
//!
//! - Geometry catalog: points, lines, arcs, polylines, splines, planes,
//!   surfaces of revolution, trimmed surfaces, spheres, tori, groups,
//!   circular arrays and more
//! - Configurable Global section (delimiters, units, precision, authoring
//!   data), loadable from a TOML settings file
//! - Deterministic output for fixed timestamps
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use igesrust::{CircularArc, CompositeCurve, IgesDocument, Line, Point3};
//!
//! let mut doc = IgesDocument::new();
//! let edge = doc.add(Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)))?;
//! let arc = doc.add(CircularArc::new(
//!     Point3::new(10.0, 5.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     Point3::new(10.0, 10.0, 0.0),
//! ))?;
//! doc.add(CompositeCurve::new([edge, arc]))?;
//! doc.save("profile.igs")?;
//! # Ok::<(), igesrust::error::IgesError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`IgesDocument`] - owns the sections, commits entities, renders and saves
//! - [`Entity`] - the generic record; catalog types convert into it through
//!   the [`Geometry`] trait
//! - [`io::iges`] - value formatting, line wrapping, pointer tracking and
//!   record compilation

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod document;
pub mod entities;
pub mod error;
pub mod global;
pub mod io;
pub mod types;

// Re-export commonly used types
pub use error::{IgesError, Result};
pub use types::{
    Color, DirectoryPointer, EntityTypeNumber, LineFontPattern, LineWeight, ModelUnits, Point3,
    StatusNumber, Value, Vector3,
};

// Re-export entity types
pub use entities::{
    CircularArc, CircularArray, CompositeCurve, CurveOnSurface, DirectoryAttributes, Entity,
    GeneralNote, Geometry, Line, Plane, Point, Polyline, RationalBSplineSurface, RevolvedSurface,
    Sphere, SplineCurve, SubfigureDefinition, TabulatedCylinder, Torus, TransformationMatrix,
    TrimmedSurface,
};

// Re-export document and settings
pub use config::IgesSettings;
pub use document::{CommittedEntity, DocumentState, IgesDocument};
pub use global::GlobalParameters;

// Re-export I/O types
pub use io::iges::IgesWriter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

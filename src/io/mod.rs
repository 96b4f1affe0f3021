//! I/O module for writing IGES files

pub mod iges;

pub use iges::IgesWriter;

//! Structure report for documents the extractor does not recognise.
//!
//! Used by `--debug`: it only describes the document and never writes output files.

pub mod report;

pub use report::{MAX_DEPTH, write_structure_report};

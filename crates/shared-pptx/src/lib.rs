//! Shared PPTX handling utilities
//!
//! Opens a PowerPoint (.pptx) archive and exposes its slides through the
//! [`shared_types::SlideText`] interface: the text of every text-bearing
//! shape on each slide, followed by the text of its layout's shapes.

pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod fixture;
pub mod parser;

pub use error::PptxError;
pub use parser::PptxDocument;

//! Front-end library copier
//!
//! Copies the `dist` folders of a fixed set of npm packages into the web root.

pub mod copier;
pub mod descriptor;
pub mod error;
pub mod fs;

pub use copier::{CopyOutcome, CopyReport, LibraryCopier, DEFAULT_OUTPUT_ROOT};
pub use descriptor::{LibraryDescriptor, LIBRARIES};
pub use error::CopyError;

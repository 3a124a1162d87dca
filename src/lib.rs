//! GENCAD pin extraction library
//!
//! Parses the SHAPES, COMPONENTS and SIGNALS sections of a GENCAD board
//! file, places every shape pin on the board and writes the result as CSV
//! tables for visualization tools.

pub mod error;
pub mod export;
pub mod fixup;
pub mod gencad;
pub mod geometry;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod resolve;

// Re-export commonly used types
pub use error::{GencadError, Result};
pub use gencad::{Component, Design, Endpoint, OutlineSegment, Shape, ShapePin, Signal};
pub use pipeline::{convert, load_board, ResolvedBoard};
pub use report::{LogReporter, RecordingReporter, Reporter};
pub use resolve::{resolve_pins, ResolvedPin};

//! Drum pattern wire format.
//!
//! Follows a layered structure:
//! - `layout`: format revisions and their fixed dimensions
//! - `reader`: bounds-checked access to instrument chunks
//! - `validate`: length and value-range checks
//! - `parser`: reshaping bytes into instruments and notes
//! - `error`: validation errors with the offending counts or values
//!
//! Everything here is pure; decoding the Base64 text and rendering the grid
//! live in sibling modules.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod validate;

pub use error::ValidationError;
pub use layout::{MAX_NOTE_VALUE, NoteLayout, PatternFormat};
pub use parser::parse_pattern;
pub use validate::validate_pattern;

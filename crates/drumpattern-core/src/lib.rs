//! Core library for validating Internet Drum Pattern payloads.
//!
//! This crate implements the pipeline used by the CLI: Base64 text is decoded
//! into bytes, the bytes are checked against a fixed `PatternFormat`, then
//! reshaped into instruments and notes and rendered as a text grid. Every stage
//! is a pure function; the caller decides how to print results and errors.
//!
//! Invariants:
//! - A pattern is only structured from a buffer of exactly
//!   `PatternFormat::total_bytes()` bytes.
//! - Every note value is 7-bit (`0..=0x7F`).
//! - Rendering is deterministic and depends only on the pattern and format.
//!
//! Version française (résumé):
//! Cette crate décode un motif Base64, vérifie sa taille et la plage de chaque
//! octet selon le `PatternFormat` choisi, le restructure en instruments et
//! notes, puis produit une grille hexadécimale. Aucune E/S dans le cœur.
//!
//! # Examples
//! ```
//! use drumpattern_core::{PatternFormat, check_pattern, render_pattern};
//!
//! let format = PatternFormat::VELOCITY_ONLY;
//! let text = "AAAA".repeat(format.total_bytes() / 3);
//! let pattern = check_pattern(&text, &format)?;
//! let grid = render_pattern(&pattern, &format);
//! assert_eq!(grid.lines().count(), 12);
//! # Ok::<(), drumpattern_core::PatternError>(())
//! ```

use serde::{Deserialize, Serialize};

mod decode;
pub mod pattern;
mod pipeline;
mod render;

pub use decode::{DecodeError, decode_pattern};
pub use pattern::{
    MAX_NOTE_VALUE, NoteLayout, PatternFormat, ValidationError, parse_pattern, validate_pattern,
};
pub use pipeline::{PatternError, check_pattern};
pub use render::render_pattern;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// A full drum pattern: one row per instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub instruments: Vec<Instrument>,
}

/// One instrument row, notes in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub notes: Vec<Note>,
}

/// A single step of an instrument row.
///
/// # Examples
/// ```
/// use drumpattern_core::Note;
///
/// let note = Note::with_length(0x40, 0x7F);
/// assert_eq!(note.length, Some(0x40));
/// assert_eq!(Note::velocity_only(0x10).length, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note length; absent in velocity-only formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u8>,
    pub velocity: u8,
}

impl Note {
    pub const fn with_length(length: u8, velocity: u8) -> Self {
        Self {
            length: Some(length),
            velocity,
        }
    }

    pub const fn velocity_only(velocity: u8) -> Self {
        Self {
            length: None,
            velocity,
        }
    }
}

/// Structured pattern plus the metadata needed to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Name of the format revision the pattern was checked against.
    pub format: String,
    /// Byte count the format requires.
    pub total_bytes: usize,
    pub pattern: Pattern,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Wrap a checked pattern into a versioned report.
///
/// # Examples
/// ```
/// use drumpattern_core::{Pattern, PatternFormat, make_report};
///
/// let pattern = Pattern { instruments: Vec::new() };
/// let report = make_report(&PatternFormat::STANDARD, pattern);
/// assert_eq!(report.report_version, drumpattern_core::REPORT_VERSION);
/// assert_eq!(report.total_bytes, 512);
/// ```
pub fn make_report(format: &PatternFormat, pattern: Pattern) -> PatternReport {
    PatternReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "internet-drum-pattern-validator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        format: format.name.to_string(),
        total_bytes: format.total_bytes(),
        pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_only_notes_omit_length() {
        let report = make_report(
            &PatternFormat::VELOCITY_ONLY,
            Pattern {
                instruments: vec![Instrument {
                    notes: vec![Note::velocity_only(0x20)],
                }],
            },
        );

        let value = serde_json::to_value(&report).expect("report json");
        let note = &value["pattern"]["instruments"][0]["notes"][0];
        assert!(note.get("length").is_none());
        assert_eq!(note["velocity"], 0x20);
        assert_eq!(value["format"], "velocity");
        assert_eq!(value["total_bytes"], 192);
    }

    #[test]
    fn notes_round_trip_through_json() {
        let pattern = Pattern {
            instruments: vec![Instrument {
                notes: vec![Note::with_length(1, 2), Note::velocity_only(3)],
            }],
        };

        let json = serde_json::to_string(&pattern).expect("pattern json");
        let back: Pattern = serde_json::from_str(&json).expect("parse pattern");
        assert_eq!(back, pattern);
    }
}

use super::error::ValidationError;
use super::layout::{NoteLayout, PatternFormat};
use super::reader::PatternReader;
use crate::{Instrument, Note, Pattern};

/// Reshape a validated buffer into instruments and notes.
///
/// The buffer is expected to have passed [`validate_pattern`]; its length is
/// re-checked so a short or long buffer yields an error rather than a panic.
/// Value ranges are not re-checked.
///
/// [`validate_pattern`]: super::validate_pattern
pub fn parse_pattern(data: &[u8], format: &PatternFormat) -> Result<Pattern, ValidationError> {
    let reader = PatternReader::new(data, format);
    reader.require_exact_len()?;

    let mut instruments = Vec::with_capacity(format.instruments);
    for index in 0..format.instruments {
        let chunk = reader.instrument(index)?;
        let notes = chunk
            .chunks_exact(format.bytes_per_note())
            .map(|group| parse_note(group, format.note_layout))
            .collect();
        instruments.push(Instrument { notes });
    }

    Ok(Pattern { instruments })
}

fn parse_note(group: &[u8], layout: NoteLayout) -> Note {
    match layout {
        NoteLayout::LengthVelocity => Note::with_length(group[0], group[1]),
        NoteLayout::Velocity => Note::velocity_only(group[0]),
    }
}

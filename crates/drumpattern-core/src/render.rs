use crate::pattern::PatternFormat;
use crate::{Instrument, Note, Pattern};

/// Render a pattern as a text grid, one instrument per line.
///
/// Values are two-digit uppercase hex. Two-field notes render as `(LL,VV)`,
/// velocity-only notes as `VV ` tokens. A space follows every beat.
///
/// # Examples
/// ```
/// use drumpattern_core::{PatternFormat, parse_pattern, render_pattern};
///
/// let format = PatternFormat::STANDARD;
/// let pattern = parse_pattern(&vec![0; format.total_bytes()], &format)?;
/// let grid = render_pattern(&pattern, &format);
/// assert!(grid.starts_with("(00,00)(00,00)(00,00)(00,00) (00,00)"));
/// # Ok::<(), drumpattern_core::ValidationError>(())
/// ```
pub fn render_pattern(pattern: &Pattern, format: &PatternFormat) -> String {
    let mut out = String::new();
    for instrument in &pattern.instruments {
        render_instrument(instrument, format.notes_per_beat, &mut out);
    }
    out
}

fn render_instrument(instrument: &Instrument, notes_per_beat: usize, out: &mut String) {
    for (index, note) in instrument.notes.iter().enumerate() {
        render_note(note, out);
        if notes_per_beat > 0 && (index + 1) % notes_per_beat == 0 {
            out.push(' ');
        }
    }
    out.push('\n');
}

fn render_note(note: &Note, out: &mut String) {
    let token = match note.length {
        Some(length) => format!("({length:02X},{:02X})", note.velocity),
        None => format!("{:02X} ", note.velocity),
    };
    out.push_str(&token);
}

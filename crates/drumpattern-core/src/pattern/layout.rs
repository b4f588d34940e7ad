/// Largest value any note byte may carry (7-bit data).
pub const MAX_NOTE_VALUE: u8 = 0x7F;

/// Byte layout of a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLayout {
    /// Two bytes per note: length, then velocity.
    LengthVelocity,
    /// One byte per note: velocity only.
    Velocity,
}

impl NoteLayout {
    pub const fn bytes_per_note(self) -> usize {
        match self {
            NoteLayout::LengthVelocity => 2,
            NoteLayout::Velocity => 1,
        }
    }
}

/// Fixed dimensions of one revision of the drum pattern wire format.
///
/// Validation, structuring and rendering all take the format explicitly so the
/// same pipeline serves every known revision.
///
/// # Examples
/// ```
/// use drumpattern_core::PatternFormat;
///
/// let format = PatternFormat::STANDARD;
/// assert_eq!(format.notes_per_instrument(), 16);
/// assert_eq!(format.total_bytes(), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternFormat {
    /// Stable identifier used on the command line and in reports.
    pub name: &'static str,
    pub instruments: usize,
    pub beats_per_bar: usize,
    pub notes_per_beat: usize,
    pub note_layout: NoteLayout,
    pub max_value: u8,
}

impl PatternFormat {
    /// 16 instruments, 16 notes each, (length, velocity) per note.
    pub const STANDARD: PatternFormat = PatternFormat {
        name: "standard",
        instruments: 16,
        beats_per_bar: 4,
        notes_per_beat: 4,
        note_layout: NoteLayout::LengthVelocity,
        max_value: MAX_NOTE_VALUE,
    };

    /// 12 instruments, 16 notes each, velocity only.
    pub const VELOCITY_ONLY: PatternFormat = PatternFormat {
        name: "velocity",
        instruments: 12,
        beats_per_bar: 4,
        notes_per_beat: 4,
        note_layout: NoteLayout::Velocity,
        max_value: MAX_NOTE_VALUE,
    };

    /// Every known revision, default first.
    pub const ALL: [PatternFormat; 2] = [Self::STANDARD, Self::VELOCITY_ONLY];

    pub fn from_name(name: &str) -> Option<PatternFormat> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name.eq_ignore_ascii_case(name))
    }

    // Dimensions saturate; no buffer reaches `usize::MAX` bytes.
    pub const fn notes_per_instrument(&self) -> usize {
        self.beats_per_bar.saturating_mul(self.notes_per_beat)
    }

    pub const fn bytes_per_note(&self) -> usize {
        self.note_layout.bytes_per_note()
    }

    pub const fn bytes_per_instrument(&self) -> usize {
        self.notes_per_instrument().saturating_mul(self.bytes_per_note())
    }

    pub const fn total_bytes(&self) -> usize {
        self.instruments.saturating_mul(self.bytes_per_instrument())
    }
}

impl Default for PatternFormat {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_totals() {
        let format = PatternFormat::STANDARD;
        assert_eq!(format.bytes_per_note(), 2);
        assert_eq!(format.bytes_per_instrument(), 32);
        assert_eq!(format.total_bytes(), 512);
    }

    #[test]
    fn velocity_layout_totals() {
        let format = PatternFormat::VELOCITY_ONLY;
        assert_eq!(format.bytes_per_note(), 1);
        assert_eq!(format.bytes_per_instrument(), 16);
        assert_eq!(format.total_bytes(), 192);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            PatternFormat::from_name("Velocity"),
            Some(PatternFormat::VELOCITY_ONLY)
        );
        assert_eq!(PatternFormat::from_name("standard"), Some(PatternFormat::STANDARD));
        assert_eq!(PatternFormat::from_name("v3"), None);
    }

    #[test]
    fn oversized_dimensions_saturate() {
        let format = PatternFormat {
            instruments: usize::MAX,
            ..PatternFormat::STANDARD
        };
        assert_eq!(format.total_bytes(), usize::MAX);

        let format = PatternFormat {
            beats_per_bar: usize::MAX,
            notes_per_beat: 2,
            ..PatternFormat::VELOCITY_ONLY
        };
        assert_eq!(format.notes_per_instrument(), usize::MAX);
        assert_eq!(format.total_bytes(), usize::MAX);
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(PatternFormat::default(), PatternFormat::STANDARD);
    }
}

use super::error::ValidationError;
use super::layout::PatternFormat;

/// Bounds-checked view over a decoded pattern buffer.
pub struct PatternReader<'a> {
    data: &'a [u8],
    format: &'a PatternFormat,
}

impl<'a> PatternReader<'a> {
    pub fn new(data: &'a [u8], format: &'a PatternFormat) -> Self {
        Self { data, format }
    }

    pub fn require_exact_len(&self) -> Result<(), ValidationError> {
        let expected = self.format.total_bytes();
        if self.data.len() != expected {
            return Err(ValidationError::Length {
                actual: self.data.len(),
                expected,
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], ValidationError> {
        self.data.get(range).ok_or(ValidationError::Length {
            actual: self.data.len(),
            expected: self.format.total_bytes(),
        })
    }

    /// Bytes belonging to instrument `index` (zero based).
    pub fn instrument(&self, index: usize) -> Result<&'a [u8], ValidationError> {
        let size = self.format.bytes_per_instrument();
        let range = index
            .checked_mul(size)
            .and_then(|start| Some(start..start.checked_add(size)?));
        match range {
            Some(range) => self.read_slice(range),
            None => Err(ValidationError::Length {
                actual: self.data.len(),
                expected: self.format.total_bytes(),
            }),
        }
    }

    /// First byte above the format's maximum, with its offset.
    pub fn first_out_of_range(&self) -> Option<(usize, u8)> {
        self.data
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, value)| value > self.format.max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::PatternReader;
    use crate::pattern::error::ValidationError;
    use crate::pattern::layout::PatternFormat;

    #[test]
    fn instrument_slices_are_contiguous() {
        let format = PatternFormat::VELOCITY_ONLY;
        let data: Vec<u8> = (0..format.total_bytes()).map(|i| (i % 128) as u8).collect();
        let reader = PatternReader::new(&data, &format);

        let second = reader.instrument(1).unwrap();
        assert_eq!(second.len(), 16);
        assert_eq!(second[0], 16);
        assert_eq!(second[15], 31);
    }

    #[test]
    fn instrument_past_end_is_length_error() {
        let format = PatternFormat::STANDARD;
        let data = vec![0u8; 40];
        let reader = PatternReader::new(&data, &format);

        assert!(reader.instrument(0).is_ok());
        let err = reader.instrument(1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Length {
                actual: 40,
                expected: 512
            }
        );
    }

    #[test]
    fn huge_instrument_index_is_length_error() {
        let format = PatternFormat::STANDARD;
        let data = vec![0u8; 512];
        let reader = PatternReader::new(&data, &format);

        assert!(matches!(
            reader.instrument(usize::MAX),
            Err(ValidationError::Length { .. })
        ));
    }

    #[test]
    fn first_out_of_range_reports_offset() {
        let format = PatternFormat::STANDARD;
        let mut data = vec![0u8; 8];
        data[3] = 0x90;
        data[5] = 0xFF;
        let reader = PatternReader::new(&data, &format);

        assert_eq!(reader.first_out_of_range(), Some((3, 0x90)));
    }
}

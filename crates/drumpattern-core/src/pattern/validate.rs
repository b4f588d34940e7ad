use super::error::ValidationError;
use super::layout::PatternFormat;
use super::reader::PatternReader;

/// Check a decoded buffer against the format's length and value constraints.
///
/// Length is checked first; value ranges are only inspected once the length
/// matches. The first out-of-range byte is reported.
pub fn validate_pattern(data: &[u8], format: &PatternFormat) -> Result<(), ValidationError> {
    let reader = PatternReader::new(data, format);
    reader.require_exact_len()?;

    if let Some((offset, value)) = reader.first_out_of_range() {
        return Err(ValidationError::Value {
            value,
            max: format.max_value,
            offset,
        });
    }
    Ok(())
}

use thiserror::Error;
use tracing::debug;

use crate::Pattern;
use crate::decode::{DecodeError, decode_pattern};
use crate::pattern::{PatternFormat, ValidationError, parse_pattern, validate_pattern};

/// Outcome of a failed pattern check, tagged by the stage that rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("could not decode drum pattern: {0}")]
    Decode(#[from] DecodeError),
    #[error("the drum pattern is invalid: {0}")]
    Validation(#[from] ValidationError),
}

/// Decode, validate and structure a Base64 drum pattern.
///
/// Stops at the first failing stage; a decode failure is never passed on to
/// validation.
///
/// # Examples
/// ```
/// use drumpattern_core::{PatternError, PatternFormat, check_pattern};
///
/// let err = check_pattern("VGVzdA==", &PatternFormat::STANDARD).unwrap_err();
/// assert!(matches!(err, PatternError::Validation(_)));
/// ```
pub fn check_pattern(text: &str, format: &PatternFormat) -> Result<Pattern, PatternError> {
    let data = decode_pattern(text)?;
    debug!(bytes = data.len(), format = format.name, "decoded pattern");

    validate_pattern(&data, format)?;
    debug!(expected = format.total_bytes(), "pattern passed validation");

    let pattern = parse_pattern(&data, format)?;
    debug!(instruments = pattern.instruments.len(), "structured pattern");
    Ok(pattern)
}

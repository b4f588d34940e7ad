use base64::Engine as _;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use thiserror::Error;

/// Standard alphabet with required padding; non-zero trailing bits in the
/// final symbol are accepted.
const PATTERN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Base64: {source}")]
pub struct DecodeError {
    #[source]
    source: base64::DecodeError,
}

/// Decode standard Base64 (RFC 4648 alphabet, padding required).
///
/// An empty string decodes to an empty buffer. Carriage returns and line
/// feeds are skipped, and unused bits of the final symbol may be non-zero.
///
/// # Examples
/// ```
/// use drumpattern_core::decode_pattern;
///
/// assert_eq!(decode_pattern("VGVzdA==")?, b"Test".to_vec());
/// # Ok::<(), drumpattern_core::DecodeError>(())
/// ```
pub fn decode_pattern(text: &str) -> Result<Vec<u8>, DecodeError> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    PATTERN_ENGINE
        .decode(cleaned)
        .map_err(|source| DecodeError { source })
}

#[cfg(test)]
mod tests {
    use super::decode_pattern;

    #[test]
    fn empty_string_is_empty_buffer() {
        assert_eq!(decode_pattern("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decodes_padded_text() {
        assert_eq!(
            decode_pattern("VGVzdA==").unwrap(),
            vec![0x54, 0x65, 0x73, 0x74]
        );
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let err = decode_pattern("VGVzdA==!").unwrap_err();
        assert!(err.to_string().starts_with("invalid Base64"));
    }

    #[test]
    fn missing_padding_is_rejected() {
        assert!(decode_pattern("VGVzdA").is_err());
    }

    #[test]
    fn nonzero_trailing_bits_are_accepted() {
        assert_eq!(decode_pattern("VGVzdB==").unwrap(), b"Test".to_vec());
    }

    #[test]
    fn line_breaks_are_skipped() {
        assert_eq!(decode_pattern("VGVz\ndA==").unwrap(), b"Test".to_vec());
        assert_eq!(decode_pattern("VGVz\r\ndA==\n").unwrap(), b"Test".to_vec());
    }

    #[test]
    fn other_whitespace_is_rejected() {
        assert!(decode_pattern("VGVz dA==").is_err());
    }

    #[test]
    fn url_safe_alphabet_is_rejected() {
        assert!(decode_pattern("-_-_").is_err());
    }
}

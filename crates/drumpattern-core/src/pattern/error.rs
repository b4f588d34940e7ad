use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("pattern contains {actual} bytes, but should contain exactly {expected} bytes")]
    Length { actual: usize, expected: usize },
    #[error("data value {value:#04x} at offset {offset} exceeds allowed value of {max:#04x}")]
    Value { value: u8, max: u8, offset: usize },
}

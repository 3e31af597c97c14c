//! Integer parsing for path and query parameters.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("number not provided")]
    Missing,
    #[error("invalid number")]
    Invalid,
    #[error("number out of range")]
    OutOfRange,
}

impl From<NumberError> for ApiError {
    fn from(err: NumberError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Parse an optional raw value as a signed 64-bit integer.
///
/// `None` means the caller never sent the value, which is reported apart from
/// a value that was sent but is not a number. Surrounding whitespace and a
/// leading sign are accepted; an empty string is not a number.
pub fn parse_number(raw: Option<&str>) -> Result<i64, NumberError> {
    let raw = raw.ok_or(NumberError::Missing)?;
    raw.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumberError::OutOfRange,
        _ => NumberError::Invalid,
    })
}

/// Squares are computed in 128 bits, where no `i64` input can overflow.
pub fn square(num: i64) -> i128 {
    i128::from(num) * i128::from(num)
}

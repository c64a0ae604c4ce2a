//! Error types for identity number parsing and generation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when parsing, interpreting or generating an
/// identity number.
///
/// A number that parses but fails a checksum or structural rule is not an
/// error; validators report that as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SsnError {
    /// The input does not match the `[CC]YYMMDD[+-]SSS[K]` digit grammar.
    #[error("invalid format: {0:?}")]
    InvalidFormat(String),

    /// The digits parse but do not describe a calendar date.
    #[error("invalid date in {input:?}: {reason}")]
    InvalidDate {
        /// The identity number as given.
        input: String,
        /// Why the date could not be constructed.
        reason: String,
    },

    /// Gender label is not one of the two categories encoded in the serial.
    #[error("invalid gender: {0:?}")]
    InvalidGender(String),

    /// The year of the date cannot be written with a two-digit century.
    #[error("date {0} cannot be encoded in an identity number")]
    UnrepresentableDate(NaiveDate),
}

impl SsnError {
    /// Whether the input was structurally unparseable.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Whether the input parsed but encodes an impossible date.
    #[must_use]
    pub fn is_date_error(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}

/// Result type alias for identity number operations.
pub type Result<T> = std::result::Result<T, SsnError>;

//! Lexical parsing of identity numbers into their digit groups.
//!
//! Accepted grammar: `[CC]YYMMDD[+-]SSS[K]`
//!
//! - `CC`: optional century
//! - `YYMMDD`: year, month and day (for organizations these are type digits)
//! - `+`/`-`: optional divider, absence is read as `-`
//! - `SSS`: serial
//! - `K`: optional control digit, computed when absent
//!
//! Parsing checks the shape only. The checksum and the date are checked by
//! [`Parsed::valid`] and by the person/organization interpretations.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SsnError};
use crate::luhn;
use crate::organization::Organization;
use crate::person::Person;

/// Day offset used to mark coordination numbers.
pub const COORDINATION_DAY_OFFSET: u8 = 60;

/// Digit-group grammar. ASCII digits only.
static FORMAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})?([0-9]{2})([0-9]{2})([0-9]{2})([-+])?([0-9]{3})([0-9])?$")
        .expect("Invalid identity number regex")
});

/// Separator between the date digits and the serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Divider {
    /// `-`, also used when the input had no divider.
    #[default]
    #[serde(rename = "-")]
    Minus,
    /// `+`, the holder was at least 100 years old.
    #[serde(rename = "+")]
    Plus,
}

impl Divider {
    /// The divider character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Minus => '-',
            Self::Plus => '+',
        }
    }

    fn from_match(value: Option<&str>) -> Self {
        match value {
            Some("+") => Self::Plus,
            _ => Self::Minus,
        }
    }
}

impl fmt::Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The digit groups of an identity number.
///
/// Field names follow the personal identity number layout even when the
/// number is an organization number. The control digit is always present: it
/// is taken from the input or, when the input omitted it, computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Parsed {
    century: u16,
    year: u8,
    month: u8,
    day: u8,
    serial: u16,
    control_digit: u8,
    divider: Divider,
}

impl Parsed {
    /// Build a record from its fields, computing the control digit.
    ///
    /// `century` is 0 or a multiple of 100.
    pub(crate) fn from_parts(
        century: u16,
        year: u8,
        month: u8,
        day: u8,
        serial: u16,
        divider: Divider,
    ) -> Self {
        Self {
            century,
            year,
            month,
            day,
            serial,
            control_digit: luhn::control_digit(year, month, day, serial),
            divider,
        }
    }

    /// Copy of this record with the century replaced.
    pub(crate) fn with_century(mut self, century: u16) -> Self {
        self.century = century;
        self
    }

    /// Century as a multiple of 100, or 0 when the input had none.
    #[must_use]
    pub fn century(&self) -> u16 {
        self.century
    }

    /// Whether the input carried a century prefix.
    #[must_use]
    pub fn has_century(&self) -> bool {
        self.century != 0
    }

    /// Two-digit year.
    #[must_use]
    pub fn year(&self) -> u8 {
        self.year
    }

    /// Month digits. Not range checked.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Raw day digits, including the coordination offset.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Day with the coordination offset removed.
    #[must_use]
    pub fn calendar_day(&self) -> u8 {
        if self.is_coordination_number() {
            self.day - COORDINATION_DAY_OFFSET
        } else {
            self.day
        }
    }

    /// Whether the day carries the coordination offset.
    #[must_use]
    pub fn is_coordination_number(&self) -> bool {
        self.day > COORDINATION_DAY_OFFSET
    }

    /// Three-digit serial.
    #[must_use]
    pub fn serial(&self) -> u16 {
        self.serial
    }

    /// Control digit, given or computed.
    #[must_use]
    pub fn control_digit(&self) -> u8 {
        self.control_digit
    }

    /// Divider, `-` when the input had none.
    #[must_use]
    pub fn divider(&self) -> Divider {
        self.divider
    }

    /// Luhn sum of the year, month, day and serial digits.
    #[must_use]
    pub fn luhn_checksum(&self) -> u32 {
        luhn::checksum(self.year, self.month, self.day, self.serial)
    }

    /// The control digit the checksum calls for.
    #[must_use]
    pub fn expected_control_digit(&self) -> u8 {
        luhn::control_digit_from(self.luhn_checksum())
    }

    /// Whether the control digit matches the checksum.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.control_digit == self.expected_control_digit()
    }

    /// Whether this record is a valid personal identity number.
    #[must_use]
    pub fn valid_person(&self) -> bool {
        Person::from_parsed(*self).is_ok_and(|person| person.valid())
    }

    /// Whether this record is a valid organization number.
    #[must_use]
    pub fn valid_organization(&self) -> bool {
        Organization::from_parsed(*self).valid()
    }
}

/// Parse an identity number into its digit groups.
pub fn parse(input: &str) -> Result<Parsed> {
    let captures = FORMAT_REGEX
        .captures(input)
        .ok_or_else(|| SsnError::InvalidFormat(input.to_string()))?;

    let group = |index: usize| captures.get(index).map(|m| m.as_str());
    // The regex only admits ASCII digits in these groups.
    let number = |index: usize| {
        group(index).map(|digits| {
            digits
                .bytes()
                .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
        })
    };
    let two_digits = |index: usize| number(index).unwrap_or_default() as u8;

    let century = number(1).unwrap_or_default() * 100;
    let year = two_digits(2);
    let month = two_digits(3);
    let day = two_digits(4);
    let divider = Divider::from_match(group(5));
    let serial = number(6).unwrap_or_default();
    let control_digit = match number(7) {
        Some(digit) => digit as u8,
        None => luhn::control_digit(year, month, day, serial),
    };

    let parsed = Parsed {
        century,
        year,
        month,
        day,
        serial,
        control_digit,
        divider,
    };
    trace!(input, ?parsed, "parsed identity number");
    Ok(parsed)
}

impl FromStr for Parsed {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<&str> for Parsed {
    type Error = SsnError;

    fn try_from(value: &str) -> Result<Self> {
        parse(value)
    }
}

/// Integer input is read as its decimal digits, so leading zeros are lost:
/// `0903146603` must be passed as text.
impl TryFrom<u64> for Parsed {
    type Error = SsnError;

    fn try_from(value: u64) -> Result<Self> {
        parse(&value.to_string())
    }
}

impl fmt::Display for Parsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_century() {
            write!(f, "{:02}", self.century / 100)?;
        }
        write!(
            f,
            "{:02}{:02}{:02}{}{:03}{}",
            self.year, self.month, self.day, self.divider, self.serial, self.control_digit
        )
    }
}

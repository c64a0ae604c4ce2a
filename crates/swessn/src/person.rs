//! Personal identity numbers (personnummer and samordningsnummer).
//!
//! A [`Person`] is a parsed number with its century resolved and its birth
//! date, gender, county and zodiac sign derived once at construction.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::century::resolve_century;
use crate::county::County;
use crate::error::{Result, SsnError};
use crate::gender::Gender;
use crate::options::Options;
use crate::parsed::{Parsed, parse};
use crate::zodiac::Zodiac;

/// Age at which the short form switches to the `+` divider.
const CENTENARIAN_AGE: u32 = 100;

/// A personal identity number and what can be read from it.
///
/// Two persons are equal when their digits and birth date are; the options
/// they were interpreted with do not take part.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    parsed: Parsed,
    date: NaiveDate,
    gender: Gender,
    county: County,
    zodiac: Zodiac,
    #[serde(skip)]
    options: Options,
}

impl Person {
    /// Parse and interpret a personal identity number.
    ///
    /// Fails with a format error when the input does not parse and with a
    /// date error when the digits do not form a birth date. A wrong control
    /// digit is not an error; see [`Person::valid`].
    pub fn new(input: &str) -> Result<Self> {
        Self::with_options(input, &Options::default())
    }

    /// Parse and interpret a personal identity number with explicit options.
    pub fn with_options(input: &str, options: &Options) -> Result<Self> {
        Self::from_parsed_with_options(parse(input)?, options)
    }

    /// Interpret an already parsed number as a person.
    pub fn from_parsed(parsed: Parsed) -> Result<Self> {
        Self::from_parsed_with_options(parsed, &Options::default())
    }

    /// Interpret an already parsed number as a person with explicit options.
    pub fn from_parsed_with_options(parsed: Parsed, options: &Options) -> Result<Self> {
        let century = resolve_century(&parsed, options.today())?;
        let parsed = parsed.with_century(century);
        let date = derive_date(&parsed, century)?;

        Ok(Self::from_parts(parsed, date, options.clone()))
    }

    /// Assemble a person whose date is already known to match `parsed`.
    pub(crate) fn from_parts(parsed: Parsed, date: NaiveDate, options: Options) -> Self {
        Self {
            gender: Gender::from_serial(parsed.serial()),
            county: County::for_birth(date.year(), parsed.serial()),
            zodiac: Zodiac::from_date(date),
            parsed,
            date,
            options,
        }
    }

    /// Whether the control digit is correct and, unless disabled in the
    /// options, coordination numbers are accepted.
    #[must_use]
    pub fn valid(&self) -> bool {
        if self.is_coordination_number() && !self.options.allow_coordination_numbers {
            return false;
        }
        self.parsed.valid()
    }

    /// The digit groups, with the resolved century.
    #[must_use]
    pub fn parsed(&self) -> &Parsed {
        &self.parsed
    }

    /// Resolved century as a multiple of 100.
    #[must_use]
    pub fn century(&self) -> u16 {
        self.parsed.century()
    }

    /// Four-digit birth year.
    #[must_use]
    pub fn full_year(&self) -> i32 {
        self.date.year()
    }

    /// Birth date (coordination offset removed).
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day of the birth date (coordination offset removed).
    #[must_use]
    pub fn day(&self) -> u8 {
        self.parsed.calendar_day()
    }

    /// Whether this is a coordination number (day + 60).
    #[must_use]
    pub fn is_coordination_number(&self) -> bool {
        self.parsed.is_coordination_number()
    }

    /// Registered gender.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Odd last serial digit.
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    /// Even last serial digit.
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    /// Birth county, [`County::Unknown`] for births after 1990.
    #[must_use]
    pub fn county(&self) -> County {
        self.county
    }

    /// Zodiac sign of the birth date.
    #[must_use]
    pub fn zodiac(&self) -> Zodiac {
        self.zodiac
    }

    /// Whole years from birth to `date`; 0 before birth.
    #[must_use]
    pub fn age_at(&self, date: NaiveDate) -> u32 {
        let years = date.year() - self.date.year();
        let birthday_passed = (date.month(), date.day()) >= (self.date.month(), self.date.day());
        let years = if birthday_passed { years } else { years - 1 };
        u32::try_from(years).unwrap_or(0)
    }

    /// Whole years from birth to the reference date.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age_at(self.options.today())
    }

    /// Whether the person has reached `years` at the reference date.
    #[must_use]
    pub fn is_of_age(&self, years: u32) -> bool {
        self.age() >= years
    }

    /// Ten-digit form `YYMMDD±SSSK`.
    ///
    /// Uses `+` once the person has turned 100 at the reference date. The
    /// short form resolves back to the same century only for birth dates
    /// within the last 200 years, up to the reference date.
    #[must_use]
    pub fn to_short_string(&self) -> String {
        let divider = if self.age() >= CENTENARIAN_AGE { '+' } else { '-' };
        format!(
            "{:02}{:02}{:02}{divider}{:03}{}",
            self.parsed.year(),
            self.parsed.month(),
            self.parsed.day(),
            self.parsed.serial(),
            self.parsed.control_digit(),
        )
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.parsed == other.parsed && self.date == other.date
    }
}

impl Eq for Person {}

/// Canonical form `CCYYMMDD-SSSK`. The raw day is kept, so coordination
/// numbers print with their offset.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}{:02}-{:03}{}",
            self.parsed.century() / 100,
            self.parsed.year(),
            self.parsed.month(),
            self.parsed.day(),
            self.parsed.serial(),
            self.parsed.control_digit(),
        )
    }
}

impl FromStr for Person {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<u64> for Person {
    type Error = SsnError;

    fn try_from(value: u64) -> Result<Self> {
        Self::from_parsed(Parsed::try_from(value)?)
    }
}

/// Build the calendar date for a parsed number in the given century.
///
/// The coordination offset is removed from the day. Fails with a date error
/// for impossible dates such as month 13 or February 29 in a common year.
pub fn derive_date(parsed: &Parsed, century: u16) -> Result<NaiveDate> {
    let year = i32::from(century) + i32::from(parsed.year());
    let month = parsed.month();
    let day = parsed.calendar_day();

    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or_else(|| {
        SsnError::InvalidDate {
            input: parsed.to_string(),
            reason: format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
        }
    })
}

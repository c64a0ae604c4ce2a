//! Zodiac sign from month and day of birth.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Astrological sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// `(first day, last day, sign)` as `(month, day)`, both ends inclusive.
/// Capricorn spans the new year and is split in two.
const SIGN_RANGES: &[((u32, u32), (u32, u32), Zodiac)] = &[
    ((1, 1), (1, 19), Zodiac::Capricorn),
    ((1, 20), (2, 18), Zodiac::Aquarius),
    ((2, 19), (3, 20), Zodiac::Pisces),
    ((3, 21), (4, 19), Zodiac::Aries),
    ((4, 20), (5, 20), Zodiac::Taurus),
    ((5, 21), (6, 20), Zodiac::Gemini),
    ((6, 21), (7, 22), Zodiac::Cancer),
    ((7, 23), (8, 22), Zodiac::Leo),
    ((8, 23), (9, 22), Zodiac::Virgo),
    ((9, 23), (10, 22), Zodiac::Libra),
    ((10, 23), (11, 21), Zodiac::Scorpio),
    ((11, 22), (12, 21), Zodiac::Sagittarius),
    ((12, 22), (12, 31), Zodiac::Capricorn),
];

impl Zodiac {
    /// Sign for a month (1-12) and day (1-31).
    #[must_use]
    pub fn from_month_day(month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        SIGN_RANGES
            .iter()
            .find(|(first, last, _)| *first <= (month, day) && (month, day) <= *last)
            .map(|&(_, _, sign)| sign)
    }

    /// Sign for a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // The ranges cover every day of the year.
        Self::from_month_day(date.month(), date.day()).unwrap_or(Self::Capricorn)
    }

    /// English name of the sign.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(year: i32, month: u32, day: u32) -> Zodiac {
        Zodiac::from_date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(sign(1990, 1, 1), Zodiac::Capricorn);
        assert_eq!(sign(1990, 4, 1), Zodiac::Aries);
        assert_eq!(sign(2009, 3, 14), Zodiac::Pisces);
        assert_eq!(sign(2016, 2, 29), Zodiac::Pisces);
        assert_eq!(sign(1990, 12, 31), Zodiac::Capricorn);
    }

    #[test]
    fn test_every_boundary_date() {
        let boundaries = [
            ((1, 19), Zodiac::Capricorn, (1, 20), Zodiac::Aquarius),
            ((2, 18), Zodiac::Aquarius, (2, 19), Zodiac::Pisces),
            ((3, 20), Zodiac::Pisces, (3, 21), Zodiac::Aries),
            ((4, 19), Zodiac::Aries, (4, 20), Zodiac::Taurus),
            ((5, 20), Zodiac::Taurus, (5, 21), Zodiac::Gemini),
            ((6, 20), Zodiac::Gemini, (6, 21), Zodiac::Cancer),
            ((7, 22), Zodiac::Cancer, (7, 23), Zodiac::Leo),
            ((8, 22), Zodiac::Leo, (8, 23), Zodiac::Virgo),
            ((9, 22), Zodiac::Virgo, (9, 23), Zodiac::Libra),
            ((10, 22), Zodiac::Libra, (10, 23), Zodiac::Scorpio),
            ((11, 21), Zodiac::Scorpio, (11, 22), Zodiac::Sagittarius),
            ((12, 21), Zodiac::Sagittarius, (12, 22), Zodiac::Capricorn),
        ];

        for ((last_m, last_d), before, (first_m, first_d), after) in boundaries {
            assert_eq!(sign(2001, last_m, last_d), before, "{last_m}-{last_d}");
            assert_eq!(sign(2001, first_m, first_d), after, "{first_m}-{first_d}");
        }
    }

    #[test]
    fn test_every_day_has_a_sign() {
        let mut date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        while date.year() == 2000 {
            assert!(Zodiac::from_month_day(date.month(), date.day()).is_some());
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Zodiac::from_month_day(0, 1), None);
        assert_eq!(Zodiac::from_month_day(13, 1), None);
        assert_eq!(Zodiac::from_month_day(1, 32), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Zodiac::Sagittarius.to_string(), "Sagittarius");
    }
}

//! Generation of checksum-valid personal identity numbers for test data.
//!
//! The serial is a random two-digit prefix followed by a digit of the
//! requested gender's parity; the control digit is then computed. Callers
//! supply the random source, so a seeded rng gives reproducible numbers.

use chrono::{Datelike, NaiveDate, TimeDelta};
use rand::Rng;
use tracing::debug;

use crate::error::{Result, SsnError};
use crate::gender::Gender;
use crate::options::Options;
use crate::parsed::{Divider, Parsed};
use crate::person::Person;

/// Earliest year that can be written as `CCYY` with a non-zero century.
const MIN_YEAR: i32 = 100;
/// Latest year that can be written as `CCYY`.
const MAX_YEAR: i32 = 9999;

/// Exclusive upper bound of the random two-digit serial prefix.
const SERIAL_PREFIX_BOUND: u16 = 99;

/// First day [`generate_random_person`] may pick.
pub const RANDOM_WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(1974, 1, 1) {
    Some(date) => date,
    None => panic!("invalid random window start"),
};

/// Day after the last one [`generate_random_person`] may pick.
pub const RANDOM_WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2014, 1, 1) {
    Some(date) => date,
    None => panic!("invalid random window end"),
};

/// Generate a valid personal identity number for a birth date and gender.
///
/// Fails with [`SsnError::UnrepresentableDate`] for years outside
/// 100..=9999.
pub fn generate_person<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    gender: Gender,
) -> Result<Person> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(SsnError::UnrepresentableDate(date));
    }
    Ok(assemble(rng, date, gender))
}

/// Generate a valid personal identity number with a random birth date in
/// [`RANDOM_WINDOW_START`]..[`RANDOM_WINDOW_END`] and a random gender.
pub fn generate_random_person<R: Rng + ?Sized>(rng: &mut R) -> Person {
    let span = (RANDOM_WINDOW_END - RANDOM_WINDOW_START).num_days();
    let date = RANDOM_WINDOW_START + TimeDelta::days(rng.random_range(0..span));
    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    assemble(rng, date, gender)
}

/// Build the person for a date whose year is within `MIN_YEAR..=MAX_YEAR`.
fn assemble<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate, gender: Gender) -> Person {
    let prefix = rng.random_range(0..SERIAL_PREFIX_BOUND);
    let digits = gender.serial_digits();
    let serial = prefix * 10 + digits[rng.random_range(0..digits.len())];

    // Year is within 100..=9999, month and day within their calendar ranges.
    let year = date.year() as u16;
    let parsed = Parsed::from_parts(
        year / 100 * 100,
        (year % 100) as u8,
        date.month() as u8,
        date.day() as u8,
        serial,
        Divider::Minus,
    );

    let person = Person::from_parts(parsed, date, Options::default());
    debug!(number = %person, %gender, "generated personal identity number");
    person
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_generated_person_is_valid() {
        let mut rng = rng();
        for gender in [Gender::Male, Gender::Female] {
            let person = generate_person(&mut rng, ymd(1985, 7, 23), gender).unwrap();
            assert!(person.valid());
            assert_eq!(person.gender(), gender);
            assert_eq!(person.date(), ymd(1985, 7, 23));
            assert_eq!(person.century(), 1900);
            assert!(!person.is_coordination_number());
        }
    }

    #[test]
    fn test_serial_prefix_and_parity() {
        let mut rng = rng();
        for _ in 0..200 {
            let person = generate_person(&mut rng, ymd(2000, 2, 29), Gender::Female).unwrap();
            let serial = person.parsed().serial();
            assert!(serial / 10 < SERIAL_PREFIX_BOUND);
            assert_eq!(serial % 2, 0);
        }
    }

    #[test]
    fn test_generated_number_round_trips() {
        let mut rng = rng();
        let person = generate_person(&mut rng, ymd(1912, 12, 31), Gender::Male).unwrap();
        let again = Person::new(&person.to_string()).unwrap();
        assert_eq!(again.date(), person.date());
        assert_eq!(again.gender(), Gender::Male);
        assert!(again.valid());
    }

    #[test]
    fn test_same_seed_same_number() {
        let a = generate_person(&mut rng(), ymd(1990, 1, 1), Gender::Male).unwrap();
        let b = generate_person(&mut rng(), ymd(1990, 1, 1), Gender::Male).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_unrepresentable_years() {
        let mut rng = rng();
        let err = generate_person(&mut rng, ymd(99, 1, 1), Gender::Male).unwrap_err();
        assert_eq!(err, SsnError::UnrepresentableDate(ymd(99, 1, 1)));
        assert!(generate_person(&mut rng, ymd(10000, 1, 1), Gender::Male).is_err());
        assert!(generate_person(&mut rng, ymd(100, 1, 1), Gender::Male).is_ok());
    }

    #[test]
    fn test_random_person_in_window() {
        let mut rng = rng();
        for _ in 0..200 {
            let person = generate_random_person(&mut rng);
            assert!(person.valid());
            assert!(person.date() >= RANDOM_WINDOW_START);
            assert!(person.date() < RANDOM_WINDOW_END);
        }
    }
}

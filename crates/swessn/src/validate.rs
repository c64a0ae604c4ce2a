//! Validation entry points.
//!
//! The `is_valid*` functions collapse every failure to `false`. The
//! `validate_*` functions keep format and date errors apart from a number
//! that is well formed but wrong.

use tracing::debug;

use crate::error::Result;
use crate::options::Options;
use crate::organization::Organization;
use crate::parsed::parse;
use crate::person::Person;

/// Whether the control digit matches, without person or organization rules.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok_and(|parsed| parsed.valid())
}

/// Whether the input is a valid personal identity number.
#[must_use]
pub fn is_valid_person(input: &str) -> bool {
    validate_person(input).unwrap_or(false)
}

/// Whether the input is a valid organization number.
#[must_use]
pub fn is_valid_organization(input: &str) -> bool {
    validate_organization(input).unwrap_or(false)
}

/// Validate a personal identity number.
///
/// `Err` when the input does not parse or encodes an impossible date,
/// `Ok(false)` when it is well formed but fails the checksum.
pub fn validate_person(input: &str) -> Result<bool> {
    validate_person_with_options(input, &Options::default())
}

/// Validate a personal identity number with explicit options.
pub fn validate_person_with_options(input: &str, options: &Options) -> Result<bool> {
    let person = Person::with_options(input, options).inspect_err(|error| {
        debug!(input, %error, "rejected personal identity number");
    })?;
    Ok(person.valid())
}

/// Validate an organization number.
///
/// `Err` when the input does not parse, `Ok(false)` when it breaks an
/// organization rule or the checksum.
pub fn validate_organization(input: &str) -> Result<bool> {
    let organization = Organization::new(input).inspect_err(|error| {
        debug!(input, %error, "rejected organization number");
    })?;
    Ok(organization.valid())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_is_valid_person() {
        let cases = [
            ("8001013294", true),
            ("198001013294", true),
            ("800101-3294", true),
            ("19800101-3294", true),
            ("090314-6603", true),
            ("800101+3294", true),
            ("18800101+3294", true),
            ("15800101-3294", true),
            ("158001013294", true),
            ("21800101-3294", true),
            ("218001013294", true),
            ("880435-3300", false),
            ("00000000-0001", false),
            ("000000-0001", false),
            ("20180377-2381", true),
            ("180377-2381", true),
            ("202212782383", true),
            ("202212782381", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_valid_person(input), expected, "{input}");
        }
    }

    #[test]
    fn test_is_valid_organization() {
        let cases = [
            ("16556703-7485", true),
            ("556703-7485", true),
            ("556074-7569", true),
            ("252002-6135", true),
            ("056703-7486", false),
            ("8001013294", false),
            ("556703+7485", false),
            ("19556703-7485", false),
            ("000000-0001", false),
            ("😸", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_valid_organization(input), expected, "{input}");
        }
    }

    #[test]
    fn test_same_number_person_or_organization() {
        assert!(is_valid_organization("556703-7485"));
        assert!(!is_valid_person("556703-7485"));
        assert!(is_valid_person("800101-3294"));
        assert!(!is_valid_organization("800101-3294"));
    }

    #[test]
    fn test_generic_validity() {
        assert!(is_valid("556703-7485"));
        assert!(is_valid("800101-3294"));
        assert!(!is_valid("800101-3295"));
        assert!(!is_valid("000000-0001"));
        assert!(!is_valid("zebra"));
    }

    #[test]
    fn test_diagnostics_distinguish_outcomes() {
        assert!(validate_person("zebra").unwrap_err().is_format_error());
        assert!(validate_person("19880435-3300").unwrap_err().is_date_error());
        assert_eq!(validate_person("800101-3295"), Ok(false));
        assert_eq!(validate_person("800101-3294"), Ok(true));

        assert!(validate_organization("zebra").unwrap_err().is_format_error());
        assert_eq!(validate_organization("000000-0001"), Ok(false));
    }

    #[test]
    fn test_validate_with_options() {
        let options = Options::new()
            .with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .without_coordination_numbers();
        assert_eq!(validate_person_with_options("180377-2381", &options), Ok(false));
        assert_eq!(validate_person_with_options("800101-3294", &options), Ok(true));
    }
}

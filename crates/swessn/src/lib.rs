//! Swedish personal identity and organization numbers.
//!
//! Parses, validates and generates personnummer, samordningsnummer
//! (coordination numbers) and organisationsnummer.
//!
//! # Overview
//!
//! - **Parsing**: [`parse`] splits `[CC]YYMMDD[+-]SSS[K]` into a [`Parsed`]
//!   record, computing the control digit when it is left out
//! - **Checksum**: the [`luhn`] module computes the mod-10 control digit
//! - **Persons**: [`Person`] resolves the century and derives birth date,
//!   gender, county and zodiac sign
//! - **Organizations**: [`Organization`] applies the organization number
//!   rules and reads the corporate form
//! - **Generation**: [`generate_person`] and [`generate_random_person`]
//!   produce checksum-valid numbers for test data
//!
//! # Example
//!
//! ```
//! use swessn::{Gender, Person, is_valid_organization, is_valid_person};
//!
//! assert!(is_valid_person("19800101-3294"));
//! assert!(is_valid_organization("556703-7485"));
//!
//! let person = Person::new("19800101-3294").unwrap();
//! assert_eq!(person.gender(), Gender::Male);
//! assert_eq!(person.to_string(), "19800101-3294");
//! ```
//!
//! # Errors
//!
//! Input that does not match the grammar is an [`SsnError::InvalidFormat`];
//! input that matches but encodes an impossible date is an
//! [`SsnError::InvalidDate`]. A wrong control digit is neither: it makes
//! `valid()` return `false`.

mod error;
mod gender;
mod generator;
mod options;
mod organization;
mod parsed;
mod person;
mod validate;

pub mod century;
pub mod county;
pub mod luhn;
pub mod zodiac;

// Error type
pub use error::{Result, SsnError};

// Parsing
pub use parsed::{COORDINATION_DAY_OFFSET, Divider, Parsed, parse};

// Configuration
pub use options::Options;

// Interpretations
pub use county::County;
pub use gender::Gender;
pub use organization::{CorporateForm, ORGANIZATION_CENTURY, Organization};
pub use person::{Person, derive_date};
pub use zodiac::Zodiac;

// Validation
pub use validate::{
    is_valid, is_valid_organization, is_valid_person, validate_organization, validate_person,
    validate_person_with_options,
};

// Generation
pub use generator::{
    RANDOM_WINDOW_END, RANDOM_WINDOW_START, generate_person, generate_random_person,
};

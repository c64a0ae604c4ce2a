//! Organization numbers (organisationsnummer).
//!
//! Organization numbers share the digit layout of personal identity numbers,
//! but the "date" digits carry type information: the first digit is the
//! corporate form and the "month" is always 20 or higher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SsnError};
use crate::parsed::{Divider, Parsed, parse};

/// The only century prefix an organization number may carry.
pub const ORGANIZATION_CENTURY: u16 = 1600;

/// Lowest value of the "month" digits in an organization number.
const MIN_ORGANIZATION_MONTH: u8 = 20;

/// Lowest value of the "year" digits in an organization number.
const MIN_ORGANIZATION_YEAR: u8 = 10;

/// Legal form indicated by the first digit of an organization number.
///
/// The mapping is customary rather than guaranteed by the registering
/// authorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorporateForm {
    /// 1: estate of a deceased person.
    Estate,
    /// 2: state, county council, municipality or parish.
    StateCountyCouncilMunicipality,
    /// 3: foreign company trading or owning property in Sweden.
    Foreign,
    /// 4 and anything unassigned.
    Unknown,
    /// 5: limited company.
    LimitedCompany,
    /// 6: simple company.
    SimpleCompany,
    /// 7: economic association or tenant-owner association.
    EconomicTenantAssociation,
    /// 8: non-profit association or foundation.
    NonProfitFoundation,
    /// 9: trading partnership or limited partnership.
    TradingPartnership,
}

impl CorporateForm {
    /// Corporate form from the two "year" digits.
    #[must_use]
    pub fn from_year(year: u8) -> Self {
        match year / 10 {
            1 => Self::Estate,
            2 => Self::StateCountyCouncilMunicipality,
            3 => Self::Foreign,
            5 => Self::LimitedCompany,
            6 => Self::SimpleCompany,
            7 => Self::EconomicTenantAssociation,
            8 => Self::NonProfitFoundation,
            9 => Self::TradingPartnership,
            _ => Self::Unknown,
        }
    }

    /// Swedish description.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Estate => "Dödsbo",
            Self::StateCountyCouncilMunicipality => "Stat, landsting, kommun, församling",
            Self::Foreign => {
                "Utländska företag som bedriver näringsverksamhet eller äger fastigheter i Sverige"
            }
            Self::Unknown => "Okänt",
            Self::LimitedCompany => "Aktiebolag",
            Self::SimpleCompany => "Enkelt bolag",
            Self::EconomicTenantAssociation => "Ekonomisk förening, bostadsrättsförening",
            Self::NonProfitFoundation => "Ideell förening och stiftelse",
            Self::TradingPartnership => "Handelsbolag, kommanditbolag och enkelt bolag",
        }
    }
}

impl fmt::Display for CorporateForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed number read as an organization number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Organization {
    parsed: Parsed,
    corporate_form: CorporateForm,
}

impl Organization {
    /// Parse a number as an organization number.
    ///
    /// Only the format can fail; the organization rules are checked by
    /// [`Organization::valid`].
    pub fn new(input: &str) -> Result<Self> {
        Ok(Self::from_parsed(parse(input)?))
    }

    /// Read an already parsed number as an organization number.
    #[must_use]
    pub fn from_parsed(parsed: Parsed) -> Self {
        Self {
            corporate_form: CorporateForm::from_year(parsed.year()),
            parsed,
        }
    }

    /// The digit groups.
    #[must_use]
    pub fn parsed(&self) -> &Parsed {
        &self.parsed
    }

    /// Legal form indicated by the first digit.
    #[must_use]
    pub fn corporate_form(&self) -> CorporateForm {
        self.corporate_form
    }

    /// Whether the number satisfies the organization rules and the checksum.
    ///
    /// - the century prefix, if any, is `16`
    /// - the "month" digits are at least 20
    /// - the divider is never `+`
    /// - the "year" digits are at least 10
    #[must_use]
    pub fn valid(&self) -> bool {
        let parsed = &self.parsed;
        if parsed.has_century() && parsed.century() != ORGANIZATION_CENTURY {
            return false;
        }
        if parsed.month() < MIN_ORGANIZATION_MONTH {
            return false;
        }
        if parsed.divider() == Divider::Plus {
            return false;
        }
        if parsed.year() < MIN_ORGANIZATION_YEAR {
            return false;
        }
        parsed.valid()
    }
}

/// Ten-digit form `NNNNNN-NNNN`, without the `16` prefix.
impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}-{:03}{}",
            self.parsed.year(),
            self.parsed.month(),
            self.parsed.day(),
            self.parsed.serial(),
            self.parsed.control_digit(),
        )
    }
}

impl FromStr for Organization {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<u64> for Organization {
    type Error = SsnError;

    fn try_from(value: u64) -> Result<Self> {
        Ok(Self::from_parsed(Parsed::try_from(value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(input: &str) -> bool {
        Organization::new(input).is_ok_and(|org| org.valid())
    }

    #[test]
    fn test_valid_organizations() {
        assert!(valid("556703-7485"));
        assert!(valid("5567037485"));
        assert!(valid("16556703-7485"));
        assert!(valid("556074-7569"));
        assert!(valid("252002-6135"));
    }

    #[test]
    fn test_structural_rules() {
        // leading zero year
        assert!(!valid("056703-7486"));
        // month below 20
        assert!(!valid("8001013294"));
        // plus divider
        assert!(!valid("556703+7485"));
        // century other than 16
        assert!(!valid("19556703-7485"));
        // checksum
        assert!(!valid("556703-7484"));
    }

    #[test]
    fn test_corporate_form() {
        let cases = [
            ("556703-7485", CorporateForm::LimitedCompany),
            ("252002-6135", CorporateForm::StateCountyCouncilMunicipality),
            ("802405-0190", CorporateForm::NonProfitFoundation),
        ];
        for (input, expected) in cases {
            let org = Organization::new(input).unwrap();
            assert_eq!(org.corporate_form(), expected, "{input}");
        }
    }

    #[test]
    fn test_corporate_form_from_year() {
        assert_eq!(CorporateForm::from_year(10), CorporateForm::Estate);
        assert_eq!(CorporateForm::from_year(45), CorporateForm::Unknown);
        assert_eq!(CorporateForm::from_year(3), CorporateForm::Unknown);
        assert_eq!(CorporateForm::from_year(99), CorporateForm::TradingPartnership);
        assert_eq!(CorporateForm::LimitedCompany.to_string(), "Aktiebolag");
    }

    #[test]
    fn test_display_drops_century() {
        let org = Organization::new("16556703-7485").unwrap();
        assert_eq!(org.to_string(), "556703-7485");
    }
}

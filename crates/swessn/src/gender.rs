//! Gender as encoded by the last serial digit.
//!
//! The parity of the serial's last digit is a registration convention of the
//! numbering scheme: odd for men, even for women. It says nothing beyond what
//! was registered when the number was issued.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SsnError;

/// Registered gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Odd last serial digit.
    Male,
    /// Even last serial digit.
    Female,
}

impl Gender {
    /// Gender encoded by a serial.
    #[must_use]
    pub fn from_serial(serial: u16) -> Self {
        if serial % 2 == 0 {
            Self::Female
        } else {
            Self::Male
        }
    }

    /// Last serial digits that encode this gender.
    #[must_use]
    pub const fn serial_digits(self) -> [u16; 5] {
        match self {
            Self::Male => [1, 3, 5, 7, 9],
            Self::Female => [2, 4, 6, 8, 0],
        }
    }
}

impl FromStr for Gender {
    type Err = SsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(SsnError::InvalidGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

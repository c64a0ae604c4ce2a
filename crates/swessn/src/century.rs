//! Century inference for numbers written without a century prefix.
//!
//! The two-digit year is first placed in the current century. If that puts
//! the birth date after today, the number belongs to the previous century.
//! A `+` divider means the holder has turned 100 and moves the result back
//! one more century.
//!
//! | Divider | Date this century | Century        |
//! |---------|-------------------|----------------|
//! | `-`     | passed            | current        |
//! | `-`     | not yet passed    | previous       |
//! | `+`     | passed            | previous       |
//! | `+`     | not yet passed    | two back       |

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{Result, SsnError};
use crate::parsed::{Divider, Parsed};

/// Resolve the century of a parsed number relative to `today`.
///
/// Returns the century as a multiple of 100. A record that already carries a
/// century is returned unchanged. Fails with [`SsnError::InvalidFormat`] when
/// the month and day cannot form a date in the current century.
pub fn resolve_century(parsed: &Parsed, today: NaiveDate) -> Result<u16> {
    if parsed.has_century() {
        return Ok(parsed.century());
    }

    let current_century = today.year().div_euclid(100) * 100;
    let mut year = current_century + i32::from(parsed.year());

    let candidate = NaiveDate::from_ymd_opt(
        year,
        u32::from(parsed.month()),
        u32::from(parsed.calendar_day()),
    )
    .ok_or_else(|| SsnError::InvalidFormat(parsed.to_string()))?;

    if candidate > today {
        year -= 100;
    }
    if parsed.divider() == Divider::Plus {
        year -= 100;
    }

    let century = u16::try_from(year.div_euclid(100) * 100)
        .map_err(|_| SsnError::InvalidFormat(parsed.to_string()))?;

    debug!(number = %parsed, %today, century, "inferred century");
    Ok(century)
}

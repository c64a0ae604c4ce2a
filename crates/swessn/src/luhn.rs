//! Luhn (mod 10) checksum over the date and serial digits.
//!
//! The checksum covers the nine digits `YYMMDDSSS` exactly as written in the
//! identity number. Digits at even positions (0-based) are doubled and a
//! doubled value above 9 has 9 subtracted; the control digit is whatever
//! brings the total up to the next multiple of ten.
//!
//! The day is the raw day, so a coordination number (day + 60) checksums over
//! the offset day.

/// Number of digits covered by the checksum.
const CHECKSUM_DIGITS: usize = 9;

/// Weighted digit sum of `YYMMDDSSS`.
///
/// Each field is taken at its fixed width (two digits for year, month and
/// day, three for the serial); higher-order digits beyond that width are
/// ignored.
#[must_use]
pub fn checksum(year: u8, month: u8, day: u8, serial: u16) -> u32 {
    digits(year, month, day, serial)
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            let digit = u32::from(digit);
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}

/// Control digit for a checksum: `(10 - sum % 10) % 10`.
#[must_use]
pub fn control_digit_from(checksum: u32) -> u8 {
    // Result is always 0..=9.
    ((10 - checksum % 10) % 10) as u8
}

/// Control digit for the given date and serial fields.
#[must_use]
pub fn control_digit(year: u8, month: u8, day: u8, serial: u16) -> u8 {
    control_digit_from(checksum(year, month, day, serial))
}

fn digits(year: u8, month: u8, day: u8, serial: u16) -> [u8; CHECKSUM_DIGITS] {
    let pair = |value: u8| [(value / 10) % 10, value % 10];
    let [y1, y2] = pair(year);
    let [m1, m2] = pair(month);
    let [d1, d2] = pair(day);
    // serial % 1000 < 1000, each digit fits in u8
    let serial = serial % 1000;
    [
        y1,
        y2,
        m1,
        m2,
        d1,
        d2,
        (serial / 100) as u8,
        ((serial / 10) % 10) as u8,
        (serial % 10) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_numbers() {
        // 800101-329|4
        assert_eq!(checksum(80, 1, 1, 329), 26);
        assert_eq!(control_digit(80, 1, 1, 329), 4);

        // 090314-660|3
        assert_eq!(checksum(9, 3, 14, 660), 27);
        assert_eq!(control_digit(9, 3, 14, 660), 3);

        // 556703-748|5 (organization)
        assert_eq!(control_digit(55, 67, 3, 748), 5);
    }

    #[test]
    fn test_coordination_day_is_checksummed_raw() {
        // 180377-238|1 is a coordination number for 2018-03-17
        assert_eq!(control_digit(18, 3, 77, 238), 1);
        assert_ne!(control_digit(18, 3, 17, 238), 1);
    }

    #[test]
    fn test_control_digit_wraps_ten_to_zero() {
        assert_eq!(control_digit_from(0), 0);
        assert_eq!(control_digit_from(30), 0);
        assert_eq!(control_digit_from(31), 9);
        assert_eq!(control_digit_from(39), 1);
    }

    #[test]
    fn test_doubled_digits_above_nine() {
        // 9 at an even index contributes 18 - 9 = 9
        assert_eq!(checksum(90, 0, 0, 0), 9);
        // 5 at an even index contributes 10 - 9 = 1
        assert_eq!(checksum(50, 0, 0, 0), 1);
        // odd index is taken as-is
        assert_eq!(checksum(9, 0, 0, 0), 9);
    }

    #[test]
    fn test_serial_is_zero_padded() {
        // 000000-007: the 7 sits at index 8 (even) and is doubled
        assert_eq!(checksum(0, 0, 0, 7), 5);
        // 000000-070: index 7 (odd)
        assert_eq!(checksum(0, 0, 0, 70), 7);
    }
}

//! Interpretation options.

use chrono::{Local, NaiveDate};

/// Options for interpreting personal identity numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Date treated as "today" when inferring the century and computing age.
    /// `None` uses the local clock.
    pub reference_date: Option<NaiveDate>,
    /// Accept coordination numbers as valid persons (default: true).
    pub allow_coordination_numbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            reference_date: None,
            allow_coordination_numbers: true,
        }
    }
}

impl Options {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin "today" to a fixed date.
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Reject coordination numbers.
    #[must_use]
    pub fn without_coordination_numbers(mut self) -> Self {
        self.allow_coordination_numbers = false;
        self
    }

    /// The reference date, falling back to the local clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::new();
        assert!(options.reference_date.is_none());
        assert!(options.allow_coordination_numbers);
    }

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let options = Options::new()
            .with_reference_date(date)
            .without_coordination_numbers();
        assert_eq!(options.today(), date);
        assert!(!options.allow_coordination_numbers);
    }
}

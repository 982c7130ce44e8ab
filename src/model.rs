// File: ./src/model.rs
// Festival record and the validation applied to user input.
use crate::error::InputError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FESTIVAL_NAME: &str = "Unnamed";

fn default_name() -> String {
    DEFAULT_FESTIVAL_NAME.to_string()
}

/// A festival recurring every year on a fixed Bikram Sambat month and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalRecord {
    #[serde(default = "default_name")]
    pub name: String,
    pub month: u32,
    pub day: u32,
}

impl FestivalRecord {
    /// Builds a record from already-typed values.
    ///
    /// Blank names fall back to "Unnamed". Month must be 1-12 and day 1-31;
    /// whether the day exists in a particular BS year is only known once the
    /// record is resolved against the calendar.
    pub fn new(name: &str, month: u32, day: u32) -> Result<Self, InputError> {
        check_range("Month", month as i64, 1, 12)?;
        check_range("Day", day as i64, 1, 31)?;

        let name = name.trim();
        Ok(Self {
            name: if name.is_empty() {
                default_name()
            } else {
                name.to_string()
            },
            month,
            day,
        })
    }

    /// Builds a record from raw text fields, as typed into the add form or CLI.
    pub fn from_input(name: &str, month: &str, day: &str) -> Result<Self, InputError> {
        let month = parse_number("Month", month)?;
        let day = parse_number("Day", day)?;
        check_range("Month", month, 1, 12)?;
        check_range("Day", day, 1, 31)?;
        Self::new(name, month as u32, day as u32)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber {
            field,
            value: raw.trim().to_string(),
        })
}

fn check_range(field: &'static str, value: i64, min: u32, max: u32) -> Result<(), InputError> {
    if value < min as i64 || value > max as i64 {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_defaults_to_unnamed() {
        let rec = FestivalRecord::from_input("   ", "6", "10").unwrap();
        assert_eq!(rec.name, "Unnamed");
        assert_eq!((rec.month, rec.day), (6, 10));
    }

    #[test]
    fn test_name_is_trimmed() {
        let rec = FestivalRecord::from_input("  Dashain ", "6", "10").unwrap();
        assert_eq!(rec.name, "Dashain");
    }

    #[test]
    fn test_non_numeric_month_rejected() {
        let err = FestivalRecord::from_input("Tihar", "Kartik", "3").unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: "Month",
                value: "Kartik".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        let err = FestivalRecord::from_input("Tihar", "7", "32").unwrap_err();
        assert!(matches!(
            err,
            InputError::OutOfRange {
                field: "Day",
                value: 32,
                ..
            }
        ));
        assert!(FestivalRecord::from_input("x", "0", "1").is_err());
        assert!(FestivalRecord::from_input("x", "-3", "1").is_err());
    }

    #[test]
    fn test_missing_name_deserializes_as_unnamed() {
        let rec: FestivalRecord = serde_json::from_str(r#"{"month": 1, "day": 1}"#).unwrap();
        assert_eq!(rec.name, "Unnamed");
    }
}

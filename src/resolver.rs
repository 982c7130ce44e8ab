// File: ./src/resolver.rs
// Finds the next Gregorian date on which a BS festival falls.
use crate::calendar::BsCalendar;
use crate::error::ConversionError;
use crate::model::FestivalRecord;
use chrono::NaiveDate;

/// Returns the earliest AD date on or after `today` for the festival's
/// month/day, looking at the current BS year and then the following one.
///
/// Only one roll-over is attempted. If the date does not exist in either
/// year the error from the second conversion is returned.
pub fn next_occurrence(
    calendar: &dyn BsCalendar,
    record: &FestivalRecord,
    today: NaiveDate,
) -> Result<NaiveDate, ConversionError> {
    let year = calendar.bs_year_of(today)?;

    match calendar.bs_to_ad(year, record.month, record.day) {
        Ok(candidate) if candidate >= today => Ok(candidate),
        Ok(_) | Err(_) => {
            let next_year = year
                .checked_add(1)
                .ok_or_else(|| ConversionError::Unavailable(format!("no BS year after {}", year)))?;
            let next = calendar.bs_to_ad(next_year, record.month, record.day)?;
            log::debug!(
                "'{}' rolled over to BS {} ({})",
                record.name,
                next_year,
                next
            );
            Ok(next)
        }
    }
}

// File: ./src/calendar.rs
/*! Bikram Sambat calendar adapter.

The crate does not implement BS calendar rules. Month lengths vary per year
and are published as tables, so the conversion capability is a data file
supplied at startup and wrapped by [`TableCalendar`]. Everything that needs
conversions goes through the [`BsCalendar`] trait, which keeps the resolver
independent of where the calendar data comes from.
*/

use crate::error::ConversionError;
use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const BS_MONTH_NAMES: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// A date in the Bikram Sambat calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BsDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BsDate {
    pub fn month_name(&self) -> &'static str {
        BS_MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?")
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.month_name(), self.day)
    }
}

/// Conversion capability between BS and AD dates.
///
/// The trait is object-safe so the app can hold an `Arc<dyn BsCalendar>`
/// and tests can swap in a fixed mapping.
pub trait BsCalendar: Send + Sync + fmt::Debug {
    fn bs_to_ad(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, ConversionError>;

    fn ad_to_bs(&self, date: NaiveDate) -> Result<BsDate, ConversionError>;

    /// The BS year that contains the given AD date.
    fn bs_year_of(&self, date: NaiveDate) -> Result<i32, ConversionError> {
        Ok(self.ad_to_bs(date)?.year)
    }

    fn today_bs_year(&self) -> Result<i32, ConversionError> {
        self.bs_year_of(Local::now().date_naive())
    }
}

/// On-disk layout of a BS calendar table.
///
/// `month_lengths[i]` holds the twelve month lengths of BS year
/// `first_year + i`, and `first_day_ad` is the AD date of 1 Baisakh of
/// `first_year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarTable {
    pub first_year: i32,
    pub first_day_ad: NaiveDate,
    pub month_lengths: Vec<[u32; 12]>,
}

/// Table-driven [`BsCalendar`].
#[derive(Debug, Clone)]
pub struct TableCalendar {
    first_year: i32,
    last_year: i32,
    month_lengths: Vec<[u32; 12]>,
    // AD date of 1 Baisakh for each year, plus one trailing entry for the
    // day after the last covered year.
    year_starts: Vec<NaiveDate>,
}

impl TableCalendar {
    pub fn new(table: CalendarTable) -> Result<Self> {
        if table.month_lengths.is_empty() {
            anyhow::bail!("Calendar table covers no years");
        }
        let last_year = i32::try_from(table.month_lengths.len() - 1)
            .ok()
            .and_then(|span| table.first_year.checked_add(span))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Calendar table starting at BS {} overflows the year range",
                    table.first_year
                )
            })?;
        // Every year up to `last_year` also has a successor for roll-over.
        if last_year == i32::MAX {
            anyhow::bail!("Calendar table must end before BS {}", i32::MAX);
        }

        let mut year_starts = Vec::with_capacity(table.month_lengths.len() + 1);
        let mut start = table.first_day_ad;
        year_starts.push(start);

        for (i, months) in table.month_lengths.iter().enumerate() {
            let year = table.first_year + i as i32;
            if let Some((m, len)) = months
                .iter()
                .enumerate()
                .find(|(_, len)| !(29..=32).contains(*len))
            {
                anyhow::bail!(
                    "BS {} month {} has {} days (expected 29-32)",
                    year,
                    m + 1,
                    len
                );
            }
            let year_len: u32 = months.iter().sum();
            start = start
                .checked_add_days(Days::new(year_len as u64))
                .ok_or_else(|| anyhow::anyhow!("Calendar table overflows the AD date range"))?;
            year_starts.push(start);
        }

        Ok(Self {
            first_year: table.first_year,
            last_year,
            month_lengths: table.month_lengths,
            year_starts,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let table: CalendarTable =
            serde_json::from_str(json).context("Failed to parse BS calendar table")?;
        Self::new(table)
    }

    /// Loads the calendar table the app depends on.
    ///
    /// A missing or unreadable file is an error: without it nothing can be
    /// resolved, so callers treat this as fatal at startup.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("BS calendar data not found at '{}'", path.display());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read BS calendar data '{}'", path.display()))?;
        let cal = Self::from_json(&json)
            .with_context(|| format!("Invalid BS calendar data in '{}'", path.display()))?;
        log::info!(
            "Loaded BS calendar {}-{} from {}",
            cal.first_year(),
            cal.last_year(),
            path.display()
        );
        Ok(cal)
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.last_year
    }

    fn year_index(&self, year: i32) -> Result<usize, ConversionError> {
        if year < self.first_year || year > self.last_year {
            return Err(ConversionError::YearOutOfRange {
                year,
                first: self.first_year,
                last: self.last_year,
            });
        }
        Ok((year - self.first_year) as usize)
    }
}

impl BsCalendar for TableCalendar {
    fn bs_to_ad(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, ConversionError> {
        if !(1..=12).contains(&month) {
            return Err(ConversionError::InvalidMonth(month));
        }
        let idx = self.year_index(year)?;
        let months = &self.month_lengths[idx];
        let month_len = months[month as usize - 1];
        if day == 0 || day > month_len {
            return Err(ConversionError::InvalidDay {
                year,
                month,
                day,
                month_len,
            });
        }

        let offset: u32 = months[..month as usize - 1].iter().sum::<u32>() + day - 1;
        self.year_starts[idx]
            .checked_add_days(Days::new(offset as u64))
            .ok_or_else(|| ConversionError::Unavailable("AD date overflow".to_string()))
    }

    fn ad_to_bs(&self, date: NaiveDate) -> Result<BsDate, ConversionError> {
        let end = self.year_starts[self.year_starts.len() - 1];
        if date < self.year_starts[0] || date >= end {
            return Err(ConversionError::DateOutOfRange(date));
        }

        // Last year start that is <= date.
        let idx = self.year_starts.partition_point(|s| *s <= date) - 1;
        let mut remaining = (date - self.year_starts[idx]).num_days() as u32;
        for (m, len) in self.month_lengths[idx].iter().enumerate() {
            if remaining < *len {
                return Ok(BsDate {
                    year: self.first_year + idx as i32,
                    month: m as u32 + 1,
                    day: remaining + 1,
                });
            }
            remaining -= len;
        }
        Err(ConversionError::DateOutOfRange(date))
    }
}

// File: src/controller.rs
//! Festival operations shared by the TUI and the command line.
//! Both front ends go through `FestivalController` so validation, persistence
//! and date resolution behave the same everywhere.
use crate::calendar::{BsCalendar, BsDate, TableCalendar};
use crate::config::Config;
use crate::context::AppContext;
use crate::countdown::{countdown_target, format_remaining};
use crate::error::ConversionError;
use crate::model::FestivalRecord;
use crate::resolver::next_occurrence;
use crate::store::FestivalStore;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use std::sync::Arc;

/// A festival paired with the AD date it next falls on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub record: FestivalRecord,
    pub date: NaiveDate,
}

impl Occurrence {
    /// Headline shown above the countdown.
    pub fn headline(&self) -> String {
        format!(
            "{} — on {} (AD)",
            self.record.name,
            self.date.format("%Y-%m-%d")
        )
    }

    pub fn target(&self) -> NaiveDateTime {
        countdown_target(self.date)
    }

    pub fn remaining(&self, now: NaiveDateTime) -> String {
        format_remaining(self.target(), now)
    }
}

pub struct FestivalController {
    pub store: FestivalStore,
    pub calendar: Arc<dyn BsCalendar>,
    pub calendar_path: PathBuf,
}

impl FestivalController {
    pub fn new(store: FestivalStore, calendar: Arc<dyn BsCalendar>, calendar_path: PathBuf) -> Self {
        Self {
            store,
            calendar,
            calendar_path,
        }
    }

    /// Opens the festival list and loads the calendar data named by `config`.
    ///
    /// Fails when the calendar data is missing or invalid; the app cannot do
    /// anything useful without it.
    pub fn bootstrap(ctx: &dyn AppContext, config: &Config) -> Result<Self> {
        let calendar_path = config.calendar_data_path(ctx)?;
        let calendar = TableCalendar::load(&calendar_path).context(
            "Bikram Sambat calendar data is required. \
             Set 'calendar_data' in config.toml or place bs_calendar.json in the data directory",
        )?;
        let store = FestivalStore::open(config.festival_path(ctx)?);
        log::info!(
            "Opened {} festivals from {}",
            store.len(),
            store.path().display()
        );
        Ok(Self::new(store, Arc::new(calendar), calendar_path))
    }

    /// Validates raw form input and appends the festival. Returns its index.
    pub fn add_from_input(&mut self, name: &str, month: &str, day: &str) -> Result<usize> {
        let record = FestivalRecord::from_input(name, month, day)?;
        self.store.add(record)
    }

    pub fn remove(&mut self, index: usize) -> Result<Option<FestivalRecord>> {
        self.store.remove(index)
    }

    pub fn resolve(&self, index: usize, today: NaiveDate) -> Option<Result<Occurrence, ConversionError>> {
        let record = self.store.get(index)?;
        Some(
            next_occurrence(self.calendar.as_ref(), record, today).map(|date| Occurrence {
                record: record.clone(),
                date,
            }),
        )
    }

    pub fn today_bs(&self, today: NaiveDate) -> Result<BsDate, ConversionError> {
        self.calendar.ad_to_bs(today)
    }
}

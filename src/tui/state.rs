// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::calendar::BsDate;
use crate::controller::FestivalController;
use chrono::{NaiveDate, NaiveDateTime};
use ratatui::widgets::ListState;

pub const NO_SELECTION: &str = "No festival selected";
pub const NO_COUNTDOWN: &str = "---";
pub const EMPTY_LIST: &str = "(no festivals)";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Adding,
}

pub const FORM_LABELS: [&str; 3] = ["Name", "Month (1-12)", "Day (1-31)"];

/// Text fields of the "add festival" popup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub fields: [String; 3],
    pub focus: usize,
}

impl AddForm {
    pub fn enter_char(&mut self, c: char) {
        self.fields[self.focus].push(c);
    }

    pub fn delete_char(&mut self) {
        self.fields[self.focus].pop();
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn previous_field(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn is_last_field(&self) -> bool {
        self.focus == self.fields.len() - 1
    }
}

pub struct AppState {
    pub controller: FestivalController,

    // UI State
    pub list_state: ListState,
    pub mode: InputMode,
    pub form: AddForm,
    pub message: String,
    /// Modal message that swallows the next key press.
    pub notice: Option<String>,

    // Display
    pub info_text: String,
    pub countdown_text: String,
    pub today_bs: Option<BsDate>,
    target: Option<NaiveDateTime>,
    resolved_on: Option<NaiveDate>,
}

impl AppState {
    pub fn new(controller: FestivalController) -> Self {
        let mut list_state = ListState::default();
        if !controller.store.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            controller,
            list_state,
            mode: InputMode::Normal,
            form: AddForm::default(),
            message: "a:Add  d:Remove  j/k:Select  q:Quit".to_string(),
            notice: None,
            info_text: String::new(),
            countdown_text: NO_COUNTDOWN.to_string(),
            today_bs: None,
            target: None,
            resolved_on: None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|i| *i < self.controller.store.len())
    }

    /// Names for the selector, with a placeholder when the list is empty.
    pub fn festival_names(&self) -> Vec<String> {
        if self.controller.store.is_empty() {
            return vec![EMPTY_LIST.to_string()];
        }
        self.controller
            .store
            .festivals()
            .iter()
            .map(|f| f.name.clone())
            .collect()
    }

    /// Resolves the selected festival for `today` and resets the countdown
    /// target. Conversion failures replace the countdown with an error line.
    pub fn update_display(&mut self, today: NaiveDate) {
        self.resolved_on = Some(today);
        self.today_bs = self.controller.today_bs(today).ok();

        let Some(idx) = self.selected_index() else {
            self.info_text = NO_SELECTION.to_string();
            self.countdown_text = NO_COUNTDOWN.to_string();
            self.target = None;
            return;
        };

        match self.controller.resolve(idx, today) {
            Some(Ok(occ)) => {
                self.info_text = occ.headline();
                self.target = Some(occ.target());
            }
            Some(Err(e)) => {
                log::warn!("Could not resolve festival #{}: {}", idx, e);
                self.info_text = format!("Error: {}", e);
                self.countdown_text = NO_COUNTDOWN.to_string();
                self.target = None;
            }
            None => {
                self.info_text = NO_SELECTION.to_string();
                self.countdown_text = NO_COUNTDOWN.to_string();
                self.target = None;
            }
        }
    }

    /// Periodic refresh. Re-resolves when the day changes so a festival that
    /// just passed moves on to its next occurrence.
    pub fn tick(&mut self, now: NaiveDateTime) {
        if self.resolved_on != Some(now.date()) {
            self.update_display(now.date());
        }
        if let Some(target) = self.target {
            self.countdown_text = crate::countdown::format_remaining(target, now);
        }
    }

    pub fn select(&mut self, index: Option<usize>, today: NaiveDate) {
        self.list_state.select(index);
        self.update_display(today);
    }

    // --- NAVIGATION ---
    pub fn next(&mut self, today: NaiveDate) {
        let len = self.controller.store.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.select(Some(i), today);
    }

    pub fn previous(&mut self, today: NaiveDate) {
        let len = self.controller.store.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.select(Some(i), today);
    }
}

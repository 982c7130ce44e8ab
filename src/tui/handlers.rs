// File: src/tui/handlers.rs
// Handles keyboard input and applies the resulting actions.
use crate::error::InputError;
use crate::tui::action::Action;
use crate::tui::state::{AddForm, AppState, InputMode};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState, today: NaiveDate) -> Option<Action> {
    // A visible notice blocks everything until acknowledged.
    if state.notice.is_some() {
        state.notice = None;
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => {
                state.next(today);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.previous(today);
                None
            }
            KeyCode::Char('a') => {
                state.form = AddForm::default();
                state.mode = InputMode::Adding;
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveSelected),
            _ => None,
        },
        InputMode::Adding => match key.code {
            KeyCode::Esc => {
                state.mode = InputMode::Normal;
                state.form = AddForm::default();
                None
            }
            KeyCode::Enter if state.form.is_last_field() => {
                let [name, month, day] = state.form.fields.clone();
                Some(Action::AddFestival { name, month, day })
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                state.form.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.form.previous_field();
                None
            }
            KeyCode::Backspace => {
                state.form.delete_char();
                None
            }
            KeyCode::Char(c) => {
                state.form.enter_char(c);
                None
            }
            _ => None,
        },
    }
}

pub fn apply_action(state: &mut AppState, action: Action, today: NaiveDate) {
    match action {
        Action::AddFestival { name, month, day } => {
            match state.controller.add_from_input(&name, &month, &day) {
                Ok(idx) => {
                    state.mode = InputMode::Normal;
                    state.form = AddForm::default();
                    state.message = format!("Added '{}'.", state.festival_names()[idx]);
                    state.select(Some(idx), today);
                }
                Err(e) if e.downcast_ref::<InputError>().is_some() => {
                    // Keep the form open so the input can be corrected.
                    state.notice = Some(e.to_string());
                }
                Err(e) => {
                    log::error!("Saving after add failed: {:#}", e);
                    state.mode = InputMode::Normal;
                    state.form = AddForm::default();
                    state.notice = Some(format!("{:#}", e));
                    let last = state.controller.store.len().checked_sub(1);
                    state.select(last, today);
                }
            }
        }
        Action::RemoveSelected => {
            let Some(idx) = state.selected_index() else {
                return;
            };
            match state.controller.remove(idx) {
                Ok(Some(removed)) => state.message = format!("Removed '{}'.", removed.name),
                Ok(None) => {}
                Err(e) => {
                    log::error!("Saving after remove failed: {:#}", e);
                    state.notice = Some(format!("{:#}", e));
                }
            }
            let first = (!state.controller.store.is_empty()).then_some(0);
            state.select(first, today);
        }
        Action::Quit => {}
    }
}

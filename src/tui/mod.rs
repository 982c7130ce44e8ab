// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::controller::FestivalController;
use crate::countdown::TICK_INTERVAL;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::time::MissedTickBehavior;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into cooked mode. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

pub async fn run(controller: FestivalController) -> Result<()> {
    // --- 1. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 2. STATE INIT ---
    let mut app_state = AppState::new(controller);
    app_state.update_display(Local::now().date_naive());

    // --- 3. UI LOOP ---
    let result = event_loop(&mut terminal, &mut app_state).await;

    // --- 4. CLEANUP ---
    restore_terminal();
    terminal.show_cursor()?;
    result
}

async fn event_loop(terminal: &mut Term, state: &mut AppState) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| draw(f, state))?;

        tokio::select! {
            _ = ticker.tick() => {
                state.tick(Local::now().naive_local());
            }
            maybe_event = events.next() => {
                let event = match maybe_event {
                    Some(event) => event?,
                    None => break,
                };
                // Filter out KeyRelease events to prevent double input on Windows
                if let Event::Key(key) = event
                    && key.kind != KeyEventKind::Release
                {
                    let now = Local::now().naive_local();
                    if let Some(action) = handlers::handle_key_event(key, state, now.date()) {
                        if action == Action::Quit {
                            break;
                        }
                        handlers::apply_action(state, action, now.date());
                    }
                    state.tick(now);
                }
            }
        }
    }

    log::info!("Leaving TUI");
    Ok(())
}

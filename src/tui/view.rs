// File: src/tui/view.rs
use crate::tui::state::{AppState, FORM_LABELS, InputMode};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    // --- Header ---
    let today = match &state.today_bs {
        Some(bs) => format!("Today: {} (BS)", bs),
        None => "Today: outside calendar data range".to_string(),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Nepali Festival Countdown (BS) ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(today, Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, v_chunks[0]);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(v_chunks[1]);

    // --- Festival list ---
    let names = state.festival_names();
    let items: Vec<ListItem> = names.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Festivals "))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, h_chunks[0], &mut state.list_state);

    // --- Countdown ---
    let detail_block = Block::default().borders(Borders::ALL).title(" Next ");
    let inner = detail_block.inner(h_chunks[1]);
    f.render_widget(detail_block, h_chunks[1]);

    let d_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let info = Paragraph::new(state.info_text.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(info, d_chunks[1]);

    let countdown = Paragraph::new(Span::styled(
        state.countdown_text.as_str(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(countdown, d_chunks[2]);

    // --- Footer ---
    let footer = Paragraph::new(vec![
        Line::from(state.message.as_str()),
        Line::from(Span::styled(
            format!(
                "BS dates only. Calendar data: {}",
                state.controller.calendar_path.display()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, v_chunks[2]);

    if state.mode == InputMode::Adding {
        draw_add_form(f, state);
    }

    if let Some(notice) = &state.notice {
        let area = centered_rect(60, 25, f.area());
        f.render_widget(Clear, area);
        let popup = Paragraph::new(vec![
            Line::from(notice.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(Color::Red)),
        );
        f.render_widget(popup, area);
    }
}

fn draw_add_form(f: &mut Frame, state: &AppState) {
    let area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add BS Festival ")
        .title_bottom(" Tab:Next  Enter:Save  Esc:Cancel ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, label) in FORM_LABELS.iter().enumerate() {
        let focused = state.form.focus == i;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let field = Paragraph::new(state.form.fields[i].as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", label))
                .border_style(border_style),
        );
        f.render_widget(field, rows[i]);

        if focused && state.notice.is_none() {
            let x = rows[i].x + 1 + state.form.fields[i].chars().count() as u16;
            f.set_cursor_position((x.min(rows[i].right().saturating_sub(2)), rows[i].y + 1));
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

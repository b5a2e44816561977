use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::party_themes::PARTY_THEMES;

pub fn draw_sidebar(f: &mut Frame<'_>, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(3),
                Constraint::Length(PARTY_THEMES.len() as u16 + 3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);

    draw_history(f, app, chunks[0]);
    draw_theme_picker(f, app, chunks[1]);
    draw_dark_mode_checkbox(f, app, chunks[2]);
}

fn draw_history(f: &mut Frame<'_>, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::History {
        app.palette.accent
    } else {
        app.palette.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Chats")
        .style(Style::default().fg(border_color));

    if app.sessions.is_empty() {
        // Empty state, shown until the first session is registered.
        let empty = Paragraph::new("No conversations yet")
            .style(Style::default().fg(app.palette.dim))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .sessions
        .newest_first()
        .enumerate()
        .map(|(i, entry)| {
            let selected = app.focus == Focus::History && i == app.history_selected;
            let style = if selected {
                Style::default()
                    .fg(app.palette.background)
                    .bg(app.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.palette.text)
            };
            ListItem::new(entry.title.clone()).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_theme_picker(f: &mut Frame<'_>, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::ThemePicker {
        app.palette.accent
    } else {
        app.palette.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Party Themes")
        .style(Style::default().fg(border_color));

    let mut options = vec!["(choose a theme)"];
    options.extend_from_slice(PARTY_THEMES);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, &option)| {
            let selected = i == app.theme_picker.selected_index();
            let style = if selected && app.focus == Focus::ThemePicker {
                Style::default()
                    .fg(app.palette.background)
                    .bg(app.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if i == 0 {
                Style::default().fg(app.palette.dim)
            } else {
                Style::default().fg(app.palette.text)
            };
            ListItem::new(option).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_dark_mode_checkbox(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mark = if app.dark_mode_checked { "x" } else { " " };
    let line = format!("[{}] Dark mode (Ctrl+T)", mark);

    f.render_widget(
        Paragraph::new(line).style(Style::default().fg(app.palette.text)),
        area,
    );
}

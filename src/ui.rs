// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod quit_confirm;
pub mod sidebar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, AppScreen};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Paint the whole screen with the active palette first.
    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.palette.background)
                .fg(app.palette.text),
        ),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(6),
                Constraint::Min(1),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(size);

    header::draw_header(f, chunks[0], app);

    match app.screen {
        AppScreen::QuitConfirm => quit_confirm::draw_quit_confirm(f, chunks[1], app),
        _ => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)].as_ref())
                .split(chunks[1]);

            sidebar::draw_sidebar(f, body[0], app);
            chat::draw_chat(f, body[1], app);
        }
    }

    footer::draw_footer(f, chunks[2], app);
}

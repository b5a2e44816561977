use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let logo = r#"
  ____                      _    ___
 |  _ \  ___  ___ ___  _ __/ \  |_ _|
 | | | |/ _ \/ __/ _ \| '__/ _ \ | |
 | |_| |  __/ (_| (_) | | / ___ \| |
 |____/ \___|\___\___/|_|/_/   \_\___|
    "#;

    let block = Block::default()
        .style(Style::default().fg(app.palette.accent))
        .borders(Borders::NONE);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let logo_paragraph = Paragraph::new(logo)
        .style(
            Style::default()
                .fg(app.palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);
    f.render_widget(logo_paragraph, chunks[0]);

    let title = Paragraph::new("Your party design assistant")
        .style(
            Style::default()
                .fg(app.palette.text)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);
}

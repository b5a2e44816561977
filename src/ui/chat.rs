use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::chat::{Message, Sender};
use crate::theme::Palette;

pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Chat")
        .style(Style::default().fg(app.palette.text));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Min(1),    // Messages
                Constraint::Length(1), // Status
                Constraint::Length(3), // Input
            ]
            .as_ref(),
        )
        .split(area);

    draw_messages(f, app, chunks[0]);

    app.status.update_spinner();
    app.status.render(f, chunks[1], &app.palette);

    draw_input(f, app, chunks[2]);
}

fn draw_messages(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let palette = app.palette;
    let mut lines = Vec::new();
    for message in &app.messages {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message_lines(message, area, &palette));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    // Clamp and write back, so appends that park the offset far past the end
    // settle on the real bottom.
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let messages = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(messages.scroll((app.chat_scroll, 0)), area);
}

fn message_lines(message: &Message, area: Rect, palette: &Palette) -> Vec<Line<'static>> {
    let (prefix, color) = match message.sender {
        Sender::User => ("You: ", palette.user),
        Sender::AI => ("AI: ", palette.assistant),
    };
    let style = Style::default().fg(color);

    let wrap_width = (area.width as usize).saturating_sub(prefix.len() + 2).max(8);
    let wrapped = wrap(&message.content, wrap_width);

    let mut lines = Vec::new();
    for (i, wrapped_line) in wrapped.iter().enumerate() {
        let lead = if i == 0 {
            Span::styled(prefix.to_string(), style.add_modifier(Modifier::BOLD))
        } else {
            Span::styled(" ".repeat(prefix.len()), style)
        };
        lines.push(Line::from(vec![
            lead,
            Span::styled(wrapped_line.to_string(), style),
        ]));
    }
    lines
}

fn draw_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Input {
        app.palette.accent
    } else {
        app.palette.dim
    };

    let input = Paragraph::new(app.input.as_str())
        .style(Style::default().fg(app.palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Message")
                .style(Style::default().fg(border_color)),
        );
    f.render_widget(input, area);

    if app.focus == Focus::Input {
        let cursor_x = area.x + 1 + app.input.as_str().width() as u16;
        f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

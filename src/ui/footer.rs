use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppScreen, Focus};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = match app.screen {
        AppScreen::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        _ => match app.focus {
            Focus::Input => {
                "Enter to send | Tab sidebar | Ctrl+N new chat | Ctrl+T dark mode | Ctrl+E export txt | Ctrl+P export pdf | Esc quit"
            }
            Focus::History => "Up/Down to pick a chat, Enter to open it. Tab for themes, Esc back to input.",
            Focus::ThemePicker => "Up/Down to pick a party theme, Enter to ask about it. Esc back to input.",
        },
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(app.palette.dim))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}

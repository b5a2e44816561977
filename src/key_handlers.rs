use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::{App, AppEvent, AppScreen, Focus};
use crate::constants::REPLY_DELAY_MS;
use crate::export::ExportFormat;

/// Schedules the simulated assistant reply as an independent single-shot
/// timer. Rapid sends each get their own timer; none are cancellable.
pub fn schedule_reply(tx: &mpsc::Sender<AppEvent>, reply: String) {
    let tx = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(REPLY_DELAY_MS)).await;
        let _ = tx.send(AppEvent::AssistantReply(reply)).await;
    });
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App, tx: &mpsc::Sender<AppEvent>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.screen = AppScreen::QuitConfirm,
            KeyCode::Char('n') => app.new_chat(),
            KeyCode::Char('t') => app.toggle_dark_mode(),
            KeyCode::Char('e') => app.export_transcript(ExportFormat::Txt),
            KeyCode::Char('p') => app.export_transcript(ExportFormat::Pdf),
            _ => {}
        }
        return;
    }

    match app.focus {
        Focus::Input => match key.code {
            KeyCode::Enter => {
                if let Some(reply) = app.submit_input() {
                    schedule_reply(tx, reply);
                }
            }
            KeyCode::Char(c) => app.input.push(c),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Tab => app.focus = Focus::History,
            KeyCode::PageUp => app.scroll_up(),
            KeyCode::PageDown => app.scroll_down(),
            KeyCode::Esc => app.screen = AppScreen::QuitConfirm,
            _ => {}
        },
        Focus::History => match key.code {
            KeyCode::Up => app.history_up(),
            KeyCode::Down => app.history_down(),
            KeyCode::Enter => app.load_selected_session(),
            KeyCode::Tab => app.focus = Focus::ThemePicker,
            KeyCode::Esc => app.focus = Focus::Input,
            _ => {}
        },
        Focus::ThemePicker => match key.code {
            KeyCode::Up => app.theme_picker.select_prev(),
            KeyCode::Down => app.theme_picker.select_next(),
            KeyCode::Enter => {
                if let Some(reply) = app.select_party_theme() {
                    schedule_reply(tx, reply);
                }
                app.focus = Focus::Input;
            }
            KeyCode::Tab => app.focus = Focus::Input,
            KeyCode::Esc => app.focus = Focus::Input,
            _ => {}
        },
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
        }
        _ => {}
    }
}

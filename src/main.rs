use anyhow::Result;
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use decorai::{
    app::{App, AppEvent, AppScreen},
    config::PrefStore,
    key_handlers, logging, ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    let _logger = logging::init()?;

    let prefs = PrefStore::open()?;
    // The palette restores from the stored preference inside App::new, ahead
    // of the first draw.
    let mut app = App::new(prefs);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // The sidebar checkbox only exists once the UI is up, so its state is
    // restored here rather than in App::new.
    app.sync_dark_mode_checkbox();

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(100);

    // Spawn a task to pump terminal input and ticks into the channel.
    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if input_tx.send(AppEvent::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(250) {
                if input_tx.send(AppEvent::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        match rx.recv().await {
            Some(AppEvent::Input(event::Event::Key(key))) => match app.screen {
                AppScreen::Chat => key_handlers::handle_chat_input(key, &mut app, &tx),
                AppScreen::QuitConfirm => key_handlers::handle_quit_confirm_input(key, &mut app),
                AppScreen::Quit => {}
            },
            Some(AppEvent::Input(_)) => {}
            Some(AppEvent::Tick) => {
                // Redraw on the next loop pass keeps the spinner moving.
            }
            Some(AppEvent::AssistantReply(content)) => app.push_assistant_reply(content),
            None => break,
        }

        if app.screen == AppScreen::Quit {
            break;
        }
    }

    Ok(())
}

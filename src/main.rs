use tokio::sync::mpsc;

use campus_eats::catalog::StaticCatalog;
use campus_eats::config::fetch_config;
use campus_eats::tui::{self, App, event};
use campus_eats::{CampusError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let config = fetch_config()?;
    let catalog = StaticCatalog::load()?;
    let tick_ms = config.tick_ms;
    let mut app = App::new(config, catalog);

    let mut terminal = tui::setup_terminal()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx, tick_ms);

    let result = run(&mut app, &mut terminal, &mut rx).await;

    restore_result(&mut terminal, result)
}

/// Draw/update loop: render the current state, then apply the next message.
async fn run(
    app: &mut App,
    terminal: &mut tui::Tui,
    rx: &mut mpsc::UnboundedReceiver<tui::Message>,
) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| tui::render(frame, app))
            .map_err(|e| CampusError::Io(format!("failed to draw frame: {e}")))?;

        match rx.recv().await {
            Some(message) => event::update(app, message),
            None => break,
        }
    }
    Ok(())
}

/// Restores the terminal, preferring the run error if both fail.
fn restore_result(terminal: &mut tui::Tui, result: Result<()>) -> Result<()> {
    let restore = tui::restore_terminal(terminal);
    result.and(restore)
}

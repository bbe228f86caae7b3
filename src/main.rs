mod app;
mod config;
mod error;
mod event;
mod http;
mod logging;
mod state;
mod terminal;
mod ui;

use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;

use crate::app::App;
use crate::config::Config;
use crate::event::Event;
use crate::http::client::HttpTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config).context("could not open the debug log")?;
    let transport = HttpTransport::new().context("could not build the HTTP client")?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    // Background thread: read crossterm events and feed into channel
    let event_tx = tx.clone();
    std::thread::spawn(move || {
        event::pump_input(
            &event_tx,
            || crossterm::event::poll(Duration::from_millis(100)),
            crossterm::event::read,
        );
    });

    let mut terminal = terminal::init().context("could not start the terminal session")?;
    let mut app = App::new(transport, tx);

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    terminal::restore()?;
    tracing::info!("exiting");
    result
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    app.handle_event(Event::Resize(size.width, size.height));

    loop {
        terminal.draw(|frame| ui::layout::render(frame, &app.state))?;

        match rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}

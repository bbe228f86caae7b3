use std::io;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Completion of the request task tagged `id`; `text` is the body preview
    /// or the transport error.
    Response { id: u64, text: String },
}

/// Forward terminal keys and resizes into `tx` until the receiver is gone or
/// the terminal stops answering `poll`.
pub fn pump_input(
    tx: &UnboundedSender<Event>,
    mut poll: impl FnMut() -> io::Result<bool>,
    mut read: impl FnMut() -> io::Result<crossterm::event::Event>,
) {
    while !tx.is_closed() {
        match poll() {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                tracing::error!(error = %err, "terminal input unavailable");
                break;
            }
        }
        match read() {
            Ok(crossterm::event::Event::Key(key)) => {
                let _ = tx.send(Event::Key(key));
            }
            Ok(crossterm::event::Event::Resize(w, h)) => {
                let _ = tx.send(Event::Resize(w, h));
            }
            _ => {}
        }
    }
}

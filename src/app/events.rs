// ABOUTME: Terminal event input - reads crossterm events on a dedicated thread and forwards them as messages

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use super::message::Message;

// How long a poll may block before the reader checks whether the session is gone
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct EventHandler;

impl EventHandler {
    /// Map a raw terminal event to a session message; events the session ignores map to `None`
    pub fn translate(event: Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Message::Key(key)),
            Event::Resize(_, _) => Some(Message::Redraw),
            _ => None,
        }
    }

    /// Start forwarding terminal input to `sender` until the receiving side closes
    pub fn spawn_input_reader(sender: UnboundedSender<Message>) -> JoinHandle<()> {
        thread::spawn(move || {
            while !sender.is_closed() {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => match event::read() {
                        Ok(event) => {
                            if let Some(message) = Self::translate(event) {
                                if sender.send(message).is_err() {
                                    break;
                                }
                            }
                        }
                        Err(e) => {
                            warn!("Failed to read terminal event: {e}");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        warn!("Failed to poll terminal events: {e}");
                        break;
                    }
                }
            }
            debug!("Input reader stopped");
        })
    }
}

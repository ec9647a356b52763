// ABOUTME: Interactive session controller - state, messages, the reducer and the command dispatcher

pub mod dispatch;
pub mod events;
pub mod message;
pub mod state;
pub mod suggest;
pub mod update;

pub use dispatch::{Dispatcher, Services};
pub use events::EventHandler;
pub use message::{Command, Message};
pub use state::{Focus, SessionPolicy, SessionState, View};
pub use update::{init, update};

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

/// A running session: its state plus the channel every asynchronous result arrives on.
///
/// Messages are applied strictly in arrival order, one at a time.
pub struct App {
    pub state: SessionState,
    dispatcher: Dispatcher,
    sender: UnboundedSender<Message>,
    receiver: UnboundedReceiver<Message>,
    startup: Vec<Command>,
}

impl App {
    pub fn new(policy: SessionPolicy, services: Services, timeout: Option<Duration>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (state, startup) = init(policy);
        let dispatcher = Dispatcher::new(services, sender.clone()).with_timeout(timeout);

        Self {
            state,
            dispatcher,
            sender,
            receiver,
            startup,
        }
    }

    /// Handle for producers outside the session, such as the terminal input reader
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.sender.clone()
    }

    /// Issue the initial loads. Call once, inside the runtime.
    pub fn start(&mut self) {
        info!("Starting pair session");
        for command in std::mem::take(&mut self.startup) {
            self.dispatcher.dispatch(command);
        }
    }

    /// Apply one message and dispatch whatever it asks for
    pub fn handle_message(&mut self, message: Message) {
        for command in update(&mut self.state, message) {
            self.dispatcher.dispatch(command);
        }
    }

    pub async fn next_message(&mut self) -> Option<Message> {
        self.receiver.recv().await
    }

    /// A message that is already queued, without waiting
    pub fn try_next_message(&mut self) -> Option<Message> {
        self.receiver.try_recv().ok()
    }
}

// ABOUTME: Command dispatcher - runs controller commands on background workers and reports back
//
// Every collaborator call blocks, so each command runs on tokio's blocking pool and its
// outcome is sent to the session as a single Message. The session loop never waits here.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::error::PairError;
use crate::github::IdentityProvider;
use crate::hook::HookManager;
use crate::store::{add_pair, clear_pairs, remove_pair, IdentityStore};

use super::message::{Command, Message};

/// The collaborators commands run against
#[derive(Clone)]
pub struct Services {
    pub store: Arc<dyn IdentityStore>,
    pub provider: Arc<dyn IdentityProvider>,
    pub hook: Arc<dyn HookManager>,
}

impl Services {
    pub fn new(
        store: Arc<dyn IdentityStore>,
        provider: Arc<dyn IdentityProvider>,
        hook: Arc<dyn HookManager>,
    ) -> Self {
        Self {
            store,
            provider,
            hook,
        }
    }

    /// Run one command to completion on the current thread
    pub fn execute(&self, command: Command) -> Message {
        match command {
            Command::LoadPairs => match self.store.load_active() {
                Ok(active) => {
                    let recent = self.store.load_recent().unwrap_or_else(|e| {
                        warn!("Failed to load recent pairs: {e}");
                        Vec::new()
                    });
                    Message::PairsLoaded { active, recent }
                }
                Err(e) => Message::Error(e),
            },
            Command::LoadCollaborators => match self.provider.list_collaborators() {
                Ok(collaborators) => Message::CollaboratorsLoaded(collaborators),
                Err(e) => {
                    // Suggestions are optional; a failure just means fewer of them
                    warn!("Failed to load collaborators: {e}");
                    Message::CollaboratorsLoaded(Vec::new())
                }
            },
            Command::CheckHook => Message::HookStatus(self.hook.is_installed()),
            Command::InstallHook => {
                if self.hook.is_installed() {
                    return Message::HookInstalled;
                }
                match self.hook.install() {
                    Ok(()) => Message::HookInstalled,
                    Err(e) => Message::Error(e),
                }
            }
            Command::Search { query } => {
                let results = self.provider.search(&query);
                Message::SearchResults { query, results }
            }
            Command::Lookup { handle } => {
                let result = self.provider.lookup(&handle);
                Message::UserLookedUp { handle, result }
            }
            Command::LoadTeams => Message::TeamsLoaded(self.provider.list_teams()),
            Command::LoadTeamMembers { org, slug } => {
                let members = self.provider.list_team_members(&org, &slug);
                Message::TeamMembersLoaded { org, slug, members }
            }
            Command::AddPair(pair) => match add_pair(self.store.as_ref(), &pair) {
                Ok(_) => Message::PairsChanged,
                Err(e) => Message::Error(e),
            },
            Command::RemovePair { handle } => match remove_pair(self.store.as_ref(), &handle) {
                Ok(_) => Message::PairsChanged,
                Err(e) => Message::Error(e),
            },
            Command::ClearPairs => match clear_pairs(self.store.as_ref()) {
                Ok(()) => Message::PairsChanged,
                Err(e) => Message::Error(e),
            },
            Command::ScheduleTick {
                generation, query, ..
            } => Message::DebounceTick { generation, query },
        }
    }
}

/// Spawns commands and forwards their messages to the session
pub struct Dispatcher {
    services: Services,
    sender: UnboundedSender<Message>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(services: Services, sender: UnboundedSender<Message>) -> Self {
        Self {
            services,
            sender,
            timeout: None,
        }
    }

    /// Bound every blocking command; expiry is reported as `PairError::Timeout`
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start `command` in the background. Must be called from within a tokio runtime.
    pub fn dispatch(&self, command: Command) {
        debug!("Dispatching {}", command.label());

        if let Command::ScheduleTick {
            generation,
            query,
            delay,
        } = command
        {
            let sender = self.sender.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                // The session may have ended while we slept
                let _ = sender.send(Message::DebounceTick { generation, query });
            });
            return;
        }

        let services = self.services.clone();
        let sender = self.sender.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            let label = command.label();
            let context = command.clone();
            let task = tokio::task::spawn_blocking(move || services.execute(command));

            let joined = match timeout {
                Some(limit) => match tokio::time::timeout(limit, task).await {
                    Ok(joined) => joined,
                    Err(_) => {
                        warn!("{label} timed out after {limit:?}");
                        let error = PairError::Timeout(label.to_string());
                        let _ = sender.send(context.failure_message(error));
                        return;
                    }
                },
                None => task.await,
            };

            let message = joined.unwrap_or_else(|e| {
                warn!("{label} worker failed: {e}");
                context.failure_message(PairError::Transport(format!("{label} failed: {e}")))
            });

            if sender.send(message).is_err() {
                debug!("Session closed before {label} finished");
            }
        });
    }
}

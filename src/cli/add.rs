// ABOUTME: CLI add command - resolves handles through GitHub and adds them as active pairs

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use super::util::RepoContext;
use super::{AddArgs, OutputFormat};
use crate::error::PairError;
use crate::github::IdentityProvider;
use crate::hook::HookManager;
use crate::models::Pair;
use crate::store::{add_pair, IdentityStore};

/// What happened to one requested handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddOutcome {
    Added { pair: Pair },
    AlreadyActive { pair: Pair },
    Failed { handle: String, error: String },
}

/// Execute the add command
pub fn execute(args: &AddArgs, format: OutputFormat) -> Result<()> {
    let context = RepoContext::open()?;
    let provider = context.provider();
    let outcomes = add_handles(&provider, &context.store, &args.handles)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => {
            for outcome in &outcomes {
                match outcome {
                    AddOutcome::Added { pair } => {
                        println!("Added {}: {}", pair.at_handle(), pair.co_author_line());
                    }
                    AddOutcome::AlreadyActive { pair } => {
                        println!("{} is already pairing", pair.at_handle());
                    }
                    AddOutcome::Failed { handle, error } => {
                        eprintln!("Could not add {handle}: {error}");
                    }
                }
            }
            if !context.hook.is_installed() {
                println!("Run `gh-pair init` to add co-authors to your commits automatically.");
            }
        }
    }

    if outcomes.iter().any(|o| matches!(o, AddOutcome::Failed { .. })) {
        anyhow::bail!("some pairs could not be added");
    }
    Ok(())
}

/// Look up and add each handle in order.
///
/// Unknown handles are reported per handle; store failures abort.
pub fn add_handles(
    provider: &dyn IdentityProvider,
    store: &dyn IdentityStore,
    handles: &[String],
) -> Result<Vec<AddOutcome>> {
    let mut outcomes = Vec::with_capacity(handles.len());

    for handle in handles {
        let pair = match provider.lookup(handle) {
            Ok(pair) => pair,
            Err(error @ (PairError::NotFound(_) | PairError::Transport(_))) => {
                warn!("Lookup of {handle} failed: {error}");
                outcomes.push(AddOutcome::Failed {
                    handle: handle.clone(),
                    error: error.to_string(),
                });
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        let outcome = if add_pair(store, &pair)? {
            AddOutcome::Added { pair }
        } else {
            AddOutcome::AlreadyActive { pair }
        };
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::MockIdentityProvider;
    use crate::store::JsonFileStore;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn provider() -> MockIdentityProvider {
        let mut provider = MockIdentityProvider::new();
        provider.expect_lookup().returning(|handle| {
            if handle == "ghost" {
                Err(PairError::NotFound(handle.to_string()))
            } else {
                Ok(Pair::new(handle, format!("{handle} name"), "x@example.com"))
            }
        });
        provider
    }

    #[test]
    fn test_adds_known_handles_and_reports_unknown() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let handles = vec!["octocat".to_string(), "ghost".to_string(), "octocat".to_string()];

        let outcomes = add_handles(&provider(), &store, &handles).unwrap();

        let octocat = Pair::new("octocat", "octocat name", "x@example.com");
        assert_eq!(
            outcomes,
            vec![
                AddOutcome::Added {
                    pair: octocat.clone()
                },
                AddOutcome::Failed {
                    handle: "ghost".to_string(),
                    error: "user not found: ghost".to_string(),
                },
                AddOutcome::AlreadyActive { pair: octocat },
            ]
        );
        assert_eq!(store.load_active().unwrap().len(), 1);
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let json = serde_json::to_value(AddOutcome::Failed {
            handle: "ghost".to_string(),
            error: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["handle"], "ghost");
    }
}

// ABOUTME: CLI remove and clear commands - drop active pairs by handle or all at once

use anyhow::Result;

use super::util::RepoContext;
use super::{OutputFormat, RemoveArgs};
use crate::models::{normalize_handle, Pair};
use crate::store::{clear_pairs, remove_pair, IdentityStore};

/// Execute the remove command
pub fn execute(args: &RemoveArgs, format: OutputFormat) -> Result<()> {
    let context = RepoContext::open()?;
    let (removed, missing) = remove_handles(&context.store, &args.handles)?;

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({ "removed": removed, "not_found": missing });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            for pair in &removed {
                println!("Removed {}", pair.at_handle());
            }
            for handle in &missing {
                println!("@{handle} is not an active pair");
            }
        }
    }
    Ok(())
}

/// Remove each handle; returns the removed pairs and the handles that were not active
pub fn remove_handles(
    store: &dyn IdentityStore,
    handles: &[String],
) -> Result<(Vec<Pair>, Vec<String>)> {
    let mut removed = Vec::new();
    let mut missing = Vec::new();

    for handle in handles {
        let handle = normalize_handle(handle);
        match remove_pair(store, handle)? {
            Some(pair) => removed.push(pair),
            None => missing.push(handle.to_string()),
        }
    }

    Ok((removed, missing))
}

/// Execute the clear command
pub fn clear(format: OutputFormat) -> Result<()> {
    let context = RepoContext::open()?;
    let count = context.store.load_active()?.len();
    clear_pairs(&context.store)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "cleared": count })),
        OutputFormat::Text => println!("Cleared {count} pair(s)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{add_pair, JsonFileStore};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_remove_handles_accepts_at_prefix() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        add_pair(&store, &Pair::new("octocat", "The Octocat", "o@x")).unwrap();
        add_pair(&store, &Pair::new("hubot", "Hubot", "h@x")).unwrap();

        let handles = vec!["@octocat".to_string(), "ghost".to_string()];
        let (removed, missing) = remove_handles(&store, &handles).unwrap();

        assert_eq!(removed, vec![Pair::new("octocat", "", "")]);
        assert_eq!(missing, vec!["ghost".to_string()]);
        assert_eq!(store.load_active().unwrap(), vec![Pair::new("hubot", "", "")]);
    }
}

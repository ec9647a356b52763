// ABOUTME: CLI list command - prints the active pairs and the trailers the hook will add

use anyhow::Result;
use serde::Serialize;

use super::util::RepoContext;
use super::OutputFormat;
use crate::hook::HookManager;
use crate::models::Pair;
use crate::store::IdentityStore;

/// The active pairs of a repository, as reported by `list`
#[derive(Debug, Serialize)]
pub struct PairListing {
    pub pairs: Vec<Pair>,
    pub hook_installed: bool,
}

/// Execute the list command
pub fn execute(format: OutputFormat) -> Result<()> {
    let context = RepoContext::open()?;
    let listing = PairListing {
        pairs: context.store.load_active()?,
        hook_installed: context.hook.is_installed(),
    };

    match format {
        OutputFormat::Json => output_json(&listing)?,
        OutputFormat::Text => output_text(&listing),
    }
    Ok(())
}

fn output_json(listing: &PairListing) -> Result<()> {
    let json = serde_json::to_string_pretty(listing)?;
    println!("{json}");
    Ok(())
}

fn output_text(listing: &PairListing) {
    print!("{}", format_text(listing));
}

/// Text table of the active pairs
pub fn format_text(listing: &PairListing) -> String {
    let mut out = String::new();

    if listing.pairs.is_empty() {
        out.push_str("No active pairs.\n");
    } else {
        out.push_str(&format!("{:<20} {:<25} EMAIL\n", "HANDLE", "NAME"));
        out.push_str(&"-".repeat(70));
        out.push('\n');
        for pair in &listing.pairs {
            out.push_str(&format!(
                "{:<20} {:<25} {}\n",
                truncate(&pair.at_handle(), 20),
                truncate(&pair.display_name, 25),
                pair.email_address
            ));
        }
    }

    if !listing.hook_installed {
        out.push_str("\nCommit hook not installed. Run `gh-pair init` to enable co-author trailers.\n");
    }
    out
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

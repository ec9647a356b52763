// ABOUTME: IdentityProvider backed by the GitHub CLI (`gh api`)

use std::process::Command;
use tracing::{debug, info, warn};

use super::responses::{parse_repo, parse_search, parse_teams, parse_user, parse_users};
use super::IdentityProvider;
use crate::config::AppConfig;
use crate::error::{PairError, PairResult};
use crate::models::{normalize_handle, Pair, Team};

/// Shells out to `gh` for every request, reusing the user's existing gh login
#[derive(Debug, Clone)]
pub struct GhCliProvider {
    program: String,
    search_per_page: u32,
    collaborators_per_page: u32,
}

impl GhCliProvider {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            search_per_page: 10,
            collaborators_per_page: 20,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            program: config.provider.program.clone(),
            search_per_page: config.search.per_page,
            collaborators_per_page: config.collaborators.per_page,
        }
    }

    /// Run `gh <args>` and return stdout, mapping failures onto the error taxonomy
    fn run(&self, args: &[&str], what: &str) -> PairResult<Vec<u8>> {
        let program = which::which(&self.program).map_err(|e| {
            PairError::Transport(format!("'{}' is not available: {e}", self.program))
        })?;

        debug!("Running {} {}", self.program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .env("GH_PROMPT_DISABLED", "1")
            .output()
            .map_err(|e| PairError::Transport(format!("failed to run {}: {e}", self.program)))?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!("{} failed for {}: {}", self.program, what, stderr.trim());
        Err(classify_failure(&stderr, what))
    }

    fn api(&self, endpoint: &str, what: &str) -> PairResult<Vec<u8>> {
        self.run(&["api", endpoint], what)
    }
}

/// Map `gh api` stderr onto the error taxonomy
pub fn classify_failure(stderr: &str, what: &str) -> PairError {
    let message = stderr.trim();
    if message.contains("HTTP 404") || message.contains("Not Found") {
        PairError::NotFound(what.to_string())
    } else if message.contains("HTTP 403") || message.contains("HTTP 401") {
        PairError::PermissionDenied(what.to_string())
    } else if message.is_empty() {
        PairError::Transport(format!("{what}: gh exited with an error"))
    } else {
        PairError::Transport(format!("{what}: {message}"))
    }
}

/// Treat "not allowed to list" as an empty list
fn empty_if_denied<T>(result: PairResult<Vec<T>>, what: &str) -> PairResult<Vec<T>> {
    match result {
        Err(e) if e.is_permission_denied() => {
            info!("No permission to list {}, showing none", what);
            Ok(Vec::new())
        }
        other => other,
    }
}

fn encode_query(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

impl IdentityProvider for GhCliProvider {
    fn lookup(&self, handle: &str) -> PairResult<Pair> {
        let handle = normalize_handle(handle);
        if handle.is_empty() {
            return Err(PairError::NotFound(String::new()));
        }

        let endpoint = format!("users/{handle}");
        let body = self.api(&endpoint, handle).map_err(|e| match e {
            PairError::NotFound(_) => PairError::NotFound(handle.to_string()),
            other => other,
        })?;
        parse_user(&body)
    }

    fn search(&self, text: &str) -> PairResult<Vec<Pair>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let endpoint = format!(
            "search/users?q={}&per_page={}",
            encode_query(text),
            self.search_per_page
        );
        let body = self.api(&endpoint, "user search")?;
        parse_search(&body)
    }

    fn list_collaborators(&self) -> PairResult<Vec<Pair>> {
        let repo_body = self.run(&["repo", "view", "--json", "owner,name"], "repository")?;
        let repo = parse_repo(&repo_body)?;

        let endpoint = format!(
            "repos/{}/{}/collaborators?per_page={}",
            repo.owner.login, repo.name, self.collaborators_per_page
        );
        // Listing collaborators needs push access; anything short of a parse error is "none"
        let body = match self.api(&endpoint, "collaborators") {
            Ok(body) => body,
            Err(e) => {
                info!("Collaborators unavailable: {}", e);
                return Ok(Vec::new());
            }
        };
        parse_users(&body)
    }

    fn list_teams(&self) -> PairResult<Vec<Team>> {
        let result = self
            .api("user/teams?per_page=100", "teams")
            .and_then(|body| parse_teams(&body));
        empty_if_denied(result, "teams")
    }

    fn list_team_members(&self, org: &str, slug: &str) -> PairResult<Vec<Pair>> {
        let endpoint = format!("orgs/{org}/teams/{slug}/members?per_page=100");
        let result = self
            .api(&endpoint, &format!("{org}/{slug} members"))
            .and_then(|body| parse_users(&body));
        empty_if_denied(result, "team members")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = classify_failure("gh: Not Found (HTTP 404)\n", "ghost");
        assert_eq!(err, PairError::NotFound("ghost".to_string()));
    }

    #[test]
    fn test_classify_forbidden() {
        let err = classify_failure("gh: Must have admin rights (HTTP 403)", "teams");
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_classify_other_failures_as_transport() {
        let err = classify_failure("error connecting to api.github.com", "user search");
        assert!(matches!(err, PairError::Transport(msg) if msg.contains("api.github.com")));
    }

    #[test]
    fn test_denied_listing_is_empty() {
        let denied: PairResult<Vec<Team>> = Err(PairError::PermissionDenied("teams".into()));
        assert!(empty_if_denied(denied, "teams").unwrap().is_empty());

        let broken: PairResult<Vec<Team>> = Err(PairError::Transport("boom".into()));
        assert!(empty_if_denied(broken, "teams").is_err());
    }

    #[test]
    fn test_query_is_url_encoded() {
        assert_eq!(encode_query("mona lisa&x"), "mona+lisa%26x");
    }

    #[test]
    fn test_missing_program_is_transport_error() {
        let provider = GhCliProvider::new("definitely-not-a-real-gh-binary");
        assert!(matches!(provider.search("octo"), Err(PairError::Transport(_))));
    }

    #[test]
    fn test_empty_search_does_not_shell_out() {
        let provider = GhCliProvider::new("definitely-not-a-real-gh-binary");
        assert!(provider.search("   ").unwrap().is_empty());
    }
}

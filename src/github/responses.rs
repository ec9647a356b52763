// ABOUTME: GitHub REST response shapes and their conversion into pairs and teams

use serde::Deserialize;

use crate::error::{PairError, PairResult};
use crate::models::{Pair, Team};

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub id: u64,
}

impl UserResponse {
    /// Convert to a pair, falling back to the login for the name and the
    /// GitHub noreply address when no public email is set
    pub fn into_pair(self) -> Pair {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| noreply_email(self.id, &self.login));
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.login.clone());
        Pair::new(self.login, name, email)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<UserResponse>,
}

#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    pub owner: OwnerResponse,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct OwnerResponse {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub organization: OwnerResponse,
}

impl TeamResponse {
    pub fn into_team(self) -> Team {
        Team {
            id: self.id,
            slug: self.slug,
            org_name: self.organization.login,
            display_name: self.name,
            description: self.description.unwrap_or_default(),
        }
    }
}

pub fn noreply_email(id: u64, login: &str) -> String {
    format!("{id}+{login}@users.noreply.github.com")
}

fn parse<'a, T: Deserialize<'a>>(bytes: &'a [u8], what: &str) -> PairResult<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| PairError::Transport(format!("failed to parse {what} response: {e}")))
}

pub fn parse_user(bytes: &[u8]) -> PairResult<Pair> {
    parse::<UserResponse>(bytes, "user").map(UserResponse::into_pair)
}

pub fn parse_search(bytes: &[u8]) -> PairResult<Vec<Pair>> {
    let response: SearchResponse = parse(bytes, "search")?;
    Ok(response.items.into_iter().map(UserResponse::into_pair).collect())
}

pub fn parse_users(bytes: &[u8]) -> PairResult<Vec<Pair>> {
    let users: Vec<UserResponse> = parse(bytes, "user list")?;
    Ok(users.into_iter().map(UserResponse::into_pair).collect())
}

pub fn parse_repo(bytes: &[u8]) -> PairResult<RepoResponse> {
    parse(bytes, "repository")
}

pub fn parse_teams(bytes: &[u8]) -> PairResult<Vec<Team>> {
    let teams: Vec<TeamResponse> = parse(bytes, "team list")?;
    Ok(teams.into_iter().map(TeamResponse::into_team).collect())
}

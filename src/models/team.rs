// ABOUTME: Team data model - a GitHub team the caller belongs to, fetched per session

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub slug: String,
    pub org_name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

impl Team {
    /// `org/slug`, the path used by the members endpoint
    pub fn qualified_slug(&self) -> String {
        format!("{}/{}", self.org_name, self.slug)
    }

    /// Whether this is the team identified by `org` and `slug`
    pub fn is(&self, org: &str, slug: &str) -> bool {
        self.org_name == org && self.slug == slug
    }
}

use serde::{Deserialize, Serialize};

/// The fields of `GET /orgs/{org}` this crate reads. Anything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgPayload {
    pub login: Option<String>,
    pub repos_url: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoPayload {
    pub name: String,
    #[serde(default)]
    pub license: Option<License>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: Option<String>,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
}

impl RepoPayload {
    /// `license.key`, or `None` when either level is absent or null.
    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.key.as_deref())
    }

    pub fn has_license(&self, license_key: &str) -> bool {
        self.license_key() == Some(license_key)
    }
}

//! Client for the public Codewars user API.
//!
//! Only a whitelisted subset of the upstream profile is kept; everything else
//! the API returns is dropped during deserialisation.

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CodewarsError {
    /// Upstream answered with a non-success status.
    #[error("Codewars {}", .0.as_u16())]
    Upstream(StatusCode),

    #[error("request to Codewars failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid Codewars response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Upstream fields forwarded by the proxy, in their upstream spelling.
pub const PROFILE_FIELDS: [&str; 7] = [
    "username",
    "name",
    "honor",
    "clan",
    "leaderboardPosition",
    "ranks",
    "codeChallenges",
];

/// Whitelisted Codewars profile as returned by the proxy endpoint.
///
/// Listed fields are copied verbatim, `null` and unexpected types included;
/// fields upstream did not send stay absent. Everything else is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CodewarsProfile(Map<String, Value>);

impl<'de> Deserialize<'de> for CodewarsProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(CodewarsProfile::from_upstream)
    }
}

/// A rank entry (`ranks.overall` or `ranks.languages.<lang>`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rank {
    pub name: Option<String>,
    pub color: Option<String>,
    pub score: Option<i64>,
}

impl CodewarsProfile {
    pub fn from_upstream(mut upstream: Map<String, Value>) -> Self {
        Self(
            PROFILE_FIELDS
                .iter()
                .filter_map(|key| upstream.remove_entry(*key))
                .collect(),
        )
    }

    /// Raw value of a whitelisted field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.str_field("username")
    }

    /// Name shown on the card: real name if set, otherwise the username.
    pub fn display_name(&self) -> Option<&str> {
        self.str_field("name").or_else(|| self.username())
    }

    pub fn clan_name(&self) -> Option<&str> {
        self.str_field("clan")
    }

    pub fn honor_value(&self) -> Option<i64> {
        self.get("honor").and_then(Value::as_i64)
    }

    /// Leaderboard position, only when upstream sent a number.
    pub fn leaderboard(&self) -> Option<i64> {
        self.get("leaderboardPosition").and_then(Value::as_i64)
    }

    pub fn total_completed(&self) -> Option<i64> {
        self.get("codeChallenges")
            .and_then(|c| c.get("totalCompleted"))
            .and_then(Value::as_i64)
    }

    pub fn overall_rank(&self) -> Option<Rank> {
        self.rank_at(&["overall"])
    }

    pub fn language_rank(&self, language: &str) -> Option<Rank> {
        self.rank_at(&["languages", language])
    }

    fn rank_at(&self, path: &[&str]) -> Option<Rank> {
        let node = path
            .iter()
            .try_fold(self.get("ranks")?, |node, key| node.get(*key))?;
        serde_json::from_value(node.clone()).ok()
    }
}

#[derive(Debug, Clone)]
pub struct CodewarsClient {
    http: reqwest::Client,
    base_url: String,
}

impl CodewarsClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to build Codewars HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }

    /// Fetch a user's profile, reduced to the whitelisted fields.
    pub async fn fetch_user(&self, username: &str) -> Result<CodewarsProfile, CodewarsError> {
        let url = self.user_url(username);
        debug!("Fetching Codewars profile from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(CodewarsError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Codewars API returned {} for user '{}'", status, username);
            return Err(CodewarsError::Upstream(status));
        }

        response
            .json::<CodewarsProfile>()
            .await
            .map_err(CodewarsError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> CodewarsClient {
        CodewarsClient::new(&format!("{}/api/v1", server.uri()), Duration::from_secs(5))
            .expect("client")
    }

    fn full_upstream_profile() -> Value {
        json!({
            "id": "5a1b2c",
            "username": "someuser",
            "name": "Some User",
            "honor": 1234,
            "clan": "Rustaceans",
            "leaderboardPosition": 42,
            "skills": ["rust"],
            "ranks": {
                "overall": {"rank": -3, "name": "3 kyu", "color": "blue", "score": 2500},
                "languages": {
                    "python": {"rank": -4, "name": "4 kyu", "color": "blue", "score": 1200}
                }
            },
            "codeChallenges": {"totalAuthored": 1, "totalCompleted": 321}
        })
    }

    // ==================== Whitelist Tests ====================

    #[test]
    fn test_deserialize_drops_unlisted_fields() {
        let profile: CodewarsProfile =
            serde_json::from_value(full_upstream_profile()).expect("Should deserialize");
        let out = serde_json::to_value(&profile).unwrap();

        let mut keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "clan",
                "codeChallenges",
                "honor",
                "leaderboardPosition",
                "name",
                "ranks",
                "username"
            ]
        );
        assert!(out.get("id").is_none());
        assert!(out.get("skills").is_none());
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let profile: CodewarsProfile = serde_json::from_value(json!({
            "username": "someuser",
            "honor": 100,
            "ranks": {"overall": {"name": "1 kyu"}}
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "username": "someuser",
                "honor": 100,
                "ranks": {"overall": {"name": "1 kyu"}}
            })
        );
    }

    #[test]
    fn test_ranks_pass_through_unchanged() {
        let upstream = full_upstream_profile();
        let profile: CodewarsProfile = serde_json::from_value(upstream.clone()).unwrap();
        assert_eq!(profile.get("ranks"), upstream.get("ranks"));
        assert_eq!(profile.get("codeChallenges"), upstream.get("codeChallenges"));
    }

    #[test]
    fn test_null_fields_are_kept() {
        let profile: CodewarsProfile = serde_json::from_value(json!({
            "username": "u",
            "name": null,
            "clan": "",
            "leaderboardPosition": null,
            "honor": 5
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({
                "username": "u",
                "name": null,
                "clan": "",
                "leaderboardPosition": null,
                "honor": 5
            })
        );
        assert_eq!(profile.leaderboard(), None);
        assert_eq!(profile.display_name(), Some("u"));
    }

    #[test]
    fn test_unexpected_types_pass_through() {
        let profile: CodewarsProfile =
            serde_json::from_value(json!({"username": "u", "name": 42, "honor": "lots"})).unwrap();

        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            json!({"username": "u", "name": 42, "honor": "lots"})
        );
        assert_eq!(profile.display_name(), Some("u"));
        assert_eq!(profile.honor_value(), None);
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_typed_accessors() {
        let profile: CodewarsProfile = serde_json::from_value(full_upstream_profile()).unwrap();

        assert_eq!(profile.display_name(), Some("Some User"));
        assert_eq!(profile.clan_name(), Some("Rustaceans"));
        assert_eq!(profile.honor_value(), Some(1234));
        assert_eq!(profile.leaderboard(), Some(42));
        assert_eq!(profile.total_completed(), Some(321));

        let overall = profile.overall_rank().unwrap();
        assert_eq!(overall.name.as_deref(), Some("3 kyu"));
        assert_eq!(overall.score, Some(2500));

        let python = profile.language_rank("python").unwrap();
        assert_eq!(python.name.as_deref(), Some("4 kyu"));
        assert!(profile.language_rank("javascript").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let profile: CodewarsProfile =
            serde_json::from_value(json!({"username": "someuser", "name": ""})).unwrap();
        assert_eq!(profile.display_name(), Some("someuser"));
    }

    #[test]
    fn test_null_leaderboard_is_none() {
        let profile: CodewarsProfile =
            serde_json::from_value(json!({"leaderboardPosition": null, "clan": ""})).unwrap();
        assert_eq!(profile.leaderboard(), None);
        assert_eq!(profile.clan_name(), None);
    }

    // ==================== URL Tests ====================

    #[test]
    fn test_user_url_encodes_username() {
        let client =
            CodewarsClient::new("https://www.codewars.com/api/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.user_url("some user/../x"),
            "https://www.codewars.com/api/v1/users/some%20user%2F..%2Fx"
        );
    }

    // ==================== fetch_user Tests ====================

    #[tokio::test]
    async fn test_fetch_user_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/someuser"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_upstream_profile()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let profile = client_for(&mock_server)
            .fetch_user("someuser")
            .await
            .expect("Should fetch");

        assert_eq!(profile.username(), Some("someuser"));
        assert_eq!(profile.honor_value(), Some(1234));
    }

    #[tokio::test]
    async fn test_fetch_user_upstream_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"success": false})))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch_user("ghost")
            .await
            .unwrap_err();

        assert!(matches!(err, CodewarsError::Upstream(StatusCode::NOT_FOUND)));
        assert_eq!(err.to_string(), "Codewars 404");
    }

    #[tokio::test]
    async fn test_fetch_user_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/someuser"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .fetch_user("someuser")
            .await
            .unwrap_err();

        assert!(matches!(err, CodewarsError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_user_unreachable_host() {
        let client =
            CodewarsClient::new("http://127.0.0.1:1/api/v1", Duration::from_secs(2)).unwrap();

        let err = client.fetch_user("someuser").await.unwrap_err();
        assert!(matches!(err, CodewarsError::Transport(_)));
    }
}

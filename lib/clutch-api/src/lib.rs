use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

pub mod error;
pub mod model;

pub use error::ApiError;

use model::{Account, MatchRecord, MmrData, MmrHistoryEntry, Region};

const DEFAULT_BASE_URL: &str = "https://api.henrikdev.xyz/valorant";

/// Connection settings for [`ValorantApi`]. Carried explicitly so nothing
/// ends up in process-global state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Client for Henrik's unofficial Valorant API.
///
/// Every endpoint returns `Ok(None)` when the player or data does not exist
/// upstream (HTTP 404), so callers can treat "not found" separately from
/// actual failures.
#[derive(Debug, Clone)]
pub struct ValorantApi {
    http: reqwest::Client,
    config: ApiConfig,
}

/// Response wrapper every Henrik endpoint uses.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: u16,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

impl ValorantApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Account lookup, mainly used to validate a name/tag pair and to fetch
    /// playercard art.
    pub async fn account(&self, name: &str, tag: &str) -> Result<Option<Account>, ApiError> {
        let url = self.endpoint(&["v1", "account", name, tag], &[])?;
        self.get(url).await
    }

    /// Current rank, RR and per-season MMR summary.
    pub async fn mmr(
        &self,
        region: Region,
        name: &str,
        tag: &str,
    ) -> Result<Option<MmrData>, ApiError> {
        let url = self.endpoint(&["v2", "mmr", region.as_str(), name, tag], &[])?;
        self.get(url).await
    }

    /// Recent match history, newest first.
    pub async fn match_history(
        &self,
        region: Region,
        name: &str,
        tag: &str,
        mode: &str,
        size: usize,
    ) -> Result<Option<Vec<MatchRecord>>, ApiError> {
        let size = size.to_string();
        let url = self.endpoint(
            &["v3", "matches", region.as_str(), name, tag],
            &[("mode", mode), ("size", &size)],
        )?;
        self.get(url).await
    }

    /// Per-match RR changes, newest first.
    pub async fn mmr_history(
        &self,
        region: Region,
        name: &str,
        tag: &str,
    ) -> Result<Option<Vec<MmrHistoryEntry>>, ApiError> {
        let url = self.endpoint(&["v1", "mmr-history", region.as_str(), name, tag], &[])?;
        self.get(url).await
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl)?
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, ApiError> {
        debug!(%url, "querying henrik endpoint");
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope: Envelope<T> = response.json().await?;
        if envelope.status != 200 {
            let message = envelope
                .errors
                .into_iter()
                .find_map(|detail| detail.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ApiError::Upstream {
                status: envelope.status,
                message,
            });
        }
        envelope.data.ok_or(ApiError::MissingData).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_path_segments() {
        let api = ValorantApi::new(ApiConfig::new("key"));
        let url = api
            .endpoint(&["v1", "account", "Some Name", "EUW"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.henrikdev.xyz/valorant/v1/account/Some%20Name/EUW"
        );
    }

    #[test]
    fn endpoint_appends_query_pairs() {
        let api = ValorantApi::new(ApiConfig::new("key"));
        let url = api
            .endpoint(
                &["v3", "matches", "eu", "Foo", "EUW"],
                &[("mode", "competitive"), ("size", "10")],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.henrikdev.xyz/valorant/v3/matches/eu/Foo/EUW?mode=competitive&size=10"
        );
    }

    #[test]
    fn envelope_surfaces_upstream_error_message() {
        let envelope: Envelope<Vec<MmrHistoryEntry>> = serde_json::from_str(
            r#"{"status": 429, "errors": [{"message": "rate limited"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.status, 429);
        assert_eq!(envelope.errors[0].message.as_deref(), Some("rate limited"));
        assert!(envelope.data.is_none());
    }
}

//! Talent client: the single point of entry for all calls to the Torre API.
//!
//! Handlers never hold a `reqwest::Client`; they go through `TalentDirectory`
//! so tests can swap in a fake.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::UpstreamError;

/// Upstream search limit. Pagination reported to the client is computed
/// over whatever survives filtering, not over this value.
pub const SEARCH_LIMIT: u32 = 100;

/// Bytes left unescaped in a username path segment: alphanumerics plus `_.-~/`.
const USERNAME_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    identity_type: &'a str,
    meta: bool,
    limit: u32,
    exclude_contacts: bool,
    excluded_people: Vec<String>,
}

impl<'a> SearchRequest<'a> {
    /// Person-only search, contacts included, nobody excluded.
    fn for_query(query: &'a str) -> Self {
        Self {
            query,
            identity_type: "person",
            meta: false,
            limit: SEARCH_LIMIT,
            exclude_contacts: false,
            excluded_people: Vec::new(),
        }
    }
}

/// Raw access to the talent directory. Implementations return the upstream
/// JSON body on HTTP 200 and `UpstreamError::Status` for anything else.
#[async_trait]
pub trait TalentDirectory: Send + Sync {
    async fn search(&self, query: &str) -> Result<Value, UpstreamError>;

    async fn bio(&self, username: &str) -> Result<Value, UpstreamError>;
}

#[derive(Clone)]
pub struct TorreClient {
    client: Client,
    search_url: String,
    profile_url: String,
}

impl TorreClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            search_url: config.search_api_url.clone(),
            profile_url: config.profile_api_url.clone(),
        })
    }

    /// Reads the body of a 200 response as JSON; any other status is an error.
    async fn json_body(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Talent API returned {}", status);
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TalentDirectory for TorreClient {
    async fn search(&self, query: &str) -> Result<Value, UpstreamError> {
        let request_body = SearchRequest::for_query(query);

        debug!("Searching talent directory for {:?}", query);

        let response = self
            .client
            .post(&self.search_url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&request_body)
            .send()
            .await?;

        Self::json_body(response).await
    }

    async fn bio(&self, username: &str) -> Result<Value, UpstreamError> {
        let url = bio_url(&self.profile_url, username);
        debug!("Fetching bio from {}", url);

        let response = self.client.get(url).send().await?;
        Self::json_body(response).await
    }
}

/// Joins the profile base URL and a percent-encoded username.
pub fn bio_url(base: &str, username: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        utf8_percent_encode(username, USERNAME_SEGMENT)
    )
}

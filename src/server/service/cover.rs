//! Cover image resolution against the Open Library catalog.
//!
//! Given a cover identifier kind and value, the service requests the catalog
//! record, extracts the first cover id, and builds the cover image URL. HTTP
//! 500/502/503 responses are retried a bounded number of times with a fixed
//! delay; every other failure, and retry exhaustion, falls back to a
//! placeholder image. Cover resolution never fails a book submission.

use std::time::Duration;

use axum::http::StatusCode;
use serde::Deserialize;

use crate::server::model::cover::CoverIdKind;

const OPENLIBRARY_API_URL: &str = "https://openlibrary.org";
const OPENLIBRARY_COVERS_URL: &str = "https://covers.openlibrary.org";
const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150";

const COVER_SIZE: char = 'M';
const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Catalog record fields relevant to cover lookup.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    covers: Vec<i64>,
}

enum LookupError {
    /// Server-side failure worth retrying (500/502/503).
    Transient(StatusCode),
    /// Anything else: network error, client error status, bad JSON.
    Fatal(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Fatal(err.to_string())
    }
}

pub struct CoverService {
    http_client: reqwest::Client,
    api_url: String,
    covers_url: String,
    retry_delay: Duration,
}

impl CoverService {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_endpoints(
            http_client,
            OPENLIBRARY_API_URL,
            OPENLIBRARY_COVERS_URL,
            RETRY_DELAY,
        )
    }

    /// Constructor with injectable endpoints and retry delay, used by tests
    /// to point the service at a local catalog stand-in.
    pub fn with_endpoints(
        http_client: reqwest::Client,
        api_url: impl Into<String>,
        covers_url: impl Into<String>,
        retry_delay: Duration,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
            covers_url: covers_url.into(),
            retry_delay,
        }
    }

    /// Resolves a cover image URL for the given identifier.
    ///
    /// Always returns a usable URL: the resolved cover on success, the
    /// placeholder on any failure.
    pub async fn fetch_cover_url(&self, kind: &str, identifier: &str) -> String {
        let Some(kind) = CoverIdKind::from_form_value(kind) else {
            tracing::warn!("Invalid cover identifier kind '{}'", kind);
            return PLACEHOLDER_COVER_URL.to_string();
        };

        let identifier = identifier.trim();
        if identifier.is_empty() {
            return PLACEHOLDER_COVER_URL.to_string();
        }

        let url = self.lookup_url(kind, identifier);

        for attempt in 1..=MAX_ATTEMPTS {
            match self.request_cover_id(&url).await {
                Ok(Some(cover_id)) => {
                    return format!(
                        "{}/b/id/{}-{}.jpg",
                        self.covers_url, cover_id, COVER_SIZE
                    );
                }
                Ok(None) => {
                    tracing::warn!("No cover found for {:?}:{}", kind, identifier);
                    return PLACEHOLDER_COVER_URL.to_string();
                }
                Err(LookupError::Transient(status)) if attempt < MAX_ATTEMPTS => {
                    tracing::warn!(
                        "Attempt {} fetching cover for {:?}:{} got {}, retrying",
                        attempt,
                        kind,
                        identifier,
                        status
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(LookupError::Transient(status)) => {
                    tracing::warn!(
                        "Giving up on cover for {:?}:{} after {} attempts ({})",
                        kind,
                        identifier,
                        attempt,
                        status
                    );
                    return PLACEHOLDER_COVER_URL.to_string();
                }
                Err(LookupError::Fatal(reason)) => {
                    tracing::warn!(
                        "Error fetching cover for {:?}:{}: {}",
                        kind,
                        identifier,
                        reason
                    );
                    return PLACEHOLDER_COVER_URL.to_string();
                }
            }
        }

        PLACEHOLDER_COVER_URL.to_string()
    }

    fn lookup_url(&self, kind: CoverIdKind, identifier: &str) -> String {
        match kind {
            CoverIdKind::Isbn => format!("{}/isbn/{}.json", self.api_url, identifier),
            CoverIdKind::Id => format!("{}/id/{}.json", self.api_url, identifier),
            CoverIdKind::Olid => format!("{}/works/OL{}W.json", self.api_url, identifier),
        }
    }

    async fn request_cover_id(&self, url: &str) -> Result<Option<i64>, LookupError> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if matches!(status.as_u16(), 500 | 502 | 503) {
            return Err(LookupError::Transient(status));
        }
        if !status.is_success() {
            return Err(LookupError::Fatal(format!("catalog returned {}", status)));
        }

        let record = response.json::<CatalogRecord>().await?;

        Ok(record.covers.first().copied())
    }
}

//! HTTP client for the travel listing API.
//!
//! Every method is one request. Status and body are reported as an
//! [`Outcome`]; transport and decoding problems as a [`RepositoryError`].
//! Interpreting either is the use case's job.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::types::{BookmarkPatch, Category, TravelItem};
use crate::data::{Outcome, RepositoryError, RepositoryResult, TravelRepository};

pub struct TravelApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl TravelApiClient {
    /// `base_url` is everything before `/travel`. A trailing slash is fine.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, RepositoryError> {
        let base_url = Url::parse(base_url.as_ref()).map_err(|e| {
            RepositoryError::Network(format!("invalid base url {}: {}", base_url.as_ref(), e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::Network(format!(
                "base url {} cannot hold a path",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Network(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    /// `{base}/travel[/{id}]`. Each segment is percent-encoded, so an id
    /// containing `/`, `?` or `#` stays inside its own segment.
    fn endpoint(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base always accepts path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("travel");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    async fn get_list(&self, query: &[(&str, &str)]) -> RepositoryResult<Vec<TravelItem>> {
        let url = self.endpoint(None);
        info!("GET {} query={:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;

        read_outcome(response).await
    }
}

/// A non-2xx response as a failed outcome, its body as the message.
async fn failure<T>(response: reqwest::Response) -> Outcome<T> {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("Travel API error: {} - {}", status, message);
    Outcome::Failed { status, message }
}

/// Turns a response into an outcome. A blank or `null` body is `Success(None)`.
async fn read_outcome<T: DeserializeOwned>(response: reqwest::Response) -> RepositoryResult<T> {
    let status = response.status();
    debug!("Travel API response status: {}", status);

    if !status.is_success() {
        return Ok(failure(response).await);
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| RepositoryError::Network(e.to_string()))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Outcome::Success(None));
    }

    let body: Option<T> =
        serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Parse(e.to_string()))?;
    Ok(Outcome::Success(body))
}

#[async_trait]
impl TravelRepository for TravelApiClient {
    async fn get_all_list(&self) -> RepositoryResult<Vec<TravelItem>> {
        self.get_list(&[]).await
    }

    async fn get_list_by_category(&self, category: Category) -> RepositoryResult<Vec<TravelItem>> {
        self.get_list(&[("category", category.as_str())]).await
    }

    async fn get_bookmark_list(&self) -> RepositoryResult<Vec<TravelItem>> {
        self.get_list(&[("isBookmark", "true")]).await
    }

    async fn update_bookmark(&self, id: &str, is_bookmark: bool) -> RepositoryResult<()> {
        let url = self.endpoint(Some(id));
        info!("PUT {} isBookmark={}", url, is_bookmark);

        let response = self
            .client
            .put(url)
            .json(&BookmarkPatch { is_bookmark })
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(failure(response).await);
        }
        // The API echoes the updated item, in whatever shape; a 2xx is enough.
        debug!("Travel API response status: {}", response.status());
        Ok(Outcome::Success(Some(())))
    }
}

//! PokeAPI client
//!
//! Fetches raw response bodies over HTTP and memoizes them in the
//! [`ExpiringCache`] keyed by request URL.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::error::{PokedexError, Result};

/// HTTP client for the PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    page_size: u32,
}

impl PokeApiClient {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, page_size: u32, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PokedexError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == URL Builders ==
    /// URL of the location-area page starting at `offset`.
    pub fn location_areas_url(&self, offset: u32) -> String {
        format!(
            "{}/location-area/?offset={}&limit={}",
            self.base_url, offset, self.page_size
        )
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Fetches the raw body at `url`.
    ///
    /// Any non-2xx status is returned as [`PokedexError::Status`].
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let request_error = |source| PokedexError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(request_error)
    }

    // == Fetch Cached ==
    /// Decodes the resource at `url`, preferring a cached body.
    ///
    /// On a miss the body is fetched, decoded, and only then stored under
    /// `url`, so undecodable bodies are never cached. Concurrent misses on
    /// the same URL each go to the network.
    pub async fn fetch_cached<T: DeserializeOwned>(
        &self,
        cache: &ExpiringCache,
        url: &str,
    ) -> Result<T> {
        if let Some(body) = cache.get(url).await {
            debug!(url, "Serving response from cache");
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!(url, "Fetching response from network");
        let body = self.fetch(url).await?;
        let decoded = serde_json::from_slice(&body)?;
        cache.put(url, body).await;
        Ok(decoded)
    }
}

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, warn};
use lru::LruCache;

use crate::error::{ConceptNetError, Result};
use crate::types::{
    ConceptEdge, EdgeEnvelope, RelatedEnvelope, RelatednessEnvelope, RelatedTerm,
};
use crate::uri::concept_uri;

/// Public API base URL used when the builder does not override it.
pub const DEFAULT_BASE_URL: &str = "http://api.conceptnet.io";

const DEFAULT_LANG: &str = "en";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_CACHE_CAPACITY: usize = 128;
const BACKOFF_BASE_MS: u64 = 500;
/// Upper bound on edges requested per query; the API default page is small.
const EDGE_LIMIT: u32 = 50;

/// Async client for a ConceptNet-style semantic-graph API.
///
/// Cheap to clone; the HTTP connection pool and the response cache are
/// shared between clones. The client is stateless apart from the cache,
/// so a single long-lived instance can serve every query.
#[derive(Clone)]
pub struct ConceptNetClient {
    http: reqwest::Client,
    base_url: String,
    lang: String,
    max_attempts: u32,
    cache: Arc<Mutex<LruCache<String, serde_json::Value>>>,
}

impl std::fmt::Debug for ConceptNetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptNetClient")
            .field("base_url", &self.base_url)
            .field("lang", &self.lang)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

/// Builder for [`ConceptNetClient`].
pub struct ConceptNetClientBuilder {
    base_url: String,
    lang: String,
    timeout: Duration,
    max_attempts: u32,
    cache_capacity: usize,
}

impl Default for ConceptNetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ConceptNetClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL (required for tests against a local server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Concept language, default `en`.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts per request including the first (minimum 1).
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Response cache capacity; 0 disables caching.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn build(self) -> Result<ConceptNetClient> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        // LruCache requires a non-zero capacity; 0 degrades to one slot.
        let capacity = NonZeroUsize::new(self.cache_capacity.max(1))
            .expect("capacity is at least 1");
        Ok(ConceptNetClient {
            http,
            base_url: self.base_url,
            lang: self.lang,
            max_attempts: self.max_attempts,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }
}

impl ConceptNetClient {
    /// Client against the public API with default settings.
    pub fn new() -> Result<Self> {
        ConceptNetClientBuilder::new().build()
    }

    pub fn builder() -> ConceptNetClientBuilder {
        ConceptNetClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All edges attached to a single concept.
    pub async fn edges_for(&self, term: &str) -> Result<Vec<ConceptEdge>> {
        let path = format!("{}?limit={EDGE_LIMIT}", concept_uri(&self.lang, term));
        let value = self.get_json(&path).await?;
        self.decode_edges(&path, value)
    }

    /// Edges connecting two concepts.
    pub async fn edges_between(&self, a: &str, b: &str) -> Result<Vec<ConceptEdge>> {
        let path = format!(
            "/query?node={}&other={}&limit={EDGE_LIMIT}",
            concept_uri(&self.lang, a),
            concept_uri(&self.lang, b)
        );
        let value = self.get_json(&path).await?;
        self.decode_edges(&path, value)
    }

    /// Terms related to a concept, strongest first as returned by the API.
    /// Always queries the term it is given.
    pub async fn related_terms(&self, term: &str) -> Result<Vec<RelatedTerm>> {
        let path = format!(
            "/related{}?filter=/c/{}",
            concept_uri(&self.lang, term),
            self.lang
        );
        let value = self.get_json(&path).await?;
        let envelope: RelatedEnvelope = serde_json::from_value(value)
            .map_err(|err| decode_error(&path, err))?;
        Ok(envelope.related.into_iter().map(Into::into).collect())
    }

    /// Relatedness score for a pair of concepts, in `[-1, 1]`.
    pub async fn relatedness(&self, a: &str, b: &str) -> Result<f64> {
        let path = format!(
            "/relatedness?node1={}&node2={}",
            concept_uri(&self.lang, a),
            concept_uri(&self.lang, b)
        );
        let value = self.get_json(&path).await?;
        let envelope: RelatednessEnvelope = serde_json::from_value(value)
            .map_err(|err| decode_error(&path, err))?;
        Ok(envelope.value)
    }

    fn decode_edges(&self, path: &str, value: serde_json::Value) -> Result<Vec<ConceptEdge>> {
        let envelope: EdgeEnvelope =
            serde_json::from_value(value).map_err(|err| decode_error(path, err))?;
        Ok(envelope.edges.into_iter().map(Into::into).collect())
    }

    /// Fetch a JSON body with caching and bounded retry.
    async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        if let Some(hit) = self.cache.lock().expect("cache mutex poisoned").get(path) {
            debug!("cache hit: {path}");
            return Ok(hit.clone());
        }

        let mut attempt = 0;
        let value = loop {
            attempt += 1;
            match self.fetch(path).await {
                Ok(value) => break value,
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    let backoff = BACKOFF_BASE_MS * 2u64.pow(attempt - 1);
                    warn!("request {path} failed (attempt {attempt}): {err}; retrying in {backoff}ms");
                    tokio::time::sleep(Duration::from_millis(backoff)).await;
                }
                Err(err) => return Err(err),
            }
        };

        self.cache
            .lock()
            .expect("cache mutex poisoned")
            .put(path.to_string(), value.clone());
        Ok(value)
    }

    async fn fetch(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            return Err(ConceptNetError::RateLimited(retry_after));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConceptNetError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| decode_error(path, err))
    }
}

fn decode_error(path: &str, err: serde_json::Error) -> ConceptNetError {
    ConceptNetError::Decode {
        path: path.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = ConceptNetClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = ConceptNetClient::builder()
            .base_url("http://localhost:9999/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_builder_clamps_attempts() {
        let client = ConceptNetClient::builder().max_attempts(0).build().unwrap();
        assert_eq!(client.max_attempts, 1);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConceptNetClient>();
    }

    #[test]
    fn test_transient_classification() {
        assert!(ConceptNetError::RateLimited(5).is_transient());
        assert!(ConceptNetError::Status {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(!ConceptNetError::Status {
            status: 404,
            body: String::new()
        }
        .is_transient());
    }
}

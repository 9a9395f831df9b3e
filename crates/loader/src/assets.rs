//! Asset loading with a process-wide memo keyed by final URL.
//!
//! Every asset URL carries the shared cache-busting version (`?v=...`) read
//! once from the version marker. A final URL is fetched at most once: later
//! and concurrent requests share the first result, failures included.
//! Each fetch is bounded by a timeout, so a stalled server fails the tab
//! instead of holding up tab switches.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::types::VERSION_PARAM;

/// Version used when the marker file cannot be fetched.
pub const FALLBACK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on one asset or version-marker fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(20);

type Slot = Arc<OnceCell<Result<Arc<str>, FetchError>>>;

pub struct AssetLoader {
    http: Arc<dyn HttpClient>,
    base: String,
    version_path: String,
    timeout: Duration,
    version: OnceCell<String>,
    memo: Mutex<HashMap<String, Slot>>,
}

impl AssetLoader {
    pub fn new(
        http: Arc<dyn HttpClient>,
        base: impl Into<String>,
        version_path: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base: base.into(),
            version_path: version_path.into(),
            timeout: DEFAULT_FETCH_TIMEOUT,
            version: OnceCell::new(),
            memo: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the version marker.
    pub fn version_url(&self) -> String {
        join_url(&self.base, &self.version_path)
    }

    /// The cache-busting version, fetched on first use.
    pub async fn version(&self) -> &str {
        self.version
            .get_or_init(|| async {
                let url = self.version_url();
                match self.fetch(&url).await {
                    Ok(body) if !body.trim().is_empty() => body.trim().to_string(),
                    Ok(_) => {
                        warn!(%url, "empty version marker, using fallback");
                        FALLBACK_VERSION.to_string()
                    }
                    Err(e) => {
                        warn!(error = %e, "version marker unavailable, using fallback");
                        FALLBACK_VERSION.to_string()
                    }
                }
            })
            .await
    }

    /// Final URL for an asset path, version included.
    pub async fn resolve_url(&self, path: &str) -> String {
        let version = self.version().await;
        format!("{}?{}={}", join_url(&self.base, path), VERSION_PARAM, version)
    }

    /// Fetch an asset, sharing any earlier or in-flight fetch of the same URL.
    ///
    /// Returns the final URL together with the body.
    pub async fn load(&self, path: &str) -> Result<(String, Arc<str>), FetchError> {
        let url = self.resolve_url(path).await;
        let slot = self.memo.lock().entry(url.clone()).or_default().clone();

        let result = slot
            .get_or_init(|| async {
                debug!(%url, "fetching asset");
                self.fetch(&url)
                    .await
                    .map(Arc::from)
                    .inspect_err(|e| warn!(error = %e, "asset fetch failed"))
            })
            .await;

        result.clone().map(|body| (url, body))
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tokio::time::timeout(self.timeout, self.http.get_text(url))
            .await
            .unwrap_or_else(|_| {
                Err(FetchError::Transport {
                    url: url.to_string(),
                    message: format!("timed out after {:?}", self.timeout),
                })
            })
    }

    /// Number of distinct URLs requested so far.
    pub fn memo_len(&self) -> usize {
        self.memo.lock().len()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

//! In-memory HTTP double for tests.
//!
//! Routes are exact URLs. Every request is recorded, including misses, so tests
//! can assert on fetch counts and ordering.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::FetchError;
use crate::http::HttpClient;

#[derive(Debug, Default)]
pub struct FakeHttp {
    routes: Mutex<HashMap<String, Result<String, u16>>>,
    requests: Mutex<Vec<String>>,
    delay: Mutex<Option<Duration>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn route(&self, url: impl Into<String>, body: impl Into<String>) -> &Self {
        self.routes.lock().insert(url.into(), Ok(body.into()));
        self
    }

    /// Serve a JSON value for `url`.
    pub fn route_json(&self, url: impl Into<String>, body: &serde_json::Value) -> &Self {
        self.route(url, body.to_string())
    }

    /// Answer `url` with an HTTP error status.
    pub fn fail(&self, url: impl Into<String>, status: u16) -> &Self {
        self.routes.lock().insert(url.into(), Err(status));
        self
    }

    /// Sleep this long before answering every request.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    /// All requested URLs, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn count(&self, url: &str) -> usize {
        self.requests.lock().iter().filter(|u| *u == url).count()
    }

    /// Number of requests whose URL contains `needle`.
    pub fn count_matching(&self, needle: &str) -> usize {
        self.requests
            .lock()
            .iter()
            .filter(|u| u.contains(needle))
            .count()
    }
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().push(url.to_string());

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let route = self.routes.lock().get(url).cloned();
        match route {
            Some(Ok(body)) => Ok(body),
            Some(Err(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

//! Client for the spreadsheet-backed content API.
//!
//! - `GET {base}?parasha={label}` returns the enablement row
//!   `{ row: { <gameId>: flag, ... } }`
//! - `GET {base}?mode={gameId}&parasha={label}` returns `{ ok, row }`, or
//!   `{ ok, rows }` for modes that return several rows

use std::collections::BTreeSet;
use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{
    parse_flag, GameId, Row, RowResponse, RowsResponse, CONTENT_PARAM, MODE_PARAM,
};

/// Game ids whose enablement flag is on for one content label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledGames {
    ids: BTreeSet<GameId>,
}

impl EnabledGames {
    /// Collect the ids whose cell reads as on.
    pub fn from_row(row: &Row) -> Self {
        let ids = row
            .iter()
            .filter(|(_, value)| parse_flag(value))
            .map(|(key, _)| GameId::from(key.trim()))
            .collect();
        Self { ids }
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Typed access to the data API for one base URL.
#[derive(Clone)]
pub struct ContentApi {
    http: Arc<dyn HttpClient>,
    base: String,
}

impl ContentApi {
    pub fn new(http: Arc<dyn HttpClient>, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of the enablement lookup for `label`.
    pub fn enablement_url(&self, label: &str) -> Result<String, ApiError> {
        self.build_url(&[(CONTENT_PARAM, label)])
    }

    /// URL of the data row for `mode` and `label`.
    pub fn row_url(&self, mode: &str, label: &str) -> Result<String, ApiError> {
        self.build_url(&[(MODE_PARAM, mode), (CONTENT_PARAM, label)])
    }

    /// Which games are switched on for `label`.
    ///
    /// A response without a row is an error: the shelf has nothing to show.
    pub async fn enabled_games(&self, label: &str) -> Result<EnabledGames, ApiError> {
        let url = self.enablement_url(label)?;
        let response: RowResponse = self.get_json(&url).await?;
        let row = response
            .into_row()
            .ok_or_else(|| ApiError::Decode(format!("no enablement row for {label:?}")))?;
        Ok(EnabledGames::from_row(&row))
    }

    /// The data row for one game, `None` when the sheet has no entry.
    pub async fn fetch_row(&self, mode: &str, label: &str) -> Result<Option<Row>, ApiError> {
        let url = self.row_url(mode, label)?;
        let response: RowResponse = self.get_json(&url).await?;
        Ok(response.into_row())
    }

    /// All rows for modes that answer with `{ rows: [...] }`.
    pub async fn fetch_rows(&self, mode: &str, label: &str) -> Result<Vec<Row>, ApiError> {
        let url = self.row_url(mode, label)?;
        let response: RowsResponse = self.get_json(&url).await?;
        Ok(response.into_rows())
    }

    fn build_url(&self, params: &[(&str, &str)]) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.base).map_err(|e| ApiError::InvalidBase {
            base: self.base.clone(),
            message: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url.into())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "api request");
        let body = self.http.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

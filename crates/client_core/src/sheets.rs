//! Google Sheets `values` endpoint client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use shared::error::LoadError;
use tracing::debug;
use url::Url;

use crate::SheetSource;

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const DEFAULT_RANGE: &str = "Portfolio!A1:Z1000";

/// Location of the sheet values: `{api_base}/{sheet_id}/values/{range}?key={api_key}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsEndpoint {
    pub api_base: String,
    pub sheet_id: String,
    pub api_key: String,
    pub range: String,
}

impl SheetsEndpoint {
    pub fn new(sheet_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            sheet_id: sheet_id.into(),
            api_key: api_key.into(),
            range: DEFAULT_RANGE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn url(&self) -> Result<Url, LoadError> {
        if self.sheet_id.trim().is_empty() {
            return Err(LoadError::Retrieval("no sheet id configured".into()));
        }
        let mut url = Url::parse(&self.api_base).map_err(|err| {
            LoadError::Retrieval(format!("invalid api base '{}': {err}", self.api_base))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                LoadError::Retrieval(format!("api base '{}' cannot take a path", self.api_base))
            })?
            .pop_if_empty()
            .push(&self.sheet_id)
            .push("values")
            .push(&self.range);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    values: Option<Vec<Vec<Value>>>,
}

fn decode_cell(cell: Value) -> Result<String, LoadError> {
    match cell {
        Value::String(text) => Ok(text),
        Value::Null => Ok(String::new()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Array(_) | Value::Object(_) => Err(LoadError::MalformedPayload(
            "cell holds a nested structure".into(),
        )),
    }
}

/// Extracts the `values` grid from a response body.
pub fn decode_values(body: &str) -> Result<Vec<Vec<String>>, LoadError> {
    let envelope: ValueRange = serde_json::from_str(body)
        .map_err(|err| LoadError::MalformedPayload(err.to_string()))?;
    let rows = envelope
        .values
        .ok_or_else(|| LoadError::MalformedPayload("response has no `values` field".into()))?;

    rows.into_iter()
        .map(|row| row.into_iter().map(decode_cell).collect())
        .collect()
}

pub struct SheetsClient {
    http: Client,
    endpoint: SheetsEndpoint,
}

impl SheetsClient {
    pub fn new(endpoint: SheetsEndpoint) -> Self {
        Self::with_http(Client::new(), endpoint)
    }

    pub fn with_http(http: Client, endpoint: SheetsEndpoint) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl SheetSource for SheetsClient {
    async fn fetch_grid(&self) -> Result<Vec<Vec<String>>, LoadError> {
        let url = self.endpoint.url()?;
        debug!(
            sheet_id = %self.endpoint.sheet_id,
            range = %self.endpoint.range,
            "requesting sheet values"
        );

        // The request URL carries the api key; keep it out of error text.
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| LoadError::Retrieval(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Response {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| LoadError::Retrieval(err.without_url().to_string()))?;
        decode_values(&body)
    }
}

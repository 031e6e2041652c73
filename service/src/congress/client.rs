//! Congress.gov API client for fetching bill data.
//!
//! This module provides a trait-based HTTP client for interacting with
//! the Congress.gov bills API. The trait abstraction enables:
//!
//! - Easy mocking in unit tests
//! - HTTP-level testing with stubbed servers in integration tests
//! - Swapping implementations (e.g., different API providers)
//!
//! # Example
//!
//! ```ignore
//! use billy_api::congress::{BillListQuery, CongressApiClient, HttpCongressClient};
//!
//! let client = HttpCongressClient::new("https://api.congress.gov/v3", "my-api-key");
//! let bills = client.list_bills(&BillListQuery::default()).await?;
//! println!("Most recently updated: {}", bills[0].title);
//! ```

use async_trait::async_trait;
use thiserror::Error;

use super::selection::{formatted_text_url, select_text_version, PREFERRED_TEXT_TYPES};
use super::types::{Bill, BillListQuery, BillText, BillType, BillsResponse, TextVersionsResponse};

/// Errors that can occur when calling the Congress.gov API.
#[derive(Debug, Error)]
pub enum CongressApiError {
    /// Upstream rejected our credentials (HTTP 401)
    #[error("Invalid API key for Congress.gov")]
    InvalidApiKey,

    /// Upstream throttled the request (HTTP 429); surfaced immediately, never retried
    #[error("Rate limit exceeded for Congress.gov API")]
    RateLimited,

    /// Any other non-2xx upstream response
    #[error("Congress.gov API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, timeout, connection reset) or malformed payload
    #[error("Failed to connect to Congress.gov API: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// The bill has no text versions at all
    #[error("No text found for bill {congress}/{bill_type}/{number}")]
    NoTextVersions {
        congress: u32,
        bill_type: BillType,
        number: String,
    },

    /// The selected text version has no formatted-text URL
    #[error("No formatted text URL found for bill {congress}/{bill_type}/{number}")]
    NoFormattedTextUrl {
        congress: u32,
        bill_type: BillType,
        number: String,
    },
}

/// Trait for Congress.gov bill operations.
///
/// Implementations can fetch bill metadata and text from external APIs.
/// Use `HttpCongressClient` for real HTTP calls, or create a mock
/// implementation for testing.
#[async_trait]
pub trait CongressApiClient: Send + Sync {
    /// List bills, preserving the order the upstream API returns them in.
    async fn list_bills(&self, query: &BillListQuery) -> Result<Vec<Bill>, CongressApiError>;

    /// Fetch the best available full text of one bill.
    async fn get_bill_text(
        &self,
        congress: u32,
        bill_type: BillType,
        number: &str,
    ) -> Result<BillText, CongressApiError>;
}

/// HTTP-based implementation of `CongressApiClient`.
///
/// Makes real HTTP requests to the Congress.gov API, attaching the API key
/// as a query parameter on every metadata call.
pub struct HttpCongressClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    preferred_text_types: Vec<String>,
}

impl HttpCongressClient {
    /// Create a new client with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            preferred_text_types: PREFERRED_TEXT_TYPES
                .iter()
                .map(|label| (*label).to_string())
                .collect(),
        }
    }

    /// Replace the ordered preference list used when selecting a text version.
    #[must_use]
    pub fn with_preferred_text_types(mut self, preferred: Vec<String>) -> Self {
        self.preferred_text_types = preferred;
        self
    }

    /// Issue a GET against the API and decode the JSON body.
    ///
    /// Maps 401 to `InvalidApiKey`, 429 to `RateLimited`, any other non-2xx
    /// to `Api` with the body as message, and transport failures to
    /// `Unreachable`.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CongressApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CongressApiError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CongressApiError::RateLimited);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CongressApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch raw text content from a URL returned by the text-versions
    /// endpoint. No API key is attached; the content URLs are public.
    async fn fetch_text_content(&self, url: &str) -> Result<String, CongressApiError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CongressApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CongressApiClient for HttpCongressClient {
    async fn list_bills(&self, query: &BillListQuery) -> Result<Vec<Bill>, CongressApiError> {
        let mut params: Vec<(&str, String)> = vec![
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
            ("sort", query.sort.clone()),
        ];

        if let Some(from) = &query.from_datetime {
            params.push(("fromDateTime", from.clone()));
        }
        if let Some(to) = &query.to_datetime {
            params.push(("toDateTime", to.clone()));
        }

        let response: BillsResponse = self.get_json("/bill", &params).await?;

        // Upstream ordering is preserved; no local re-sorting.
        Ok(response.bills.into_iter().map(Bill::from).collect())
    }

    async fn get_bill_text(
        &self,
        congress: u32,
        bill_type: BillType,
        number: &str,
    ) -> Result<BillText, CongressApiError> {
        let path = format!(
            "/bill/{}/{}/{}/text",
            congress,
            bill_type.as_path_segment(),
            number
        );
        let params = [("format", "json".to_string())];

        let response: TextVersionsResponse = self.get_json(&path, &params).await?;

        let selected = select_text_version(&self.preferred_text_types, &response.text_versions)
            .ok_or_else(|| CongressApiError::NoTextVersions {
                congress,
                bill_type,
                number: number.to_string(),
            })?;

        let url =
            formatted_text_url(selected).ok_or_else(|| CongressApiError::NoFormattedTextUrl {
                congress,
                bill_type,
                number: number.to_string(),
            })?;

        let text = self.fetch_text_content(url).await?;

        Ok(BillText {
            congress,
            bill_type,
            number: number.to_string(),
            text,
            text_type: selected.version_type.clone().unwrap_or_default(),
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{Bill, BillListQuery, BillText, BillType, CongressApiClient, CongressApiError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `CongressApiClient` for unit tests.
    ///
    /// Configure responses with `set_*_result` methods and verify
    /// calls with `list_bills_calls()` and `get_bill_text_calls()`.
    pub struct MockCongressClient {
        list_bills_result: Mutex<Option<Result<Vec<Bill>, CongressApiError>>>,
        get_bill_text_result: Mutex<Option<Result<BillText, CongressApiError>>>,
        list_bills_calls: Mutex<Vec<BillListQuery>>,
        get_bill_text_calls: Mutex<Vec<(u32, BillType, String)>>,
    }

    impl MockCongressClient {
        pub fn new() -> Self {
            Self {
                list_bills_result: Mutex::new(None),
                get_bill_text_result: Mutex::new(None),
                list_bills_calls: Mutex::new(Vec::new()),
                get_bill_text_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for `list_bills` calls.
        pub fn set_list_bills_result(&self, result: Result<Vec<Bill>, CongressApiError>) {
            *self.list_bills_result.lock().unwrap() = Some(result);
        }

        /// Set the result for `get_bill_text` calls.
        pub fn set_get_bill_text_result(&self, result: Result<BillText, CongressApiError>) {
            *self.get_bill_text_result.lock().unwrap() = Some(result);
        }

        /// Get all queries passed to `list_bills`.
        pub fn list_bills_calls(&self) -> Vec<BillListQuery> {
            self.list_bills_calls.lock().unwrap().clone()
        }

        /// Get all (congress, type, number) triples passed to `get_bill_text`.
        pub fn get_bill_text_calls(&self) -> Vec<(u32, BillType, String)> {
            self.get_bill_text_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockCongressClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CongressApiClient for MockCongressClient {
        async fn list_bills(&self, query: &BillListQuery) -> Result<Vec<Bill>, CongressApiError> {
            self.list_bills_calls.lock().unwrap().push(query.clone());

            self.list_bills_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn get_bill_text(
            &self,
            congress: u32,
            bill_type: BillType,
            number: &str,
        ) -> Result<BillText, CongressApiError> {
            self.get_bill_text_calls.lock().unwrap().push((
                congress,
                bill_type,
                number.to_string(),
            ));

            self.get_bill_text_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| {
                    Err(CongressApiError::NoTextVersions {
                        congress,
                        bill_type,
                        number: number.to_string(),
                    })
                })
        }
    }
}

//! Congress.gov API client module.
//!
//! Provides HTTP client abstraction for fetching bill metadata and full
//! bill text from the Congress.gov API.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`CongressApiClient`] - Trait defining bill operations
//! - [`HttpCongressClient`] - Real HTTP implementation using reqwest
//! - [`selection`] - Pure text-version selection policy, testable without HTTP
//! - [`mock::MockCongressClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! Use `MockCongressClient` for fast, isolated unit tests:
//!
//! ```ignore
//! use billy_api::congress::mock::MockCongressClient;
//!
//! let mock = MockCongressClient::new();
//! mock.set_list_bills_result(Ok(vec![Bill { ... }]));
//!
//! // Pass mock to code under test
//! let result = my_handler(&mock).await;
//! assert!(result.is_ok());
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! Use wiremock to test `HttpCongressClient` against stubbed HTTP:
//!
//! ```ignore
//! use wiremock::{matchers::path, Mock, MockServer, ResponseTemplate};
//! use billy_api::congress::{BillListQuery, HttpCongressClient};
//!
//! let server = MockServer::start().await;
//!
//! Mock::given(path("/bill"))
//!     .respond_with(ResponseTemplate::new(200).set_body_json(json!({
//!         "bills": [{ "congress": 118, "number": "3076", ... }]
//!     })))
//!     .mount(&server)
//!     .await;
//!
//! let client = HttpCongressClient::new(server.uri(), "test-key");
//! let bills = client.list_bills(&BillListQuery::default()).await.unwrap();
//! assert_eq!(bills[0].number, "3076");
//! ```

mod client;
pub mod selection;
mod types;

pub use client::{CongressApiClient, CongressApiError, HttpCongressClient};
pub use types::{
    Bill, BillAction, BillListQuery, BillText, BillType, BillsResponse, TextFormat, TextVersion,
    TextVersionsResponse,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;

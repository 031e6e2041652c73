//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to mock external API responses in integration tests.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::{method, path, Mock, MockServer, ResponseTemplate};
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockServer::start().await;
//!
//!     Mock::given(method("GET"))
//!         .and(path("/bill"))
//!         .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bills": []})))
//!         .mount(&server)
//!         .await;
//!
//!     // Your code calls server.uri() + "/bill"
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.set_body_json(value)` or `.set_body_string(string)`
//! - **Error response**: `ResponseTemplate::new(500)`
//! - **Request verification**: `.expect(1)` to assert call count

pub use wiremock::matchers::{body_json, header, method, path, query_param};
pub use wiremock::MockServer;
pub use wiremock::{Mock, ResponseTemplate};

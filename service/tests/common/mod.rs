//! Common test utilities for integration tests.
//!
//! This module provides:
//!
//! - [`app_builder::TestAppBuilder`] - Build test Axum apps that mirror main.rs wiring
//! - [`http_mock`] - wiremock re-exports for stubbing outbound HTTP
//!
//! # App Builder Usage
//!
//! ```ignore
//! use crate::common::app_builder::TestAppBuilder;
//!
//! #[tokio::test]
//! async fn test_with_app() {
//!     let builder = TestAppBuilder::new();
//!     builder.congress().set_list_bills_result(Ok(vec![]));
//!     let app = builder.build();
//!     // Use app.oneshot(...) to send requests
//! }
//! ```
//!
//! See [`app_builder`] module for configuration options.

pub mod app_builder;
pub mod http_mock;

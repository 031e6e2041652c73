//! Test app builder that mirrors main.rs wiring with injectable mocks.
//!
//! This module provides a [`TestAppBuilder`] that constructs an Axum router matching
//! the production configuration in `main.rs`, but with mock outbound clients
//! injected in place of the real Congress.gov client and LLM provider.
//!
//! # Usage
//!
//! ```ignore
//! use crate::common::app_builder::TestAppBuilder;
//!
//! #[tokio::test]
//! async fn test_with_full_app() {
//!     let builder = TestAppBuilder::new().with_cors(&["http://localhost:3000"]);
//!
//!     builder.congress().set_list_bills_result(Ok(vec![]));
//!     builder.llm().set_response(Ok("an answer".to_string()));
//!
//!     let app = builder.build();
//!     // Use app.oneshot(...) to send requests, then verify recorded calls
//!     // via builder.congress() / builder.llm()
//! }
//! ```

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Extension, Router,
};
use billy_api::{
    build_info::BuildInfoProvider,
    config::SecurityHeadersConfig,
    congress::{mock::MockCongressClient, CongressApiClient},
    http::{build_security_headers, security_headers_middleware},
    rest,
};
use billy_llm::{mock::MockLlmProvider, LlmProvider};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Builder for test applications that mirrors main.rs wiring.
///
/// The mock Congress client and LLM provider are created up front so tests
/// can configure responses before building the router and inspect recorded
/// calls afterwards.
pub struct TestAppBuilder {
    congress: Arc<MockCongressClient>,
    llm: Arc<MockLlmProvider>,
    /// CORS allowed origins (None means no CORS layer)
    cors_origins: Option<Vec<String>>,
    /// Security headers config (None means disabled)
    security_headers: Option<SecurityHeadersConfig>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    /// Create a builder with fresh mocks, no CORS, and no security headers.
    pub fn new() -> Self {
        Self {
            congress: Arc::new(MockCongressClient::new()),
            llm: Arc::new(MockLlmProvider::new()),
            cors_origins: None,
            security_headers: None,
        }
    }

    /// Enable a CORS layer with the given allowed origins.
    pub fn with_cors(mut self, origins: &[&str]) -> Self {
        self.cors_origins = Some(origins.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Enable the security headers middleware with the given configuration.
    pub fn with_security_headers(mut self, config: SecurityHeadersConfig) -> Self {
        self.security_headers = Some(config);
        self
    }

    /// Handle to the mock Congress client for configuring and verifying calls.
    pub fn congress(&self) -> Arc<MockCongressClient> {
        self.congress.clone()
    }

    /// Handle to the mock LLM provider for configuring and verifying calls.
    pub fn llm(&self) -> Arc<MockLlmProvider> {
        self.llm.clone()
    }

    /// Build the router with the exact route set and layer ordering of main.rs.
    pub fn build(&self) -> Router {
        let congress: Arc<dyn CongressApiClient> = self.congress.clone();
        let llm: Arc<dyn LlmProvider> = self.llm.clone();
        let build_info = BuildInfoProvider::from_lookup(|_| None).build_info();

        let mut app = Router::new()
            .route("/", get(rest::root))
            .route("/health", get(rest::health))
            .route("/bill", get(rest::list_bills))
            .route("/bill/ask", post(rest::ask_bill))
            .route("/build-info", get(rest::get_build_info))
            .layer(Extension(congress))
            .layer(Extension(llm))
            .layer(Extension(build_info));

        if let Some(origins) = &self.cors_origins {
            let allow_origin: AllowOrigin = if origins.iter().any(|o| o == "*") {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(
                    origins
                        .iter()
                        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                        .collect::<Vec<_>>(),
                )
            };
            app = app.layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers(Any)
                    .allow_origin(allow_origin),
            );
        }

        if let Some(config) = &self.security_headers {
            let headers = build_security_headers(config);
            app = app
                .layer(middleware::from_fn(security_headers_middleware))
                .layer(Extension(headers));
        }

        app
    }
}

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::{net::SocketAddr, sync::Arc};

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Extension, Router,
};
use billy_api::{
    build_info::BuildInfoProvider,
    config::Config,
    congress::{CongressApiClient, HttpCongressClient},
    http::{build_security_headers, security_headers_middleware},
    rest::{self, ApiDoc},
};
use billy_llm::{GeminiProvider, LlmProvider};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load and validate configuration first (fail-fast)
    let config = Config::load().map_err(|e| anyhow::anyhow!("{e}"))?;

    // Set up logging from config
    std::env::set_var("RUST_LOG", &config.logging.level);
    tracing_subscriber::fmt::init();

    // Init banner so container logs clearly show startup
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "billy-api starting up");

    let build_info = BuildInfoProvider::from_env();
    let build_info_snapshot = build_info.build_info();
    tracing::info!(
        version = %build_info_snapshot.version,
        git_sha = %build_info_snapshot.git_sha,
        build_time = %build_info_snapshot.build_time,
        "resolved build metadata"
    );

    // Outbound clients are constructed once at startup and shared across
    // requests; they hold only configuration and issue stateless calls.
    let congress: Arc<dyn CongressApiClient> = Arc::new(
        HttpCongressClient::new(&config.congress.base_url, &config.congress.api_key)
            .with_preferred_text_types(config.congress.preferred_text_types.clone()),
    );
    let llm: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::with_model(
        &config.gemini.api_key,
        &config.gemini.model,
    ));
    tracing::info!(provider = llm.provider_name(), "LLM provider configured");

    // Build CORS layer from config
    let cors_origins = &config.cors.allowed_origins;
    let allow_origin: AllowOrigin = if cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow any origin - not recommended for production");
        AllowOrigin::any()
    } else if cors_origins.is_empty() {
        tracing::info!(
            "CORS allowed origins not configured - cross-origin requests will be blocked"
        );
        AllowOrigin::list(Vec::<HeaderValue>::new())
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        tracing::info!(origins = ?cors_origins, "CORS allowed origins configured");
        AllowOrigin::list(origins)
    };

    // Build security headers layer if enabled
    let security_headers = if config.security_headers.enabled {
        tracing::info!("Security headers enabled");
        Some(build_security_headers(&config.security_headers))
    } else {
        tracing::info!("Security headers disabled");
        None
    };

    // Build the API
    let mut app = Router::new()
        .route("/", get(rest::root))
        .route("/health", get(rest::health))
        .route("/bill", get(rest::list_bills))
        .route("/bill/ask", post(rest::ask_bill))
        .route("/build-info", get(rest::get_build_info))
        .layer(Extension(congress))
        .layer(Extension(llm))
        .layer(Extension(build_info_snapshot))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any)
                .allow_origin(allow_origin),
        );

    // Swagger UI is opt-in
    if config.swagger.enabled {
        tracing::info!("Swagger UI enabled at /swagger-ui");
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    // Add security headers middleware if enabled
    if let Some(headers) = security_headers {
        app = app
            .layer(middleware::from_fn(security_headers_middleware))
            .layer(Extension(headers));
    }

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Starting server at http://{}/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! REST API handlers and `OpenAPI` documentation.
//!
//! This module provides the bill listing and question-answering endpoints,
//! sharing domain types with `ToSchema` derives for `OpenAPI` spec
//! generation.

// The OpenApi derive macro generates code that triggers this lint
#![allow(clippy::needless_for_each)]

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use billy_llm::LlmProvider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::build_info::BuildInfo;
use crate::congress::{
    Bill, BillAction, BillListQuery, BillType, CongressApiClient, CongressApiError,
};

/// System context given to the model for every ask request.
pub const ASK_SYSTEM_PROMPT: &str = "You are a helpful AI assistant that helps users understand \
    legislation and legal documents. You are given a bill and you need to understand it and \
    answer the user's query. Provide exact quotes from the bill when you can in your response. \
    If you don't know or can't find the answer, say so. Be as concise as possible, unless the \
    query is asking for a detailed explanation.";

/// Serialize a `StatusCode` as its `u16` representation.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires `&T` signature
fn serialize_status_code<S: Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(status.as_u16())
}

/// RFC 7807 Problem Details error response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    /// URI reference identifying the problem type
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short human-readable summary
    pub title: String,
    /// HTTP status code
    #[serde(serialize_with = "serialize_status_code")]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// Human-readable explanation specific to this occurrence
    pub detail: String,
    /// URI reference identifying the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ProblemExtensions>,
}

/// Extended error information with a machine-readable code.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemExtensions {
    /// Stable error code for programmatic handling
    pub code: String,
    /// Field that caused the error (for validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ProblemDetails {
    fn new(status: StatusCode, title: &str, detail: &str, code: &str) -> Self {
        Self {
            problem_type: format!(
                "https://billy.dev/errors/{}",
                code.to_lowercase().replace('_', "-")
            ),
            title: title.to_string(),
            status,
            detail: detail.to_string(),
            instance: None,
            extensions: Some(ProblemExtensions {
                code: code.to_string(),
                field: None,
            }),
        }
    }

    /// Create an internal server error response.
    #[must_use]
    pub fn internal_error(detail: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            detail,
            "INTERNAL_ERROR",
        )
    }

    /// Create a bad-gateway response for a failed LLM provider call.
    #[must_use]
    pub fn llm_failure(detail: &str) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, "Bad Gateway", detail, "LLM_ERROR")
    }
}

impl From<CongressApiError> for ProblemDetails {
    fn from(err: CongressApiError) -> Self {
        let detail = err.to_string();
        match err {
            CongressApiError::InvalidApiKey => Self::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                &detail,
                "UPSTREAM_AUTH",
            ),
            CongressApiError::RateLimited => Self::new(
                StatusCode::TOO_MANY_REQUESTS,
                "Too Many Requests",
                &detail,
                "RATE_LIMITED",
            ),
            CongressApiError::Api { status, .. } => Self::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "Upstream Error",
                &detail,
                "UPSTREAM_ERROR",
            ),
            CongressApiError::Unreachable(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                &detail,
                "UPSTREAM_UNREACHABLE",
            ),
            CongressApiError::NoTextVersions { .. }
            | CongressApiError::NoFormattedTextUrl { .. } => Self::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                &detail,
                "BILL_TEXT_NOT_FOUND",
            ),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

/// Query parameters accepted by the bill listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BillListParams {
    /// Only include bills updated at or after this time (RFC 3339)
    pub from_datetime: Option<DateTime<Utc>>,
    /// Only include bills updated at or before this time (RFC 3339)
    pub to_datetime: Option<DateTime<Utc>>,
}

/// Response body for the bill listing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillListResponse {
    pub results: Vec<Bill>,
}

/// Request body for asking a question about one bill.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillAskRequest {
    pub congress: u32,
    #[serde(rename = "type")]
    pub bill_type: BillType,
    pub number: String,
    pub query: String,
}

/// Response body carrying the model's answer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillAskResponse {
    pub result: String,
}

/// Format a timestamp as UTC with a literal trailing `Z`, the form the
/// Congress.gov API expects for time bounds.
fn to_zulu_string(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Build the single prompt sent to the provider: the literal user query
/// followed by the full bill text. No chunking, no truncation.
#[must_use]
pub fn build_ask_prompt(query: &str, bill_text: &str) -> String {
    format!("User query: {query}\n\nBill text:\n{bill_text}")
}

/// Greeting for the service root.
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn root() -> impl IntoResponse {
    "Hello world, it's me, Billy!"
}

/// Liveness probe.
#[allow(clippy::unused_async)]
pub async fn health() -> impl IntoResponse {
    "healthy"
}

/// List bills
///
/// Returns bills from Congress.gov in upstream order, most recently
/// updated first.
///
/// # Errors
///
/// Returns `ProblemDetails` mirroring the upstream failure.
#[utoipa::path(
    get,
    path = "/bill",
    tag = "Bills",
    params(BillListParams),
    responses(
        (status = 200, description = "Bills retrieved successfully", body = BillListResponse),
        (status = 401, description = "Upstream rejected our API key", body = ProblemDetails),
        (status = 429, description = "Upstream rate limit exceeded", body = ProblemDetails)
    )
)]
pub async fn list_bills(
    Query(params): Query<BillListParams>,
    Extension(congress): Extension<Arc<dyn CongressApiClient>>,
) -> Result<Json<BillListResponse>, ProblemDetails> {
    let query = BillListQuery {
        from_datetime: params.from_datetime.map(to_zulu_string),
        to_datetime: params.to_datetime.map(to_zulu_string),
        ..BillListQuery::default()
    };

    let results = congress.list_bills(&query).await?;
    Ok(Json(BillListResponse { results }))
}

/// Ask a question about a bill
///
/// Fetches the bill's full text, then asks the configured LLM provider to
/// answer the query against it. The provider's answer is returned verbatim.
///
/// # Errors
///
/// Returns `ProblemDetails` if the bill text cannot be fetched (the provider
/// is never invoked in that case) or if the provider call fails.
#[utoipa::path(
    post,
    path = "/bill/ask",
    tag = "Bills",
    request_body = BillAskRequest,
    responses(
        (status = 200, description = "Answer produced", body = BillAskResponse),
        (status = 404, description = "No usable text version for the bill", body = ProblemDetails),
        (status = 502, description = "LLM provider call failed", body = ProblemDetails)
    )
)]
pub async fn ask_bill(
    Extension(congress): Extension<Arc<dyn CongressApiClient>>,
    Extension(llm): Extension<Arc<dyn LlmProvider>>,
    Json(request): Json<BillAskRequest>,
) -> Result<Json<BillAskResponse>, ProblemDetails> {
    // A bill-text failure aborts the flow before any provider call.
    let bill_text = congress
        .get_bill_text(request.congress, request.bill_type, &request.number)
        .await?;

    let prompt = build_ask_prompt(&request.query, &bill_text.text);

    let result = llm
        .prompt(&prompt, Some(ASK_SYSTEM_PROMPT))
        .await
        .map_err(|e| {
            tracing::error!(provider = llm.provider_name(), error = %e, "LLM provider call failed");
            ProblemDetails::llm_failure(&e.to_string())
        })?;

    Ok(Json(BillAskResponse { result }))
}

/// Get build information
///
/// Returns metadata about the running service including version, git SHA, and build time.
///
/// # Errors
///
/// Returns `ProblemDetails` on internal server errors.
#[utoipa::path(
    get,
    path = "/build-info",
    tag = "System",
    responses(
        (status = 200, description = "Build information retrieved successfully", body = BuildInfo),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    )
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn get_build_info(
    Extension(build_info): Extension<BuildInfo>,
) -> Result<Json<BuildInfo>, ProblemDetails> {
    Ok(Json(build_info))
}

/// `OpenAPI` documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Billy API",
        version = "0.1.0",
        description = "AI-powered legislation understanding",
        license(name = "MIT")
    ),
    paths(list_bills, ask_bill, get_build_info),
    components(schemas(
        Bill,
        BillAction,
        BillType,
        BillListResponse,
        BillAskRequest,
        BillAskResponse,
        BuildInfo,
        ProblemDetails,
        ProblemExtensions
    ))
)]
pub struct ApiDoc;

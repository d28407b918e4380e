use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::server::AppState;
use crate::url::SearchQuery;

/// Body of `POST /jobs`
///
/// All fields are optional. `isIntern` is accepted alongside `isintern`
/// because the web frontend sends the camelCase form. A body carrying both
/// keys asks for internships when either of them is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawJobsRequest")]
pub struct JobsRequest {
    pub query: String,
    pub is_intern: bool,
    pub filter_codes: Option<Vec<u32>>,
}

/// Wire form of [`JobsRequest`], one field per accepted key
#[derive(Deserialize)]
struct RawJobsRequest {
    #[serde(default)]
    query: String,

    #[serde(default, rename = "isintern")]
    is_intern: Option<bool>,

    #[serde(default, rename = "isIntern")]
    is_intern_camel: Option<bool>,

    #[serde(default, rename = "et")]
    filter_codes: Option<Vec<u32>>,
}

impl From<RawJobsRequest> for JobsRequest {
    fn from(raw: RawJobsRequest) -> Self {
        JobsRequest {
            query: raw.query,
            is_intern: raw.is_intern.unwrap_or(false) || raw.is_intern_camel.unwrap_or(false),
            filter_codes: raw.filter_codes,
        }
    }
}

impl From<JobsRequest> for SearchQuery {
    fn from(request: JobsRequest) -> Self {
        SearchQuery {
            term: request.query,
            filter_codes: request.filter_codes.unwrap_or_default(),
            is_intern: request.is_intern,
        }
    }
}

/// Crawls all result pages for the requested search
///
/// The body is decoded by hand so that every malformed body, whatever its
/// Content-Type, is answered with a plain-text 400.
pub async fn jobs_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request: JobsRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Bad request body");
            return (StatusCode::BAD_REQUEST, "Invalid request").into_response();
        }
    };

    tracing::info!(
        query = %request.query,
        is_intern = request.is_intern,
        et = ?request.filter_codes,
        "Jobs request"
    );

    let query = SearchQuery::from(request);
    match state.harvester.crawl(&query).await {
        Ok(report) => Json(report.into_jobs()).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Answers CORS preflight requests
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn health_handler() -> &'static str {
    "ok"
}

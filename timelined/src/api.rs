//! HTTP API for the timeline daemon.
//!
//! Provides REST endpoints for:
//! - Health check
//! - User timeline (`GET /events?userId=&eventId=&limit=&page=`)

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use timeline_domain::{Event, EventView};
use timeline_store::TimelineRepository;

use crate::error::QueryError;
use crate::query::TimelineQuery;

// =============================================================================
// API State
// =============================================================================

/// Shared state for API handlers.
pub struct ApiState<R: TimelineRepository + 'static> {
    pub query: TimelineQuery<R>,
}

impl<R: TimelineRepository + 'static> ApiState<R> {
    /// Create state over a shared repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            query: TimelineQuery::new(repo),
        }
    }
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query string of `GET /events`. Every field is optional at this level.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EventsParams {
    pub user_id: Option<String>,
    pub event_id: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl EventsParams {
    /// Collect the known parameters from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "userId" => &mut params.user_id,
                "eventId" => &mut params.event_id,
                "limit" => &mut params.limit,
                "page" => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// =============================================================================
// Router
// =============================================================================

/// Create the API router.
pub fn create_router<R>(state: Arc<ApiState<R>>) -> Router
where
    R: TimelineRepository + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/events",
            get(events_handler::<R>).fallback(method_not_allowed_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Window of a user's timeline.
async fn events_handler<R>(
    State(state): State<Arc<ApiState<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError>
where
    R: TimelineRepository + 'static,
{
    let params = EventsParams::from_pairs(pairs);
    let user_id = params.user_id.as_deref().unwrap_or_default();

    info!(
        user_id,
        event_id = ?params.event_id,
        limit = ?params.limit,
        page = ?params.page,
        "Timeline request"
    );

    let events = state
        .query
        .resolve(
            user_id,
            params.event_id.as_deref(),
            params.limit.as_deref(),
            params.page.as_deref(),
        )
        .map_err(to_error_response)?;

    let body = render_events(events).map_err(|e| {
        error!(error = %e, "Failed to serialize timeline");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Anything but GET/HEAD on `/events`.
async fn method_not_allowed_handler(method: Method) -> ApiError {
    warn!(%method, "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: format!("method not allowed: {}", method),
        }),
    )
}

// =============================================================================
// Helpers
// =============================================================================

/// Serialize the public projection of `events` as a JSON array.
pub fn render_events(events: &[Event]) -> serde_json::Result<Vec<u8>> {
    let views: Vec<EventView> = events.iter().map(EventView::from).collect();
    serde_json::to_vec(&views)
}

fn to_error_response(error: QueryError) -> ApiError {
    warn!(error = %error, "Timeline request rejected");

    let status = match &error {
        QueryError::MissingUserId
        | QueryError::UserNotFound(_)
        | QueryError::EventNotFound(_) => StatusCode::BAD_REQUEST,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

// =============================================================================
// Tests
// =============================================================================

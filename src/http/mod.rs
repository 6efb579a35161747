//! The public JSON API.
//!
//! Routes mirror what the web client expects: catalog endpoints with long
//! cache lifetimes, the chapter resolver, search, verse of the day, and the
//! annotation CRUD. CORS is wide open; the API serves static scripture data
//! and device-local annotations, nothing sensitive.

pub mod handlers;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::{AppContext, SelahError};

pub type AppState = Arc<AppContext>;

pub fn build_router(ctx: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(handlers::api_index))
        .route("/api/books", get(handlers::books))
        .route("/api/versions", get(handlers::versions))
        .route("/api/chapter-improved", get(handlers::chapter_improved))
        .route("/api/search", axum::routing::post(handlers::search))
        .route("/api/verse-of-day", get(handlers::verse_of_day))
        .route(
            "/api/version-history",
            get(handlers::version_history)
                .post(handlers::version_history_add)
                .put(handlers::version_history_update)
                .delete(handlers::version_history_delete),
        )
        .route(
            "/api/bookmarks",
            get(handlers::bookmarks).post(handlers::bookmark_add),
        )
        .route(
            "/api/highlights",
            get(handlers::highlights).post(handlers::highlight_add),
        )
        .route("/api/reading-plans", get(handlers::reading_plans))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

pub async fn serve(ctx: AppState, bind: &str) -> anyhow::Result<()> {
    let app = build_router(ctx);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

// Cache-Control values for the catalog-ish endpoints.
pub(crate) const CACHE_DAY: &str = "s-maxage=86400, stale-while-revalidate=43200";
pub(crate) const CACHE_HOUR: &str = "s-maxage=3600, stale-while-revalidate=1800";

pub(crate) fn cached_json<T: Serialize>(cache: &'static str, body: T) -> Response {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static(cache))],
        Json(body),
    )
        .into_response()
}

/// JSON error response; the error taxonomy maps onto statuses here and
/// nowhere else.
pub struct ApiError {
    status: StatusCode,
    body: serde_json::Value,
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "success": false, "error": message }),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "success": false, "error": message }),
        }
    }
}

impl From<SelahError> for ApiError {
    fn from(err: SelahError) -> Self {
        match err {
            SelahError::SpanishUnavailable => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: json!({
                    "success": false,
                    "error": "Spanish Bible versions temporarily unavailable",
                    "message": "Las versiones de la Biblia en español no están disponibles temporalmente. Inténtelo más tarde.",
                    "code": 503
                }),
            },
            SelahError::InvalidInput(message) => Self::bad_request(&message),
            other => {
                // Details stay in the log; clients get a generic message.
                tracing::error!(error = %other, "request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: json!({ "success": false, "error": "Internal server error" }),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

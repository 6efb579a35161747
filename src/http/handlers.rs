use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::Chapter;
use crate::http::{cached_json, ApiError, AppState, CACHE_DAY, CACHE_HOUR};
use crate::store::Store;

pub async fn api_index() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Selah Bible API is running",
        "endpoints": [
            "books", "versions", "chapter-improved", "search", "verse-of-day",
            "version-history", "bookmarks", "highlights", "reading-plans"
        ]
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("API endpoint not found")
}

pub async fn books(State(ctx): State<AppState>) -> Response {
    cached_json(
        CACHE_DAY,
        json!({ "success": true, "books": ctx.catalog.books() }),
    )
}

pub async fn versions(State(ctx): State<AppState>) -> Response {
    cached_json(
        CACHE_DAY,
        json!({ "success": true, "versions": ctx.catalog.versions() }),
    )
}

pub async fn reading_plans(State(ctx): State<AppState>) -> Response {
    cached_json(
        CACHE_DAY,
        json!({ "success": true, "plans": ctx.catalog.reading_plans() }),
    )
}

#[derive(Deserialize)]
pub struct ChapterParams {
    book: Option<String>,
    chapter: Option<String>,
    version: Option<String>,
}

#[derive(Serialize)]
struct ChapterResponse {
    success: bool,
    #[serde(flatten)]
    chapter: Chapter,
}

pub async fn chapter_improved(
    State(ctx): State<AppState>,
    Query(params): Query<ChapterParams>,
) -> Result<Response, ApiError> {
    let (Some(book), Some(chapter)) = (params.book, params.chapter) else {
        return Err(ApiError::bad_request(
            "Book and chapter parameters are required",
        ));
    };
    let chapter: u32 = chapter
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Chapter must be a number"))?;
    let version = params.version.unwrap_or_else(|| "en-kjv".to_string());

    let resolved = ctx.resolver.resolve(&book, chapter, &version).await?;
    Ok(cached_json(
        CACHE_HOUR,
        ChapterResponse {
            success: true,
            chapter: resolved,
        },
    ))
}

#[derive(Default, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    book: Option<String>,
}

pub async fn search(
    State(ctx): State<AppState>,
    body: Option<Json<SearchBody>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let query = body.query.unwrap_or_default();
    let version = body.version.unwrap_or_else(|| "es-rvr1960".to_string());
    let book = body.book.unwrap_or_default();
    let scope = match book.trim() {
        "" => None,
        b => Some(b),
    };

    let results = ctx.search.search(&query, &version, scope).await?;
    let count = results.len();
    Ok(Json(json!({
        "success": true,
        "results": results,
        "query": query.trim(),
        "version": version,
        "book": book,
        "count": count
    })))
}

pub async fn verse_of_day(State(ctx): State<AppState>) -> Response {
    let verse = ctx.votd.select(Utc::now().date_naive()).await;
    cached_json(CACHE_HOUR, json!({ "success": true, "verse": verse }))
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "userId", default = "default_user")]
    user_id: String,
}

fn default_user() -> String {
    "default".to_string()
}

pub async fn version_history(
    State(ctx): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Value>, ApiError> {
    let entries = ctx.store.version_history()?;
    let favorites: Vec<String> = entries
        .iter()
        .filter(|e| e.favorite)
        .map(|e| e.id.clone())
        .collect();
    let default_version = entries
        .iter()
        .max_by_key(|e| e.usage_count)
        .map_or_else(|| "en-kjv".to_string(), |e| e.id.clone());

    Ok(Json(json!({
        "success": true,
        "history": {
            "userId": params.user_id,
            "recentVersions": entries,
            "favoriteVersions": favorites,
            "defaultVersion": default_version,
            "lastSync": Utc::now(),
        }
    })))
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryAddBody {
    version_id: Option<String>,
    version_name: Option<String>,
    lang: Option<String>,
}

pub async fn version_history_add(
    State(ctx): State<AppState>,
    body: Option<Json<HistoryAddBody>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let (Some(id), Some(name), Some(lang)) = (body.version_id, body.version_name, body.lang)
    else {
        return Err(ApiError::bad_request(
            "versionId, versionName, and lang are required",
        ));
    };

    let entry = ctx.store.record_version_use(&id, &name, &lang)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Version added to history",
            "entry": entry
        })),
    ))
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryUpdateBody {
    version_id: Option<String>,
    favorite: Option<bool>,
    usage_count: Option<i64>,
}

pub async fn version_history_update(
    State(ctx): State<AppState>,
    body: Option<Json<HistoryUpdateBody>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let Some(id) = body.version_id else {
        return Err(ApiError::bad_request("versionId is required"));
    };

    match ctx
        .store
        .update_version_entry(&id, body.favorite, body.usage_count)?
    {
        Some(entry) => Ok(Json(json!({
            "success": true,
            "message": "Version history updated",
            "entry": entry
        }))),
        None => Err(ApiError::not_found("Version not found in history")),
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDeleteBody {
    version_id: Option<String>,
}

pub async fn version_history_delete(
    State(ctx): State<AppState>,
    body: Option<Json<HistoryDeleteBody>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let Some(id) = body.version_id else {
        return Err(ApiError::bad_request("versionId is required"));
    };

    ctx.store.remove_version_entry(&id)?;
    Ok(Json(json!({
        "success": true,
        "message": "Version removed from history",
        "versionId": id
    })))
}

#[derive(Default, Deserialize)]
pub struct BookmarkBody {
    verse: Option<Value>,
    reference: Option<String>,
}

pub async fn bookmarks(State(ctx): State<AppState>) -> Result<Json<Value>, ApiError> {
    let bookmarks = ctx.store.bookmarks()?;
    Ok(Json(json!({ "success": true, "bookmarks": bookmarks })))
}

pub async fn bookmark_add(
    State(ctx): State<AppState>,
    body: Option<Json<BookmarkBody>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let Some(verse) = body.verse.as_ref().map(json_text).filter(|v| !v.is_empty()) else {
        return Err(ApiError::bad_request("verse is required"));
    };

    let id = ctx.store.add_bookmark(&verse, body.reference.as_deref())?;
    Ok(Json(json!({
        "success": true,
        "message": "Bookmark guardado",
        "id": id
    })))
}

#[derive(Default, Deserialize)]
pub struct HighlightBody {
    verse: Option<Value>,
    color: Option<String>,
}

pub async fn highlights(State(ctx): State<AppState>) -> Result<Json<Value>, ApiError> {
    let highlights = ctx.store.highlights()?;
    Ok(Json(json!({ "success": true, "highlights": highlights })))
}

pub async fn highlight_add(
    State(ctx): State<AppState>,
    body: Option<Json<HighlightBody>>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let Some(verse) = body.verse.as_ref().map(json_text).filter(|v| !v.is_empty()) else {
        return Err(ApiError::bad_request("verse is required"));
    };
    let color = body.color.unwrap_or_else(|| "yellow".to_string());

    let id = ctx.store.add_highlight(&verse, &color)?;
    Ok(Json(json!({
        "success": true,
        "message": "Highlight guardado",
        "id": id
    })))
}

/// Clients send the verse payload either as a plain string or as a small
/// object; store a readable form of whatever arrived.
fn json_text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.trim().to_string(),
        None => value.to_string(),
    }
}

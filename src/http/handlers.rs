//! Axum HTTP handlers for the adapter endpoints.
//!
//! Every data endpoint runs the same linear pipeline: read the backing
//! file, validate its shape, map the records, wrap them, respond.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::adapt::{
    adapt_flat_quotes, adapt_prayers, filter_prayers_by_category, CategoriesResponse, Envelope,
};
use crate::errors::AppError;
use crate::source::{PrayerBook, SourceDocument};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn root() -> &'static str {
    "Local quotes API adapter is up. Primary endpoint: /api/quotes"
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Envelope>, AppError> {
    let results = match state.document_provider.load_document().await? {
        SourceDocument::Flat(quotes) => adapt_flat_quotes(quotes),
        SourceDocument::Nested(book) => adapt_prayers(book.prayers),
    };

    Ok(Json(Envelope::new(results)))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let book = require_prayer_book(state.document_provider.load_document().await?)?;
    let Some(categories) = book.categories else {
        return Err(AppError::shape("document has no categories array"));
    };

    Ok(Json(CategoriesResponse {
        count: categories.len(),
        categories,
    }))
}

pub async fn list_quotes_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Envelope>, AppError> {
    // A non-numeric segment yields an id that matches nothing, so the
    // response is an empty envelope rather than a client error.
    let category_id = category_id.trim().parse::<i64>().ok();

    let book = require_prayer_book(state.document_provider.load_document().await?)?;
    let matching = filter_prayers_by_category(book.prayers, category_id);

    Ok(Json(Envelope::scoped(adapt_prayers(matching), category_id)))
}

fn require_prayer_book(document: SourceDocument) -> Result<PrayerBook, AppError> {
    match document {
        SourceDocument::Nested(book) => Ok(book),
        SourceDocument::Flat(_) => Err(AppError::shape(
            "document is a flat quote array, prayers are required",
        )),
    }
}

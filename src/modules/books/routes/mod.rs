use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use bookshelf_http::error::AppError;

use super::models::{Book, BookInput};
use super::repo;

/// Build the books router with the injected storage handle as state.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/{id}", get(get_book).put(update_book).delete(delete_book))
        .with_state(pool)
}

/// GET / — list all books in insertion order.
async fn list_books(State(pool): State<SqlitePool>) -> Result<Json<Vec<Book>>, AppError> {
    let books = repo::list(&pool)
        .await
        .map_err(|err| AppError::internal("Failed to fetch books", err.into()))?;
    Ok(Json(books))
}

/// GET /{id} — fetch a single book.
async fn get_book(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = find_existing(&pool, &id).await?;
    Ok(Json(book))
}

/// POST / — validate and persist a new book.
async fn create_book(
    State(pool): State<SqlitePool>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Json(input) = body.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    input.validate().map_err(AppError::bad_request)?;

    let book = repo::insert(&pool, &input)
        .await
        .map_err(|err| AppError::internal("Failed to create book", err.into()))?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /{id} — overwrite an existing book's fields, id untouched.
///
/// Existence is checked before the body, so a malformed body against a
/// missing id yields 404 rather than 400.
async fn update_book(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let existing = find_existing(&pool, &id).await?;

    let Json(input) = body.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    input.validate().map_err(AppError::bad_request)?;

    let book = repo::update(&pool, existing.id, &input)
        .await
        .map_err(|err| AppError::internal("Failed to update book", err.into()))?;
    Ok(Json(book))
}

/// DELETE /{id} — 404 when no row matched.
async fn delete_book(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let Ok(id) = id.parse::<i64>() else {
        return Err(AppError::not_found("Book not found"));
    };

    let affected = repo::delete(&pool, id)
        .await
        .map_err(|err| AppError::internal("Failed to delete book", err.into()))?;
    if affected == 0 {
        return Err(AppError::not_found("Book not found"));
    }

    Ok(Json(json!({ "message": "Book deleted" })))
}

/// Resolve a path-supplied identifier to an existing record.
///
/// An unparseable id, a missing row, and a lookup failure all surface as
/// the same not-found response.
async fn find_existing(pool: &SqlitePool, raw_id: &str) -> Result<Book, AppError> {
    let Ok(id) = raw_id.parse::<i64>() else {
        return Err(AppError::not_found("Book not found"));
    };

    match repo::find_by_id(pool, id).await {
        Ok(Some(book)) => Ok(book),
        Ok(None) => Err(AppError::not_found("Book not found")),
        Err(err) => {
            tracing::warn!(id, error = ?err, "book lookup failed");
            Err(AppError::not_found("Book not found"))
        }
    }
}

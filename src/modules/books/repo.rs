//! SQL access for the books table. All failures surface as `sqlx::Error`.

use sqlx::SqlitePool;

use super::models::{Book, BookInput};

/// Fetch all books in insertion order.
pub async fn list(pool: &SqlitePool) -> sqlx::Result<Vec<Book>> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, author, year
        FROM books
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Book>> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, author, year
        FROM books
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Persist a new book, returning the row with its storage-assigned id.
pub async fn insert(pool: &SqlitePool, input: &BookInput) -> sqlx::Result<Book> {
    sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (title, author, year)
        VALUES (?1, ?2, ?3)
        RETURNING id, title, author, year
        "#,
    )
    .bind(&input.title)
    .bind(&input.author)
    .bind(input.year)
    .fetch_one(pool)
    .await
}

/// Overwrite title/author/year on an existing row, id untouched.
pub async fn update(pool: &SqlitePool, id: i64, input: &BookInput) -> sqlx::Result<Book> {
    sqlx::query_as::<_, Book>(
        r#"
        UPDATE books
        SET title = ?1, author = ?2, year = ?3
        WHERE id = ?4
        RETURNING id, title, author, year
        "#,
    )
    .bind(&input.title)
    .bind(&input.author)
    .bind(input.year)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete by id, returning the number of rows affected.
pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM books
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

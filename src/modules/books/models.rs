use serde::{Deserialize, Serialize};

/// Earliest publication year accepted through the validated path.
pub const YEAR_MIN: i64 = 0;
/// Latest publication year accepted through the validated path.
pub const YEAR_MAX: i64 = 2100;

/// Persisted book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    /// Unique identifier, assigned by storage on creation and never changed
    pub id: i64,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publication year, within [0, 2100]
    pub year: i64,
}

/// Request model accepted for create and update. Never carries an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl BookInput {
    /// Check the full constraint set, before any storage interaction.
    ///
    /// `author` is required here on both create and update; see DESIGN.md.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.author.is_empty() {
            return Err("author must not be empty".to_string());
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.year) {
            return Err(format!(
                "year must be between {} and {}",
                YEAR_MIN, YEAR_MAX
            ));
        }
        Ok(())
    }
}

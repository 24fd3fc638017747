//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use pocketknife_core::{Product, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT/RETURNING column list for product queries.
pub const PRODUCT_COLUMNS: &str = "id, name, price, created_at, updated_at";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Render a timestamp the way it is stored.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Helper to parse datetime strings that may have "UTC" suffix.
pub fn parse_datetime(datetime_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = datetime_str.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

/// Parse a database row into a Product.
pub fn row_to_product(row: &SqliteRow) -> Result<Product, RepositoryError> {
    let created_at: String = get(row, "created_at")?;
    let updated_at: String = get(row, "updated_at")?;

    let created_at = parse_datetime(&created_at).ok_or_else(|| {
        RepositoryError::Storage(format!("Invalid created_at timestamp '{created_at}'"))
    })?;
    let updated_at = parse_datetime(&updated_at).unwrap_or(created_at);

    Ok(Product {
        id: get(row, "id")?,
        name: get(row, "name")?,
        price: get(row, "price")?,
        created_at,
        updated_at,
    })
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

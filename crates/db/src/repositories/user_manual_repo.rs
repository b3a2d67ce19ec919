//! Repository for the `user_manuals` table.

use manual_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_manual::{ManualChanges, ManualListQuery, NewManual, UserManual};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, serial_number, description, video_link, created_at, updated_at, deleted_at";

/// Shared `WHERE` clause for list and count queries.
///
/// `$1` is the include-deleted flag, `$2` the escaped search term (or NULL).
const LIST_FILTER: &str = "($1 OR deleted_at IS NULL)
     AND ($2::TEXT IS NULL OR title ILIKE '%' || $2 || '%' ESCAPE '\\')";

/// Provides CRUD operations for user manuals.
pub struct UserManualRepo;

impl UserManualRepo {
    /// Insert a new user manual, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewManual) -> Result<UserManual, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_manuals (title, serial_number, description, video_link)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserManual>(&query)
            .bind(&input.title)
            .bind(input.serial_number)
            .bind(&input.description)
            .bind(&input.video_link)
            .fetch_one(pool)
            .await
    }

    /// Find a user manual by id. Soft-deleted rows are only returned when
    /// `include_deleted` is set.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        include_deleted: bool,
    ) -> Result<Option<UserManual>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_manuals WHERE id = $1 AND ($2 OR deleted_at IS NULL)"
        );
        sqlx::query_as::<_, UserManual>(&query)
            .bind(id)
            .bind(include_deleted)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of user manuals matching `params`.
    pub async fn list(
        pool: &PgPool,
        params: &ManualListQuery,
    ) -> Result<Vec<UserManual>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_manuals
             WHERE {LIST_FILTER}
             ORDER BY id {}
             LIMIT $3 OFFSET $4",
            params.direction.as_sql()
        );
        sqlx::query_as::<_, UserManual>(&query)
            .bind(params.include_deleted)
            .bind(params.search_term().map(escape_like))
            .bind(params.page.limit())
            .bind(params.page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all user manuals matching `params`, ignoring pagination.
    pub async fn count(pool: &PgPool, params: &ManualListQuery) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM user_manuals WHERE {LIST_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(params.include_deleted)
            .bind(params.search_term().map(escape_like))
            .fetch_one(pool)
            .await
    }

    /// Update a live user manual. Only fields present in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ManualChanges,
    ) -> Result<Option<UserManual>, sqlx::Error> {
        let query = format!(
            "UPDATE user_manuals SET
                title = COALESCE($2, title),
                serial_number = CASE WHEN $3 THEN $4 ELSE serial_number END,
                description = CASE WHEN $5 THEN $6 ELSE description END,
                video_link = CASE WHEN $7 THEN $8 ELSE video_link END,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserManual>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.serial_number.is_some())
            .bind(input.serial_number.flatten())
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.video_link.is_some())
            .bind(input.video_link.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a user manual by id. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_manuals SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted user manual. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_manuals SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }
}

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppError;

/// Maps a caller-supplied username to an internal user id.
///
/// Identity is re-asserted on every request as a bare username, with no
/// session or token. Keeping the lookup behind this trait means a
/// token-based resolver can replace [`UsernameResolver`] without touching
/// the task handlers.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, username: &str) -> Result<i64, AppError>;
}

/// Resolves usernames against the `users` table.
pub struct UsernameResolver {
    pool: SqlitePool,
}

impl UsernameResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for UsernameResolver {
    async fn resolve(&self, username: &str) -> Result<i64, AppError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(id,)| id)
            .ok_or_else(|| AppError::NotFound("user does not exist".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool_with_user(username: &str) -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::init_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)")
            .bind(username)
            .bind("hash")
            .bind("2024-01-01 00:00:00+00:00")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    #[actix_rt::test]
    async fn test_resolves_known_username() {
        let pool = pool_with_user("alice").await;
        let resolver = UsernameResolver::new(pool);

        let id = resolver.resolve("alice").await.unwrap();
        assert_eq!(id, 1);
    }

    #[actix_rt::test]
    async fn test_unknown_username_is_not_found() {
        let pool = pool_with_user("alice").await;
        let resolver = UsernameResolver::new(pool);

        let err = resolver.resolve("mallory").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_rt::test]
    async fn test_usernames_are_case_sensitive() {
        let pool = pool_with_user("alice").await;
        let resolver = UsernameResolver::new(pool);

        let err = resolver.resolve("Alice").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

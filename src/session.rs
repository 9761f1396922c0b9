//! Server-side sessions. The browser only holds an opaque random token in
//! the `session_id` cookie; the row maps it to a user.

use axum_extra::extract::cookie::{Cookie, SameSite};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{db::DbPool, error::AppResult};

pub const SESSION_COOKIE: &str = "session_id";

#[derive(Debug, Clone, FromRow)]
pub struct SessionUser {
    pub user_id: i32,
    pub username: String,
}

pub struct SessionRepository;

impl SessionRepository {
    pub async fn create(pool: &DbPool, user_id: i32) -> AppResult<String> {
        let token = Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().timestamp();

        sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(user_id)
            .bind(created_at)
            .execute(pool)
            .await?;

        Ok(token)
    }

    /// Resolves a token to its user. A session whose user is gone resolves to `None`.
    pub async fn find_user(pool: &DbPool, token: &str) -> AppResult<Option<SessionUser>> {
        let user = sqlx::query_as::<_, SessionUser>(
            r#"
            SELECT u.id AS user_id, u.username
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deleting an unknown token is not an error.
    pub async fn delete(pool: &DbPool, token: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(pool)
            .await?;

        Ok(())
    }
}

/// Session cookie without `Max-Age`, so it ends with the browser session.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// An already-expired session cookie. Adding it to any jar tells the
/// browser to drop `session_id`.
pub fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    cookie.make_removal();
    cookie
}

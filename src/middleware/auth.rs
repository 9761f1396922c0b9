use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    error::AppError,
    flash::{FLASH_COOKIE, Flash},
    session::{SESSION_COOKIE, SessionRepository, expired_session_cookie},
    state::AppState,
};

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
}

/// Per-request view of who is calling. Every handler takes one of these
/// instead of reading login state from anywhere else.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user: Option<AuthUser>,
    /// Raw session token, present even when it no longer resolves to a user.
    pub token: Option<String>,
    pub flash: Option<Flash>,
    /// Request cookies plus any changes to send back with the response.
    pub jar: CookieJar,
}

impl RequestContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn require_user(&self) -> Result<&AuthUser, AppError> {
        self.user.as_ref().ok_or(AppError::Unauthenticated)
    }
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let flash = jar
            .get(FLASH_COOKIE)
            .and_then(|cookie| Flash::from_code(cookie.value()));

        let Some(token) = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
        else {
            return Ok(RequestContext {
                user: None,
                token: None,
                flash,
                jar,
            });
        };

        let user = SessionRepository::find_user(&state.pool, &token)
            .await?
            .map(|session| AuthUser {
                user_id: session.user_id,
                username: session.username,
            });

        // A stale token would be looked up again on every request.
        let jar = if user.is_none() {
            tracing::debug!("clearing session cookie without a session");
            jar.add(expired_session_cookie())
        } else {
            jar
        };

        Ok(RequestContext {
            user,
            token: Some(token),
            flash,
            jar,
        })
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use thiserror::Error;

use crate::{flash::Flash, session::expired_session_cookie, views::render_error};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Username already taken")]
    DuplicateUser,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Login required")]
    Unauthenticated,

    #[error("Not Found")]
    NotFound,

    #[error("Invalid filter kind {0}")]
    InvalidFilterKind(String),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // Whatever session cookie came in did not resolve, so drop it.
            AppError::Unauthenticated => Flash::LoginRequired
                .redirect_with(CookieJar::new().add(expired_session_cookie()), "/login"),
            AppError::InvalidCredentials => Flash::InvalidCredentials.redirect("/login"),
            AppError::DuplicateUser => Flash::DuplicateUser.redirect("/register"),
            AppError::MissingCredentials => Flash::MissingCredentials.redirect("/register"),
            AppError::InvalidFilterKind(kind) => {
                tracing::debug!(kind = %kind, "rejected filter kind");
                Flash::InvalidFilter.redirect("/list")
            }
            AppError::NotFound => render_error(StatusCode::NOT_FOUND, "Page not found."),
            AppError::DbError(err) => {
                tracing::error!(error = %err, "database error");
                render_error(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "orm error");
                render_error(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                render_error(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

//! One-shot messages carried across a redirect in a short-lived cookie.
//!
//! Only a short code travels in the cookie; the text shown to the user is
//! looked up here, so nothing user-controlled is ever echoed back.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration as CookieDuration;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    LoginRequired,
    InvalidCredentials,
    DuplicateUser,
    MissingCredentials,
    InvalidFilter,
    Registered,
    LoggedIn,
    LoggedOut,
    FavoriteAdded,
    FavoriteRemoved,
}

impl Flash {
    const ALL: [Flash; 10] = [
        Flash::LoginRequired,
        Flash::InvalidCredentials,
        Flash::DuplicateUser,
        Flash::MissingCredentials,
        Flash::InvalidFilter,
        Flash::Registered,
        Flash::LoggedIn,
        Flash::LoggedOut,
        Flash::FavoriteAdded,
        Flash::FavoriteRemoved,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Flash::LoginRequired => "login_required",
            Flash::InvalidCredentials => "invalid_credentials",
            Flash::DuplicateUser => "duplicate_user",
            Flash::MissingCredentials => "missing_credentials",
            Flash::InvalidFilter => "invalid_filter",
            Flash::Registered => "registered",
            Flash::LoggedIn => "logged_in",
            Flash::LoggedOut => "logged_out",
            Flash::FavoriteAdded => "favorite_added",
            Flash::FavoriteRemoved => "favorite_removed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flash| flash.code() == code)
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::LoginRequired => "Please log in to continue.",
            Flash::InvalidCredentials => "Invalid username or password.",
            Flash::DuplicateUser => "That username is already taken.",
            Flash::MissingCredentials => "Username and password are required.",
            Flash::InvalidFilter => "Unknown filter. Use title or genre.",
            Flash::Registered => "Account created. You can log in now.",
            Flash::LoggedIn => "Logged in.",
            Flash::LoggedOut => "Logged out.",
            Flash::FavoriteAdded => "Added to favorites.",
            Flash::FavoriteRemoved => "Removed from favorites.",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(
            self,
            Flash::LoginRequired
                | Flash::InvalidCredentials
                | Flash::DuplicateUser
                | Flash::MissingCredentials
                | Flash::InvalidFilter
        )
    }

    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE, self.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(CookieDuration::seconds(60))
            .build()
    }

    /// 303 to `to` with this message queued for the next rendered page.
    pub fn redirect(self, to: &str) -> Response {
        self.redirect_with(CookieJar::new(), to)
    }

    /// Like [`Flash::redirect`] but keeps the other changes made to `jar`
    /// (e.g. a new session cookie).
    pub fn redirect_with(self, jar: CookieJar, to: &str) -> Response {
        (jar.add(self.cookie()), Redirect::to(to)).into_response()
    }

    /// Drops the pending message once a page has shown it.
    pub fn consume(jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(FLASH_COOKIE).path("/"))
    }
}

/// Plain 303 without a message.
pub fn see_other(to: &str) -> Response {
    Redirect::to(to).into_response()
}

use axum::{
    Form, Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppResult,
    flash::{Flash, see_other},
    middleware::auth::RequestContext,
    services::auth_service::{login_user, logout_user, register_user},
    session::{SESSION_COOKIE, session_cookie},
    state::AppState,
    views,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page))
        .route("/register", get(register_page))
        .route("/login_input", get(login_query).post(login_form))
        .route("/register_input", get(register_query).post(register_form))
        .route("/logout", get(logout))
}

pub async fn login_page(ctx: RequestContext) -> Response {
    if ctx.is_authenticated() {
        return see_other("/");
    }
    views::render(&ctx, "Login", &views::pages::login())
}

pub async fn register_page(ctx: RequestContext) -> Response {
    if ctx.is_authenticated() {
        return see_other("/");
    }
    views::render(&ctx, "Register", &views::pages::register())
}

pub async fn login_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(payload): Form<LoginRequest>,
) -> AppResult<Response> {
    login(&state, jar, payload).await
}

pub async fn login_query(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(payload): Query<LoginRequest>,
) -> AppResult<Response> {
    login(&state, jar, payload).await
}

async fn login(state: &AppState, jar: CookieJar, payload: LoginRequest) -> AppResult<Response> {
    let outcome = login_user(state, payload).await?;
    let jar = jar.add(session_cookie(outcome.token));
    Ok(Flash::LoggedIn.redirect_with(jar, "/list"))
}

pub async fn register_form(
    State(state): State<AppState>,
    Form(payload): Form<RegisterRequest>,
) -> AppResult<Response> {
    register(&state, payload).await
}

pub async fn register_query(
    State(state): State<AppState>,
    Query(payload): Query<RegisterRequest>,
) -> AppResult<Response> {
    register(&state, payload).await
}

async fn register(state: &AppState, payload: RegisterRequest) -> AppResult<Response> {
    register_user(state, payload).await?;
    Ok(Flash::Registered.redirect("/login"))
}

pub async fn logout(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    logout_user(&state, ctx.token.as_deref()).await?;
    let jar = ctx.jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok(Flash::LoggedOut.redirect_with(jar, "/"))
}

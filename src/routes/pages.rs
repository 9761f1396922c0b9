use axum::response::Response;

use crate::{error::AppError, middleware::auth::RequestContext, views};

pub async fn index(ctx: RequestContext) -> Response {
    let username = ctx.user.as_ref().map(|user| user.username.as_str());
    views::render(&ctx, "Home", &views::pages::index(username))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

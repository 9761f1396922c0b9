use axum::{Router, extract::State, response::Response, routing::get};

use crate::{
    error::AppResult, middleware::auth::RequestContext, services::history_service,
    state::AppState, views,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(list_history))
}

pub async fn list_history(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<Response> {
    let user = ctx.require_user()?;
    let items = history_service::list_history(&state, user).await?;
    Ok(views::render(&ctx, "History", &views::pages::history(&items)))
}

use axum::{
    Router,
    extract::{Path, State},
    response::Response,
    routing::get,
};

use crate::{
    error::AppResult,
    flash::Flash,
    middleware::auth::RequestContext,
    models::FavoriteState,
    routes::catalog::parse_media_id,
    services::favorite_service,
    state::AppState,
    views,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites))
        .route("/favoritesUpdate/{id}", get(toggle_favorite).post(toggle_favorite))
}

pub async fn list_favorites(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> AppResult<Response> {
    let user = ctx.require_user()?;
    let entries = favorite_service::list_favorites(&state, user).await?;
    Ok(views::render(&ctx, "Favorites", &views::pages::favorites(&entries)))
}

pub async fn toggle_favorite(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let user = ctx.require_user()?;
    let id = parse_media_id(&id)?;
    let flash = match favorite_service::toggle(&state, user, id).await? {
        FavoriteState::Favorited => Flash::FavoriteAdded,
        FavoriteState::NotFavorited => Flash::FavoriteRemoved,
    };
    Ok(flash.redirect(&format!("/detail/{id}")))
}

use axum::{
    Router,
    extract::{Path, State},
    response::Response,
    routing::get,
};

use crate::{
    dto::catalog::CatalogFilter,
    error::{AppError, AppResult},
    flash::Flash,
    middleware::auth::RequestContext,
    models::{FavoriteState, MediaDetail},
    services::{catalog_service, favorite_service, history_service},
    state::AppState,
    views,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(list))
        .route("/list/{query}", get(list_filtered))
        .route("/detail/{id}", get(detail))
}

pub async fn list(State(state): State<AppState>, ctx: RequestContext) -> AppResult<Response> {
    ctx.require_user()?;
    let entries = catalog_service::list_all(&state).await?;
    Ok(views::render(&ctx, "Catalog", &views::pages::list(&entries, None)))
}

/// `/list/<filter>+<name>`, e.g. `/list/genre+Comedy`.
pub async fn list_filtered(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(query): Path<String>,
) -> AppResult<Response> {
    ctx.require_user()?;
    let filter = CatalogFilter::parse(&query)?;
    let entries = catalog_service::filter(&state, &filter).await?;
    let body = views::pages::list(&entries, Some((filter.kind.as_str(), filter.value.as_str())));
    Ok(views::render(&ctx, "Catalog", &body))
}

/// Shows one entry and records the view in the caller's history. The page a
/// favorite toggle redirects back to is not a new view.
pub async fn detail(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let user = ctx.require_user()?;
    let id = parse_media_id(&id)?;
    let media = catalog_service::get_by_id(&state, id).await?;
    let favorite = if favorite_service::is_favorite(&state, user, id).await? {
        FavoriteState::Favorited
    } else {
        FavoriteState::NotFavorited
    };
    if !matches!(ctx.flash, Some(Flash::FavoriteAdded | Flash::FavoriteRemoved)) {
        history_service::record(&state, user, id).await?;
    }

    let title = media.title.clone();
    let body = views::pages::detail(&MediaDetail { media, favorite });
    Ok(views::render(&ctx, &title, &body))
}

/// Ids that are not integers name no entry.
pub fn parse_media_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|_| AppError::NotFound)
}

use anyhow::anyhow;
use chrono::Utc;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

use crate::{
    entity::{
        favorites::{ActiveModel as FavoriteActive, Column as FavCol, Entity as Favorites},
        media_entries::{Column as MediaCol, Entity as MediaEntries},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{FavoriteState, MediaEntry},
    services::catalog_service,
    state::AppState,
};

const TOGGLE_ATTEMPTS: usize = 4;

/// Flips the favorite marker for `(user, media_id)` and returns the new state.
///
/// Each step is a single write statement, so SQLite takes the write lock up
/// front and waits on `busy_timeout` instead of failing an upgraded read lock.
/// An insert that hits the `(user_id, media_id)` index means the pair is
/// present and gets deleted; a delete that finds nothing means a concurrent
/// toggle removed it first, and the insert is retried.
pub async fn toggle(state: &AppState, user: &AuthUser, media_id: i32) -> AppResult<FavoriteState> {
    catalog_service::get_by_id(state, media_id).await?;

    for _ in 0..TOGGLE_ATTEMPTS {
        let active = FavoriteActive {
            id: NotSet,
            user_id: Set(user.user_id),
            media_id: Set(media_id),
            created_at: Set(Utc::now()),
        };
        let inserted = Favorites::insert(active)
            .on_conflict(
                OnConflict::columns([FavCol::UserId, FavCol::MediaId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&state.orm)
            .await?;
        if inserted > 0 {
            tracing::info!(user_id = user.user_id, media_id, "favorite added");
            return Ok(FavoriteState::Favorited);
        }

        let deleted = Favorites::delete_many()
            .filter(FavCol::UserId.eq(user.user_id))
            .filter(FavCol::MediaId.eq(media_id))
            .exec(&state.orm)
            .await?;
        if deleted.rows_affected > 0 {
            tracing::info!(user_id = user.user_id, media_id, "favorite removed");
            return Ok(FavoriteState::NotFavorited);
        }

        tracing::debug!(user_id = user.user_id, media_id, "favorite changed underneath toggle");
    }

    Err(anyhow!("favorite toggle for media {media_id} did not settle").into())
}

pub async fn is_favorite(state: &AppState, user: &AuthUser, media_id: i32) -> AppResult<bool> {
    let count = Favorites::find()
        .filter(FavCol::UserId.eq(user.user_id))
        .filter(FavCol::MediaId.eq(media_id))
        .count(&state.orm)
        .await?;
    Ok(count > 0)
}

/// Favorited entries in the order they were added.
pub async fn list_favorites(state: &AppState, user: &AuthUser) -> AppResult<Vec<MediaEntry>> {
    let items = MediaEntries::find()
        .inner_join(Favorites)
        .filter(FavCol::UserId.eq(user.user_id))
        .order_by_asc(FavCol::Id)
        .order_by_asc(MediaCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(MediaEntry::from)
        .collect();
    Ok(items)
}

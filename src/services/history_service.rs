use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, ActiveValue::NotSet,
};

use crate::{
    entity::{
        history::{ActiveModel as HistoryActive, Column as HistoryCol, Entity as History},
        media_entries::Entity as MediaEntries,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{HistoryItem, MediaEntry},
    state::AppState,
};

/// Appends a view. Repeated views of the same entry each get a row.
pub async fn record(state: &AppState, user: &AuthUser, media_id: i32) -> AppResult<()> {
    let active = HistoryActive {
        id: NotSet,
        user_id: Set(user.user_id),
        media_id: Set(media_id),
        viewed_at: Set(Utc::now()),
    };
    let row = active.insert(&state.orm).await?;
    tracing::debug!(user_id = user.user_id, media_id, history_id = row.id, "view recorded");
    Ok(())
}

/// Most recent view first.
pub async fn list_history(state: &AppState, user: &AuthUser) -> AppResult<Vec<HistoryItem>> {
    let rows = History::find()
        .find_also_related(MediaEntries)
        .filter(HistoryCol::UserId.eq(user.user_id))
        .order_by_desc(HistoryCol::Id)
        .all(&state.orm)
        .await?;

    let items = rows
        .into_iter()
        .filter_map(|(record, media)| {
            media.map(|media| HistoryItem {
                id: record.id,
                media: MediaEntry::from(media),
                viewed_at: record.viewed_at,
            })
        })
        .collect();
    Ok(items)
}

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    dto::catalog::{CatalogFilter, FilterKind},
    entity::media_entries::{Column, Entity as MediaEntries},
    error::{AppError, AppResult},
    models::MediaEntry,
    state::AppState,
};

pub async fn list_all(state: &AppState) -> AppResult<Vec<MediaEntry>> {
    let items = MediaEntries::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(MediaEntry::from)
        .collect();
    Ok(items)
}

/// Title matches use SQLite `LIKE`, so they are substring matches that
/// ignore ASCII case. Genre matches are exact.
pub async fn filter(state: &AppState, filter: &CatalogFilter) -> AppResult<Vec<MediaEntry>> {
    let condition = match filter.kind {
        FilterKind::Title => Column::Title.contains(filter.value.as_str()),
        FilterKind::Genre => Column::Genre.eq(filter.value.as_str()),
    };

    let items = MediaEntries::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(MediaEntry::from)
        .collect::<Vec<_>>();

    tracing::debug!(kind = %filter.kind, value = %filter.value, matches = items.len(), "catalog filtered");
    Ok(items)
}

pub async fn get_by_id(state: &AppState, id: i32) -> AppResult<MediaEntry> {
    let result = MediaEntries::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(MediaEntry::from);
    match result {
        Some(entry) => Ok(entry),
        None => Err(AppError::NotFound),
    }
}

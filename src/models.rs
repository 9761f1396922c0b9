use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::{media_entries, users};

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaEntry {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
    pub release_date: Option<String>,
    /// Minutes.
    pub duration: Option<i32>,
}

impl From<media_entries::Model> for MediaEntry {
    fn from(model: media_entries::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            genre: model.genre,
            description: model.description,
            release_date: model.release_date,
            duration: model.duration,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryItem {
    pub id: i32,
    pub media: MediaEntry,
    pub viewed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
}

impl FavoriteState {
    pub fn is_favorited(self) -> bool {
        matches!(self, FavoriteState::Favorited)
    }
}

/// Everything the detail page shows about one entry.
#[derive(Debug, Clone, Serialize)]
pub struct MediaDetail {
    pub media: MediaEntry,
    pub favorite: FavoriteState,
}

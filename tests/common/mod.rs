#![allow(dead_code)]

use chrono::Utc;
use media_catalog::{
    db::{create_orm_conn, run_migrations},
    entity::{media_entries::ActiveModel as MediaActive, users::ActiveModel as UserActive},
    middleware::auth::AuthUser,
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use std::path::PathBuf;

/// Fresh in-memory database with the schema applied. One connection, since
/// each SQLite in-memory connection is its own database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

/// File-backed database in the temp dir, for tests that need several
/// connections writing at once. Pass the path to `remove_db_files` afterwards.
pub async fn setup_file_state(max_connections: u32) -> anyhow::Result<(AppState, PathBuf)> {
    let path = std::env::temp_dir().join(format!("media-catalog-{}.sqlite", uuid::Uuid::new_v4()));
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let orm = create_orm_conn(&url, max_connections).await?;
    run_migrations(&orm).await?;
    Ok((AppState::new(orm), path))
}

pub fn remove_db_files(path: &PathBuf) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

pub async fn create_media(state: &AppState, title: &str, genre: &str) -> anyhow::Result<i32> {
    let media = MediaActive {
        id: NotSet,
        title: Set(title.to_string()),
        genre: Set(genre.to_string()),
        description: Set(Some(format!("About {title}"))),
        release_date: Set(Some("1999-03-31".into())),
        duration: Set(Some(120)),
    }
    .insert(&state.orm)
    .await?;

    Ok(media.id)
}

/// Inserts a user with a placeholder hash; for tests that never log in by password.
pub async fn create_user(state: &AppState, username: &str) -> anyhow::Result<AuthUser> {
    let user = UserActive {
        id: NotSet,
        username: Set(username.to_string()),
        password_hash: Set("dummy".into()),
        created_at: Set(Utc::now()),
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        user_id: user.id,
        username: user.username,
    })
}

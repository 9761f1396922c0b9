mod common;

use media_catalog::{
    dto::{
        auth::{LoginRequest, RegisterRequest},
        catalog::{CatalogFilter, FilterKind},
    },
    entity::{Favorites, Users, users::Column as UserCol},
    error::AppError,
    models::FavoriteState,
    services::{auth_service, catalog_service, favorite_service, history_service},
    session::SessionRepository,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use common::{create_media, create_user, remove_db_files, setup_file_state, setup_state};

#[tokio::test]
async fn duplicate_registration_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let register = || RegisterRequest {
        username: "alice".into(),
        password: "secret".into(),
    };
    auth_service::register_user(&state, register()).await?;
    let second = auth_service::register_user(&state, register()).await;
    assert!(matches!(second, Err(AppError::DuplicateUser)));

    let count = Users::find()
        .filter(UserCol::Username.eq("alice"))
        .count(&state.orm)
        .await?;
    assert_eq!(count, 1);
    Ok(())
}

#[tokio::test]
async fn blank_registration_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let result = auth_service::register_user(
        &state,
        RegisterRequest {
            username: "   ".into(),
            password: "secret".into(),
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::MissingCredentials)));
    assert_eq!(Users::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn login_checks_password_and_creates_session() -> anyhow::Result<()> {
    let state = setup_state().await?;
    auth_service::register_user(
        &state,
        RegisterRequest {
            username: "alice".into(),
            password: "right".into(),
        },
    )
    .await?;

    let wrong = auth_service::authenticate(
        &state,
        &LoginRequest {
            username: "alice".into(),
            password: "wrong".into(),
        },
    )
    .await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));

    let unknown = auth_service::authenticate(
        &state,
        &LoginRequest {
            username: "bob".into(),
            password: "right".into(),
        },
    )
    .await;
    assert!(matches!(unknown, Err(AppError::InvalidCredentials)));

    let outcome = auth_service::login_user(
        &state,
        LoginRequest {
            username: "alice".into(),
            password: "right".into(),
        },
    )
    .await?;
    let session = SessionRepository::find_user(&state.pool, &outcome.token).await?;
    assert_eq!(session.map(|s| s.username).as_deref(), Some("alice"));

    auth_service::logout_user(&state, Some(&outcome.token)).await?;
    assert!(SessionRepository::find_user(&state.pool, &outcome.token).await?.is_none());
    // Logging out again is a no-op.
    auth_service::logout_user(&state, Some(&outcome.token)).await?;
    auth_service::logout_user(&state, None).await?;
    Ok(())
}

#[tokio::test]
async fn filter_by_genre_is_exact_and_title_is_substring() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let matrix = create_media(&state, "The Matrix", "Sci-Fi").await?;
    let reloaded = create_media(&state, "The Matrix Reloaded", "Sci-Fi").await?;
    let groundhog = create_media(&state, "Groundhog Day", "Comedy").await?;
    create_media(&state, "Dark Comedy Hour", "Comedy Drama").await?;

    let all = catalog_service::list_all(&state).await?;
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    let comedies = catalog_service::filter(
        &state,
        &CatalogFilter {
            kind: FilterKind::Genre,
            value: "Comedy".into(),
        },
    )
    .await?;
    let ids: Vec<i32> = comedies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![groundhog]);

    let matrices = catalog_service::filter(
        &state,
        &CatalogFilter {
            kind: FilterKind::Title,
            value: "Matrix".into(),
        },
    )
    .await?;
    let ids: Vec<i32> = matrices.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![matrix, reloaded]);

    let missing = catalog_service::get_by_id(&state, 9999).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn toggle_flips_state_and_never_duplicates() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, "alice").await?;
    let media = create_media(&state, "Heat", "Crime").await?;

    assert!(!favorite_service::is_favorite(&state, &user, media).await?);

    let first = favorite_service::toggle(&state, &user, media).await?;
    assert_eq!(first, FavoriteState::Favorited);
    assert!(favorite_service::is_favorite(&state, &user, media).await?);
    let listed = favorite_service::list_favorites(&state, &user).await?;
    assert_eq!(listed.iter().map(|m| m.id).collect::<Vec<_>>(), vec![media]);

    let second = favorite_service::toggle(&state, &user, media).await?;
    assert_eq!(second, FavoriteState::NotFavorited);
    assert!(!favorite_service::is_favorite(&state, &user, media).await?);
    assert_eq!(Favorites::find().count(&state.orm).await?, 0);

    let missing = favorite_service::toggle(&state, &user, 9999).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_toggles_never_fail_and_cancel_out() -> anyhow::Result<()> {
    let (state, path) = setup_file_state(8).await?;
    let user = create_user(&state, "alice").await?;
    let media = create_media(&state, "Heat", "Crime").await?;

    for _ in 0..20 {
        let first = tokio::spawn({
            let (state, user) = (state.clone(), user.clone());
            async move { favorite_service::toggle(&state, &user, media).await }
        });
        let second = tokio::spawn({
            let (state, user) = (state.clone(), user.clone());
            async move { favorite_service::toggle(&state, &user, media).await }
        });

        let mut outcomes = vec![first.await??, second.await??];
        outcomes.sort_by_key(|outcome| outcome.is_favorited());
        assert_eq!(
            outcomes,
            vec![FavoriteState::NotFavorited, FavoriteState::Favorited]
        );
        assert_eq!(Favorites::find().count(&state.orm).await?, 0);
    }

    state.orm.close().await?;
    remove_db_files(&path);
    Ok(())
}

#[tokio::test]
async fn favorites_are_per_user() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    let heat = create_media(&state, "Heat", "Crime").await?;
    let office = create_media(&state, "The Office", "Comedy").await?;

    favorite_service::toggle(&state, &alice, office).await?;
    favorite_service::toggle(&state, &alice, heat).await?;
    favorite_service::toggle(&state, &bob, heat).await?;

    let alice_favs = favorite_service::list_favorites(&state, &alice).await?;
    assert_eq!(
        alice_favs.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![office, heat]
    );
    let bob_favs = favorite_service::list_favorites(&state, &bob).await?;
    assert_eq!(bob_favs.iter().map(|m| m.id).collect::<Vec<_>>(), vec![heat]);
    Ok(())
}

#[tokio::test]
async fn history_is_most_recent_first_without_dedup() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, "alice").await?;
    let other = create_user(&state, "bob").await?;
    let first = create_media(&state, "The Matrix", "Sci-Fi").await?;
    let second = create_media(&state, "Heat", "Crime").await?;

    history_service::record(&state, &user, first).await?;
    history_service::record(&state, &user, second).await?;
    history_service::record(&state, &other, first).await?;

    let items = history_service::list_history(&state, &user).await?;
    let ids: Vec<i32> = items.iter().map(|item| item.media.id).collect();
    assert_eq!(ids, vec![second, first]);

    history_service::record(&state, &user, first).await?;
    let items = history_service::list_history(&state, &user).await?;
    let ids: Vec<i32> = items.iter().map(|item| item.media.id).collect();
    assert_eq!(ids, vec![first, second, first]);
    Ok(())
}

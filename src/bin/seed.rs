use media_catalog::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations, DbPool},
    dto::auth::RegisterRequest,
    error::AppError,
    services::auth_service::register_user,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState::new(orm);

    ensure_user(&state, "demo", "demo123").await?;
    seed_media(&state.pool).await?;

    println!("Seed completed.");
    Ok(())
}

async fn ensure_user(state: &AppState, username: &str, password: &str) -> anyhow::Result<()> {
    let payload = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    match register_user(state, payload).await {
        Ok(user) => println!("Created user {} (id={})", user.username, user.id),
        Err(AppError::DuplicateUser) => println!("User {username} already exists"),
        Err(err) => return Err(anyhow::anyhow!(err.to_string())),
    }
    Ok(())
}

async fn seed_media(pool: &DbPool) -> anyhow::Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_entries")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("Catalog already has {count} entries, skipping");
        return Ok(());
    }

    let entries = vec![
        ("The Matrix", "Sci-Fi", "A hacker learns what reality really is.", "1999-03-31", 136),
        ("The Matrix Reloaded", "Sci-Fi", "Neo and the rebels fight on.", "2003-05-15", 138),
        ("Groundhog Day", "Comedy", "A weatherman relives the same day.", "1993-02-12", 101),
        ("The Office", "Comedy", "A mockumentary about office life.", "2005-03-24", 22),
        ("Heat", "Crime", "A detective hunts a master thief.", "1995-12-15", 170),
        ("Planet Earth", "Documentary", "Wildlife across every habitat.", "2006-03-05", 50),
        ("Spirited Away", "Animation", "A girl is trapped in a spirit world.", "2001-07-20", 125),
    ];

    for (title, genre, description, release_date, duration) in entries {
        sqlx::query(
            r#"
            INSERT INTO media_entries (title, genre, description, release_date, duration)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(title)
        .bind(genre)
        .bind(description)
        .bind(release_date)
        .bind(duration)
        .execute(pool)
        .await?;
    }

    println!("Seeded media entries");
    Ok(())
}

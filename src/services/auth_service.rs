use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr, ActiveValue::NotSet,
};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    session::SessionRepository,
    state::AppState,
};

/// Result of a successful login: who logged in and the new session token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

pub async fn register_user(state: &AppState, payload: RegisterRequest) -> AppResult<User> {
    let RegisterRequest { username, password } = payload;
    let username = username.trim().to_string();
    if username.is_empty() || password.is_empty() {
        return Err(AppError::MissingCredentials);
    }

    let exist = Users::find()
        .filter(UserCol::Username.eq(username.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::DuplicateUser);
    }

    let password_hash = hash_password(&password)?;

    let active = UserActive {
        id: NotSet,
        username: Set(username),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now()),
    };
    // A concurrent registration can pass the check above; the unique index decides.
    let user = match active.insert(&state.orm).await {
        Ok(user) => user,
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(AppError::DuplicateUser);
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    Ok(user.into())
}

/// Checks credentials without touching sessions.
pub async fn authenticate(state: &AppState, payload: &LoginRequest) -> AppResult<User> {
    let username = payload.username.trim();
    let user = Users::find()
        .filter(UserCol::Username.eq(username))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::InvalidCredentials),
    };

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::InvalidCredentials);
    }

    Ok(user.into())
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginOutcome> {
    let user = match authenticate(state, &payload).await {
        Ok(user) => user,
        Err(err) => {
            if matches!(err, AppError::InvalidCredentials) {
                tracing::info!(username = %payload.username, "login rejected");
            }
            return Err(err);
        }
    };
    let token = SessionRepository::create(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, "user logged in");
    Ok(LoginOutcome { user, token })
}

/// Ends the session behind `token`, if any. Safe to call repeatedly.
pub async fn logout_user(state: &AppState, token: Option<&str>) -> AppResult<()> {
    if let Some(token) = token {
        SessionRepository::delete(&state.pool, token).await?;
        tracing::debug!("session ended");
    }
    Ok(())
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(password_hash)
}

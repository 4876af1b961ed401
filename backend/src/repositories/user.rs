//! Data access for user accounts.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::user::User;
use crate::types::UserId;

const USER_COLUMNS: &str = "id, first_name, last_name, username, email, password_hash, avatar, \
     reset_token_hash, reset_token_expires_at, created_at, updated_at";

pub async fn create(pool: &PgPool, user: &User) -> Result<User, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO users (id, first_name, last_name, username, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {USER_COLUMNS}
        "#
    );

    sqlx::query_as::<_, User>(&query)
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: UserId) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(email.to_lowercase())
        .fetch_optional(pool)
        .await
}

/// Looks an account up by email or username. The identifier is normalized
/// the same way the columns are stored, so lookups are case-insensitive.
pub async fn find_by_email_or_username(
    pool: &PgPool,
    identifier: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1 OR username = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(identifier.to_lowercase())
        .fetch_optional(pool)
        .await
}

/// Checks whether another account already holds the email or username.
/// `exclude` skips the caller's own row during profile updates.
pub async fn email_or_username_taken(
    pool: &PgPool,
    email: &str,
    username: &str,
    exclude: Option<UserId>,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT 1 FROM users
        WHERE (email = $1 OR username = $2) AND ($3::uuid IS NULL OR id != $3)
        LIMIT 1
        "#,
    )
    .bind(email.to_lowercase())
    .bind(username.to_lowercase())
    .bind(exclude)
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}

pub async fn update_profile(
    pool: &PgPool,
    id: UserId,
    first_name: &str,
    last_name: &str,
    username: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE users
        SET first_name = $2, last_name = $3, username = $4, email = $5, updated_at = NOW()
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    );

    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(username.to_lowercase())
        .bind(email.to_lowercase())
        .fetch_optional(pool)
        .await
}

pub async fn update_password(
    pool: &PgPool,
    id: UserId,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_reset_token(
    pool: &PgPool,
    id: UserId,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET reset_token_hash = $2, reset_token_expires_at = $3, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(token_hash)
    .bind(expires_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Finds the account holding an unexpired reset-token digest. Expired
/// tokens never match, so they behave exactly like invalid ones.
pub async fn find_by_active_reset_token(
    pool: &PgPool,
    token_hash: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        r#"
        SELECT {USER_COLUMNS} FROM users
        WHERE reset_token_hash = $1 AND reset_token_expires_at > NOW()
        "#
    );
    sqlx::query_as::<_, User>(&query)
        .bind(token_hash)
        .fetch_optional(pool)
        .await
}

/// Replaces the password hash and clears the reset-token fields in one
/// statement, making the token single-use.
pub async fn complete_password_reset(
    pool: &PgPool,
    id: UserId,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $2,
            reset_token_hash = NULL,
            reset_token_expires_at = NULL,
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(password_hash)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update_avatar(
    pool: &PgPool,
    id: UserId,
    avatar: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE users
        SET avatar = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    );
    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .bind(avatar)
        .fetch_optional(pool)
        .await
}

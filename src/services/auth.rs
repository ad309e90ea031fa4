use sqlx::SqlitePool;

use crate::models::user::User;

pub const ADMIN_USERNAME: &str = "admin";
const ADMIN_DEFAULT_PASSWORD: &str = "admin123";
const ADMIN_ROLE: &str = "USER";

pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT username, password_hash, role FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Checks a plaintext password against the stored hash for `username`.
/// Unknown users and mismatched passwords both come back as `None`.
pub async fn verify_credentials(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = find_user_by_username(pool, username).await?;
    Ok(user.filter(|u| bcrypt::verify(password, &u.password_hash).unwrap_or(false)))
}

/// Seeds the default admin account on first start. The existence check keeps
/// the seed idempotent across restarts.
pub async fn ensure_admin_user(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if find_user_by_username(pool, ADMIN_USERNAME).await?.is_some() {
        return Ok(());
    }

    let hash = bcrypt::hash(ADMIN_DEFAULT_PASSWORD, bcrypt::DEFAULT_COST)
        .expect("failed to hash default admin password");

    sqlx::query("INSERT INTO users (username, password_hash, role) VALUES (?, ?, ?)")
        .bind(ADMIN_USERNAME)
        .bind(hash)
        .bind(ADMIN_ROLE)
        .execute(pool)
        .await?;

    tracing::info!(username = ADMIN_USERNAME, "admin user created");
    Ok(())
}

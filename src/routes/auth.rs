use crate::{
    auth::{hash_password, LoginRequest, RegisterRequest},
    error::AppError,
    models::User,
};
use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

/// Register a new user
///
/// Hashes the password and inserts the account; the username's uniqueness is
/// enforced by the storage constraint, so a duplicate surfaces as a conflict
/// without mutating state.
#[post("/register")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    let (username, password) = register_data.credentials()?;
    register_data.validate()?;

    let password_hash = hash_password(password);

    let result = sqlx::query("INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind(&password_hash)
        .bind(Utc::now())
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "registration successful"
        }))),
        Err(err) if is_unique_violation(&err) => {
            Err(AppError::Conflict("username already exists".into()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Login user
///
/// Matches username and password hash by equality. A wrong password and an
/// unknown username produce the same message so callers cannot probe which
/// usernames exist.
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let (username, password) = login_data.credentials()?;

    let password_hash = hash_password(password);

    let user: Option<User> = sqlx::query_as(
        "SELECT id, username, created_at FROM users WHERE username = ? AND password_hash = ?",
    )
    .bind(username)
    .bind(&password_hash)
    .fetch_optional(pool.get_ref())
    .await?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "user_id": user.id,
            "username": user.username
        }))),
        None => Ok(HttpResponse::Ok().json(json!({
            "success": false,
            "message": "invalid username or password"
        }))),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

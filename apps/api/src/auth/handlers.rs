use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_strength, verify_password};
use crate::errors::AppError;
use crate::models::user::{UserRow, UserView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Name, email and password are required".into(),
        ));
    }
    if req.password != req.confirm_password {
        return Err(AppError::Validation("Passwords do not match".into()));
    }
    validate_strength(&req.password).map_err(|msg| AppError::Validation(msg.into()))?;

    if UserRow::fetch_optional(&state.db, &req.email).await?.is_some() {
        return Err(AppError::Validation("User already exists".into()));
    }

    let password_hash = hash_password(&req.password)?;
    let user: UserRow = sqlx::query_as(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&req.email)
    .bind(&req.name)
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// POST /api/v1/auth/login — verifies credentials and returns the user
/// view. Session issuance is the caller's concern.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserView>, AppError> {
    let user = UserRow::fetch_optional(&state.db, &req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;
    if !verify_password(&req.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }
    Ok(Json(UserView::from(&user)))
}

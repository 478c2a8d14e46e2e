use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;

/// A signed-up user. Email is the unique lookup key; the roadmap document
/// and the cached overall progress live directly on the row.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub is_admin: bool,
    pub goal: Option<String>,
    pub skills: Vec<String>,
    pub roadmap: Option<Value>,
    pub progress_pct: i32,
}

impl UserRow {
    pub async fn fetch_by_email(pool: &PgPool, email: &str) -> Result<Self, AppError> {
        Self::fetch_optional(pool, email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with email {email}")))
    }

    pub async fn fetch_optional(pool: &PgPool, email: &str) -> Result<Option<Self>, AppError> {
        let user = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }
}

/// User shape returned to clients — everything except the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_admin: bool,
    pub goal: Option<String>,
    pub skills: Vec<String>,
    pub progress_pct: i32,
}

impl From<&UserRow> for UserView {
    fn from(row: &UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email.clone(),
            name: row.name.clone(),
            created_at: row.created_at,
            is_admin: row.is_admin,
            goal: row.goal.clone(),
            skills: row.skills.clone(),
            progress_pct: row.progress_pct,
        }
    }
}

/// One exchange in a user's running conversation log.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ConversationEntryRow {
    pub id: Uuid,
    pub user_email: String,
    pub input: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

/// Query parameter carrying the already-authenticated caller identity.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

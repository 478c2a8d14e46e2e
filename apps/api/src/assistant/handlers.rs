use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::assistant::prompts::QUICK_SYSTEM;
use crate::errors::AppError;
use crate::models::user::{ConversationEntryRow, EmailQuery, UserRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuickRequest {
    pub email: String,
    pub query: String,
}

/// POST /api/v1/assistant/quick — one-shot question. Every exchange is
/// appended to the user's conversation log.
pub async fn handle_quick(
    State(state): State<AppState>,
    Json(req): Json<QuickRequest>,
) -> Result<Json<ConversationEntryRow>, AppError> {
    if req.query.trim().is_empty() {
        return Err(AppError::Validation("Query is required".into()));
    }
    let user = UserRow::fetch_by_email(&state.db, &req.email).await?;

    let response = state.llm.call(QUICK_SYSTEM, &req.query).await?;

    let entry: ConversationEntryRow = sqlx::query_as(
        "INSERT INTO conversation_log (user_email, input, response) \
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&user.email)
    .bind(&req.query)
    .bind(&response)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

/// GET /api/v1/assistant/history — newest first.
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<Vec<ConversationEntryRow>>, AppError> {
    let entries: Vec<ConversationEntryRow> = sqlx::query_as(
        "SELECT * FROM conversation_log WHERE user_email = $1 ORDER BY created_at DESC LIMIT 50",
    )
    .bind(&params.email)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(entries))
}

//! Admin dashboard aggregates.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models::user::{EmailQuery, UserRow};
use crate::state::AppState;

#[derive(Debug, Serialize, FromRow)]
pub struct GoalCount {
    pub goal: String,
    pub count: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct SkillCount {
    pub skill: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_roadmaps: i64,
    pub top_goals: Vec<GoalCount>,
    pub top_skills: Vec<SkillCount>,
}

/// GET /api/v1/admin/stats — caller must be an admin.
pub async fn handle_stats(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let caller = UserRow::fetch_by_email(&state.db, &params.email).await?;
    if !caller.is_admin {
        return Err(AppError::Forbidden);
    }

    let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&state.db)
        .await?;
    let total_roadmaps: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roadmap_snapshots")
        .fetch_one(&state.db)
        .await?;

    let top_goals: Vec<GoalCount> = sqlx::query_as(
        "SELECT goal, COUNT(*) AS count FROM users WHERE goal IS NOT NULL \
         GROUP BY goal ORDER BY count DESC LIMIT 10",
    )
    .fetch_all(&state.db)
    .await?;

    let top_skills: Vec<SkillCount> = sqlx::query_as(
        "SELECT s AS skill, COUNT(*) AS count FROM users, unnest(skills) AS s \
         GROUP BY s ORDER BY count DESC LIMIT 20",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(StatsResponse {
        total_users,
        total_roadmaps,
        top_goals,
        top_skills,
    }))
}

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::roadmap::DailyPlanRow;
use crate::models::user::{EmailQuery, UserRow};
use crate::planner::prompts::{DAILY_PLAN_PROMPT_TEMPLATE, DAILY_PLAN_SYSTEM};
use crate::planner::schedule::{pack_schedule, VideoEntry, ViewingSchedule};
use crate::roadmap::ingest::parse_lenient;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DailyPlanRequest {
    pub email: String,
    pub start_date: Option<NaiveDate>,
    #[serde(default = "default_hours")]
    pub hours_per_day: u32,
}

fn default_hours() -> u32 {
    2
}

#[derive(Debug, Serialize)]
pub struct DailyPlanResponse {
    pub plan: Value,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub videos: Vec<VideoEntry>,
    pub daily_minutes: u32,
}

/// POST /api/v1/planner/daily — generates a day-wise plan over the stored
/// roadmap and upserts it, one plan per user.
pub async fn handle_generate_daily_plan(
    State(state): State<AppState>,
    Json(req): Json<DailyPlanRequest>,
) -> Result<Json<DailyPlanResponse>, AppError> {
    let user = UserRow::fetch_by_email(&state.db, &req.email).await?;
    let roadmap = user
        .roadmap
        .ok_or_else(|| AppError::NotFound(format!("No roadmap for {}", user.email)))?;

    let start_date = req
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive())
        .to_string();
    let prompt = DAILY_PLAN_PROMPT_TEMPLATE
        .replace("{start_date}", &start_date)
        .replace("{hours_per_day}", &req.hours_per_day.to_string())
        .replace("{roadmap_json}", &roadmap.to_string());

    let raw = state.llm.call(DAILY_PLAN_SYSTEM, &prompt).await?;
    let plan = parse_lenient(&raw)?;

    sqlx::query(
        "INSERT INTO daily_plans (user_email, plan) VALUES ($1, $2) \
         ON CONFLICT (user_email) DO UPDATE SET plan = $2, updated_at = now()",
    )
    .bind(&user.email)
    .bind(&plan)
    .execute(&state.db)
    .await?;

    Ok(Json(DailyPlanResponse { plan }))
}

/// GET /api/v1/planner/daily
pub async fn handle_get_daily_plan(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<DailyPlanResponse>, AppError> {
    let row: Option<DailyPlanRow> =
        sqlx::query_as("SELECT * FROM daily_plans WHERE user_email = $1")
            .bind(&params.email)
            .fetch_optional(&state.db)
            .await?;
    let plan = row
        .map(|r| r.plan)
        .ok_or_else(|| AppError::NotFound(format!("No daily plan for {}", params.email)))?;
    Ok(Json(DailyPlanResponse { plan }))
}

/// POST /api/v1/planner/schedule — pure computation, nothing persisted.
pub async fn handle_schedule(
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<ViewingSchedule>, AppError> {
    if req.daily_minutes == 0 {
        return Err(AppError::Validation(
            "daily_minutes must be at least 1".into(),
        ));
    }
    Ok(Json(pack_schedule(&req.videos, req.daily_minutes)))
}

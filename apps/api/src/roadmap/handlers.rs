use anyhow::Context;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::roadmap::RoadmapSnapshotRow;
use crate::models::user::{EmailQuery, UserRow};
use crate::roadmap::generator::GenerateParams;
use crate::roadmap::ingest::{ingest, ingest_value};
use crate::roadmap::model::Roadmap;
use crate::roadmap::progress::{compute_progress, ProgressReport};
use crate::roadmap::update::TaskMutation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    pub email: String,
    pub goal: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_hours")]
    pub hours_per_day: u32,
    #[serde(default = "default_months")]
    pub duration_months: u32,
    #[serde(default = "default_weekends")]
    pub include_weekends: bool,
}

fn default_hours() -> u32 {
    2
}

fn default_months() -> u32 {
    3
}

fn default_weekends() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
    pub progress: ProgressReport,
}

#[derive(Debug, Deserialize)]
pub struct SaveRoadmapRequest {
    pub email: String,
    pub roadmap: Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub email: String,
    pub container_index: usize,
    pub task_index: usize,
    pub done: Option<bool>,
    pub resource: Option<String>,
}

/// POST /api/v1/roadmap/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if req.goal.trim().is_empty() {
        return Err(AppError::Validation("Goal is required".into()));
    }
    let user = UserRow::fetch_by_email(&state.db, &req.email).await?;

    let params = GenerateParams {
        goal: req.goal.clone(),
        skills: req.skills.clone(),
        hours_per_day: req.hours_per_day,
        duration_months: req.duration_months,
        include_weekends: req.include_weekends,
    };
    let raw = state.generator.generate_roadmap(&params).await?;
    let roadmap = ingest(&raw)?;
    let progress = compute_progress(&roadmap);

    let doc = to_document(&roadmap)?;
    sqlx::query(
        "UPDATE users SET goal = $1, skills = $2, roadmap = $3, progress_pct = $4 WHERE email = $5",
    )
    .bind(&req.goal)
    .bind(&req.skills)
    .bind(&doc)
    .bind(progress.overall_progress as i32)
    .bind(&user.email)
    .execute(&state.db)
    .await?;
    insert_snapshot(&state.db, &user.email, &doc).await?;

    Ok(Json(RoadmapResponse { roadmap, progress }))
}

/// GET /api/v1/roadmap
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let user = UserRow::fetch_by_email(&state.db, &params.email).await?;
    let roadmap = roadmap_from_row(&user)?;
    let progress = compute_progress(&roadmap);
    Ok(Json(RoadmapResponse { roadmap, progress }))
}

/// PUT /api/v1/roadmap — saves a client-edited roadmap. The body is
/// re-normalized through ingest so legacy shapes never reach storage.
pub async fn handle_save_roadmap(
    State(state): State<AppState>,
    Json(req): Json<SaveRoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let user = UserRow::fetch_by_email(&state.db, &req.email).await?;
    let roadmap = ingest_value(req.roadmap)?;
    let progress = compute_progress(&roadmap);

    let doc = to_document(&roadmap)?;
    persist_document(&state.db, &user.email, &doc, &progress).await?;
    insert_snapshot(&state.db, &user.email, &doc).await?;

    Ok(Json(RoadmapResponse { roadmap, progress }))
}

/// PATCH /api/v1/roadmap/task — read-modify-write of one task.
/// A `resource` in the body takes precedence over `done`.
pub async fn handle_update_task(
    State(state): State<AppState>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<ProgressReport>, AppError> {
    let user = UserRow::fetch_by_email(&state.db, &req.email).await?;
    let mut roadmap = roadmap_from_row(&user)?;

    TaskMutation::from_request(req.done, req.resource)
        .ok_or_else(|| AppError::Validation("Either 'done' or 'resource' is required".into()))?
        .apply(&mut roadmap, req.container_index, req.task_index)?;

    let progress = compute_progress(&roadmap);
    let doc = to_document(&roadmap)?;
    persist_document(&state.db, &user.email, &doc, &progress).await?;

    Ok(Json(progress))
}

/// GET /api/v1/roadmap/history — snapshot trail, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<Vec<RoadmapSnapshotRow>>, AppError> {
    let snapshots: Vec<RoadmapSnapshotRow> = sqlx::query_as(
        "SELECT * FROM roadmap_snapshots WHERE user_email = $1 \
         ORDER BY created_at DESC LIMIT 20",
    )
    .bind(&params.email)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(snapshots))
}

/// GET /api/v1/roadmap/progress — zeros when no roadmap exists yet.
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<ProgressReport>, AppError> {
    let user = UserRow::fetch_by_email(&state.db, &params.email).await?;
    let report = match &user.roadmap {
        Some(doc) => compute_progress(&ingest_value(doc.clone())?),
        None => ProgressReport {
            overall_progress: 0,
            per_container_progress: Vec::new(),
        },
    };
    Ok(Json(report))
}

fn roadmap_from_row(user: &UserRow) -> Result<Roadmap, AppError> {
    let doc = user
        .roadmap
        .clone()
        .ok_or_else(|| AppError::NotFound(format!("No roadmap for {}", user.email)))?;
    Ok(ingest_value(doc)?)
}

fn to_document(roadmap: &Roadmap) -> Result<Value, AppError> {
    Ok(serde_json::to_value(roadmap).context("Failed to serialize roadmap document")?)
}

async fn persist_document(
    pool: &PgPool,
    email: &str,
    doc: &Value,
    progress: &ProgressReport,
) -> Result<(), AppError> {
    sqlx::query("UPDATE users SET roadmap = $1, progress_pct = $2 WHERE email = $3")
        .bind(doc)
        .bind(progress.overall_progress as i32)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(())
}

async fn insert_snapshot(pool: &PgPool, email: &str, doc: &Value) -> Result<(), AppError> {
    sqlx::query("INSERT INTO roadmap_snapshots (user_email, roadmap) VALUES ($1, $2)")
        .bind(email)
        .bind(doc)
        .execute(pool)
        .await?;
    Ok(())
}

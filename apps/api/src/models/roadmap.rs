use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only history of generated and saved roadmaps, one row per
/// generate/save. The live document stays on the user row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RoadmapSnapshotRow {
    pub id: Uuid,
    pub user_email: String,
    pub roadmap: Value,
    pub created_at: DateTime<Utc>,
}

/// One day-wise plan per user, upserted on regeneration.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyPlanRow {
    pub user_email: String,
    pub plan: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

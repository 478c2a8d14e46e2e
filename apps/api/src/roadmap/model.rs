//! Canonical roadmap document shape.
//!
//! Generated roadmaps historically arrived in two shapes — milestone-based
//! (`milestones: [{title, description, duration_weeks, tasks}]`) and
//! week-based (`weeks: [{title, tasks, resources, weekend_challenge}]`).
//! Both are normalized into the tagged `Container` type at the ingest
//! boundary; nothing downstream branches on the legacy shape.

use serde::{Deserialize, Serialize};

/// A structured learning plan for one goal, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default)]
    pub goal: String,
    pub containers: Vec<Container>,
}

/// A milestone or week — an ordered grouping of tasks.
///
/// Task identity within a roadmap is positional: (container index, task
/// index). Indices are stable only as long as no task is inserted or
/// removed; the update protocol never reorders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub label: String,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    #[serde(default)]
    pub meta: ContainerMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_challenge: Option<String>,
}

/// The atomic unit of a roadmap. A task is either pending or done; there
/// are no other states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    /// Resources the user attached to this task. Appended in arrival order,
    /// duplicates included.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_resources: Vec<String>,
}

impl TaskItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
            user_resources: Vec::new(),
        }
    }
}

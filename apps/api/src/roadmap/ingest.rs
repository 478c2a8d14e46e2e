//! Ingest — converts untrusted roadmap-generation output into a validated
//! `Roadmap`.
//!
//! Models routinely wrap their JSON in commentary or markdown fences, so
//! parsing is lenient: try the whole payload first, then fall back to the
//! first balanced `{...}` or `[...]` substring. Everything here is a pure
//! transform; persistence belongs to the caller.

use serde_json::Value;
use thiserror::Error;

use crate::roadmap::model::{Container, ContainerMeta, Roadmap, TaskItem};

#[derive(Debug, Error, PartialEq)]
pub enum IngestError {
    #[error("generation output contained no parsable JSON")]
    Unparsable,

    #[error("parsed JSON has neither a 'milestones' nor a 'weeks' sequence")]
    MissingStructure,
}

/// Parses raw generation output into a normalized `Roadmap`.
pub fn ingest(raw: &str) -> Result<Roadmap, IngestError> {
    ingest_value(parse_lenient(raw)?)
}

/// Parses text that should contain a JSON document, tolerating surrounding
/// commentary and code fences.
pub fn parse_lenient(raw: &str) -> Result<Value, IngestError> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Ok(value);
    }
    extract_balanced_json(raw)
        .and_then(|candidate| serde_json::from_str(candidate).ok())
        .ok_or(IngestError::Unparsable)
}

/// Normalizes an already-parsed JSON document into the canonical shape.
/// Accepts both legacy container keys (`milestones`, `weeks`) and the
/// canonical `containers` form used for persisted documents.
pub fn ingest_value(value: Value) -> Result<Roadmap, IngestError> {
    let value = unwrap_roadmap_envelope(value);

    // Round-trip of a document we wrote ourselves.
    if value.get("containers").is_some() {
        if let Ok(roadmap) = serde_json::from_value::<Roadmap>(value.clone()) {
            return Ok(roadmap);
        }
    }

    let goal = value
        .get("goal")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if let Some(milestones) = value.get("milestones").and_then(Value::as_array) {
        let containers = milestones
            .iter()
            .enumerate()
            .map(|(i, m)| milestone_container(i, m))
            .collect();
        return Ok(Roadmap { goal, containers });
    }

    if let Some(weeks) = value.get("weeks").and_then(Value::as_array) {
        let containers = weeks
            .iter()
            .enumerate()
            .map(|(i, w)| week_container(i, w))
            .collect();
        return Ok(Roadmap { goal, containers });
    }

    Err(IngestError::MissingStructure)
}

/// Generation output sometimes nests the plan under a top-level "roadmap"
/// key next to analysis sections; unwrap it when the outer object carries
/// no container sequence of its own.
fn unwrap_roadmap_envelope(value: Value) -> Value {
    let has_containers = ["milestones", "weeks", "containers"]
        .iter()
        .any(|k| value.get(k).is_some());
    if has_containers {
        return value;
    }
    match value.get("roadmap") {
        Some(inner) if inner.is_object() => inner.clone(),
        _ => value,
    }
}

fn milestone_container(index: usize, value: &Value) -> Container {
    Container {
        label: container_label(value, "Milestone", index),
        tasks: normalize_tasks(value.get("tasks")),
        meta: ContainerMeta {
            description: value
                .get("description")
                .and_then(Value::as_str)
                .map(String::from),
            duration_weeks: value
                .get("duration_weeks")
                .and_then(Value::as_u64)
                .map(|w| w as u32),
            resources: string_list(value.get("resources")),
            weekend_challenge: None,
        },
    }
}

fn week_container(index: usize, value: &Value) -> Container {
    Container {
        label: container_label(value, "Week", index),
        tasks: normalize_tasks(value.get("tasks")),
        meta: ContainerMeta {
            description: None,
            duration_weeks: None,
            resources: string_list(value.get("resources")),
            weekend_challenge: value
                .get("weekend_challenge")
                .and_then(Value::as_str)
                .map(String::from),
        },
    }
}

fn container_label(value: &Value, kind: &str, index: usize) -> String {
    value
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("{kind} {}", index + 1))
}

/// Tasks arrive either as bare strings or as objects with `title`, an
/// optional `done` flag (defaults to pending), and optional attached
/// resources. Entries with no usable title are dropped.
fn normalize_tasks(value: Option<&Value>) -> Vec<TaskItem> {
    let Some(tasks) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    tasks.iter().filter_map(normalize_task).collect()
}

fn normalize_task(value: &Value) -> Option<TaskItem> {
    if let Some(title) = value.as_str() {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        return Some(TaskItem::new(title));
    }
    let title = value.get("title").and_then(Value::as_str)?.trim();
    if title.is_empty() {
        return None;
    }
    Some(TaskItem {
        title: title.to_string(),
        done: value.get("done").and_then(Value::as_bool).unwrap_or(false),
        user_resources: string_list(value.get("user_resources")),
    })
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Returns the first balanced `{...}` or `[...]` substring, tracking string
/// literals and escapes so braces inside task titles don't break matching.
fn extract_balanced_json(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|&b| b == b'{' || b == b'[')?;
    let open = bytes[start];
    let close = if open == b'{' { b'}' } else { b']' };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            _ if b == open => depth += 1,
            _ if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_week_shape() {
        let raw = r#"{"weeks":[{"title":"W1","tasks":[{"title":"Learn X","done":false}]}]}"#;
        let roadmap = ingest(raw).unwrap();
        assert_eq!(roadmap.containers.len(), 1);
        assert_eq!(roadmap.containers[0].label, "W1");
        assert_eq!(roadmap.containers[0].tasks.len(), 1);
        assert_eq!(roadmap.containers[0].tasks[0].title, "Learn X");
        assert!(!roadmap.containers[0].tasks[0].done);
    }

    #[test]
    fn test_ingest_milestone_shape_with_string_tasks() {
        let raw = r#"{
            "goal": "Data Engineer",
            "milestones": [
                {"title": "Foundations", "description": "SQL basics",
                 "duration_weeks": 4, "tasks": ["Learn SQL", "Model a schema"]}
            ]
        }"#;
        let roadmap = ingest(raw).unwrap();
        assert_eq!(roadmap.goal, "Data Engineer");
        let c = &roadmap.containers[0];
        assert_eq!(c.meta.duration_weeks, Some(4));
        assert_eq!(c.meta.description.as_deref(), Some("SQL basics"));
        assert_eq!(c.tasks.len(), 2);
        assert_eq!(c.tasks[0].title, "Learn SQL");
        assert!(!c.tasks[1].done);
    }

    #[test]
    fn test_ingest_extracts_fenced_json_from_commentary() {
        let raw = "Here you go:\n```json\n{\"milestones\":[]}\n```";
        let roadmap = ingest(raw).unwrap();
        assert!(roadmap.containers.is_empty());
    }

    #[test]
    fn test_ingest_garbage_is_unparsable() {
        assert_eq!(ingest("not json at all"), Err(IngestError::Unparsable));
    }

    #[test]
    fn test_ingest_json_without_containers_is_missing_structure() {
        assert_eq!(
            ingest(r#"{"goal":"AI Engineer"}"#),
            Err(IngestError::MissingStructure)
        );
    }

    #[test]
    fn test_ingest_unwraps_roadmap_envelope() {
        let raw = r#"{
            "analysis": {"interpretation": "solid basics"},
            "roadmap": {"milestones": [{"title": "M1", "tasks": ["T1"]}]}
        }"#;
        let roadmap = ingest(raw).unwrap();
        assert_eq!(roadmap.containers[0].label, "M1");
        assert_eq!(roadmap.containers[0].tasks[0].title, "T1");
    }

    #[test]
    fn test_ingest_week_metadata() {
        let raw = r#"{"weeks":[{"title":"W1","tasks":[],
            "resources":["course A"],"weekend_challenge":"Build a CLI"}]}"#;
        let roadmap = ingest(raw).unwrap();
        let meta = &roadmap.containers[0].meta;
        assert_eq!(meta.resources, vec!["course A"]);
        assert_eq!(meta.weekend_challenge.as_deref(), Some("Build a CLI"));
    }

    #[test]
    fn test_missing_labels_and_titleless_tasks() {
        let raw = r#"{"milestones":[{"tasks":[{"done":true},{"title":"Keep me"}]}]}"#;
        let roadmap = ingest(raw).unwrap();
        assert_eq!(roadmap.containers[0].label, "Milestone 1");
        // the titleless task is dropped
        assert_eq!(roadmap.containers[0].tasks.len(), 1);
        assert_eq!(roadmap.containers[0].tasks[0].title, "Keep me");
    }

    #[test]
    fn test_canonical_shape_round_trips() {
        let raw = r#"{"milestones":[{"title":"M1","tasks":[{"title":"T1","done":true}]}]}"#;
        let roadmap = ingest(raw).unwrap();
        let value = serde_json::to_value(&roadmap).unwrap();
        assert_eq!(ingest_value(value).unwrap(), roadmap);
    }

    #[test]
    fn test_balanced_extraction_ignores_braces_in_strings() {
        let raw = r#"Note {unbalanced: {"weeks":[{"title":"a } b","tasks":[]}]}"#;
        // first '{' opens commentary; extraction still finds a balanced object
        let value = parse_lenient(raw);
        // the leading '{' is unbalanced, so the whole text is unparsable
        assert_eq!(value, Err(IngestError::Unparsable));

        let clean = r#"prefix {"weeks":[{"title":"a } b","tasks":[]}]} suffix"#;
        let roadmap = ingest(clean).unwrap();
        assert_eq!(roadmap.containers[0].label, "a } b");
    }
}

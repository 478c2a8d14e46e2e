//! Task-level mutations. Tasks are addressed by (container index, task
//! index); a stale reference is a caller error, never a panic.

use thiserror::Error;

use crate::roadmap::model::{Roadmap, TaskItem};

#[derive(Debug, Error, PartialEq)]
pub enum UpdateError {
    #[error("no task at container {container}, task {task}")]
    IndexOutOfRange { container: usize, task: usize },
}

/// A single task-update request resolved to the one mutation it performs.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskMutation {
    SetDone(bool),
    AttachResource(String),
}

impl TaskMutation {
    /// Resolves a request body carrying `done`, `resource`, or both.
    /// An attached resource takes precedence over a completion toggle;
    /// neither field present is a caller error (`None`).
    pub fn from_request(done: Option<bool>, resource: Option<String>) -> Option<Self> {
        if let Some(resource) = resource {
            return Some(TaskMutation::AttachResource(resource));
        }
        done.map(TaskMutation::SetDone)
    }

    pub fn apply(
        self,
        roadmap: &mut Roadmap,
        container: usize,
        task: usize,
    ) -> Result<(), UpdateError> {
        match self {
            TaskMutation::SetDone(done) => set_task_done(roadmap, container, task, done),
            TaskMutation::AttachResource(resource) => {
                attach_resource(roadmap, container, task, resource)
            }
        }
    }
}

/// Sets a task's completion flag. Idempotent.
pub fn set_task_done(
    roadmap: &mut Roadmap,
    container: usize,
    task: usize,
    done: bool,
) -> Result<(), UpdateError> {
    task_mut(roadmap, container, task)?.done = done;
    Ok(())
}

/// Appends a resource to a task's resource list. Repeated identical
/// resources accumulate; nothing deduplicates here.
pub fn attach_resource(
    roadmap: &mut Roadmap,
    container: usize,
    task: usize,
    resource: String,
) -> Result<(), UpdateError> {
    task_mut(roadmap, container, task)?
        .user_resources
        .push(resource);
    Ok(())
}

fn task_mut(
    roadmap: &mut Roadmap,
    container: usize,
    task: usize,
) -> Result<&mut TaskItem, UpdateError> {
    roadmap
        .containers
        .get_mut(container)
        .and_then(|c| c.tasks.get_mut(task))
        .ok_or(UpdateError::IndexOutOfRange { container, task })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::ingest::ingest;

    fn sample() -> Roadmap {
        ingest(
            r#"{"milestones":[
                {"title":"M1","tasks":["A","B"]},
                {"title":"M2","tasks":["C"]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_set_task_done_flips_flag() {
        let mut roadmap = sample();
        set_task_done(&mut roadmap, 0, 1, true).unwrap();
        assert!(roadmap.containers[0].tasks[1].done);
        set_task_done(&mut roadmap, 0, 1, false).unwrap();
        assert!(!roadmap.containers[0].tasks[1].done);
    }

    #[test]
    fn test_set_task_done_is_idempotent() {
        let mut roadmap = sample();
        set_task_done(&mut roadmap, 1, 0, true).unwrap();
        let once = roadmap.clone();
        set_task_done(&mut roadmap, 1, 0, true).unwrap();
        assert_eq!(roadmap, once);
    }

    #[test]
    fn test_out_of_range_container_leaves_input_unmutated() {
        let mut roadmap = sample();
        let before = roadmap.clone();
        assert_eq!(
            set_task_done(&mut roadmap, 2, 0, true),
            Err(UpdateError::IndexOutOfRange {
                container: 2,
                task: 0
            })
        );
        assert_eq!(roadmap, before);
    }

    #[test]
    fn test_out_of_range_task_leaves_input_unmutated() {
        let mut roadmap = sample();
        let before = roadmap.clone();
        assert_eq!(
            attach_resource(&mut roadmap, 1, 5, "link".into()),
            Err(UpdateError::IndexOutOfRange {
                container: 1,
                task: 5
            })
        );
        assert_eq!(roadmap, before);
    }

    #[test]
    fn test_mutation_resource_wins_over_done() {
        let mut roadmap = sample();
        let mutation = TaskMutation::from_request(Some(true), Some("https://a".into())).unwrap();
        assert_eq!(
            mutation,
            TaskMutation::AttachResource("https://a".into())
        );
        mutation.apply(&mut roadmap, 0, 0).unwrap();
        // the resource is attached and the completion flag is untouched
        assert_eq!(roadmap.containers[0].tasks[0].user_resources, vec!["https://a"]);
        assert!(!roadmap.containers[0].tasks[0].done);
    }

    #[test]
    fn test_mutation_done_alone_toggles() {
        let mut roadmap = sample();
        TaskMutation::from_request(Some(true), None)
            .unwrap()
            .apply(&mut roadmap, 0, 0)
            .unwrap();
        assert!(roadmap.containers[0].tasks[0].done);
    }

    #[test]
    fn test_mutation_requires_done_or_resource() {
        assert_eq!(TaskMutation::from_request(None, None), None);
    }

    #[test]
    fn test_attach_resource_accumulates_duplicates() {
        let mut roadmap = sample();
        attach_resource(&mut roadmap, 0, 0, "https://a".into()).unwrap();
        attach_resource(&mut roadmap, 0, 0, "https://a".into()).unwrap();
        assert_eq!(
            roadmap.containers[0].tasks[0].user_resources,
            vec!["https://a", "https://a"]
        );
    }
}

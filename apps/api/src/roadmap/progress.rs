//! Progress metrics derived from a roadmap.
//!
//! Percentages are always recomputed wholesale after a mutation — never
//! patched incrementally — so the cached value on the user row cannot
//! drift from the document.

use serde::{Deserialize, Serialize};

use crate::roadmap::model::Roadmap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub overall_progress: u8,
    pub per_container_progress: Vec<u8>,
}

/// Computes per-container and overall completion percentages.
/// Empty roadmaps and empty containers count as 0%, not a division error.
pub fn compute_progress(roadmap: &Roadmap) -> ProgressReport {
    let mut total = 0usize;
    let mut done = 0usize;
    let per_container_progress = roadmap
        .containers
        .iter()
        .map(|c| {
            let container_total = c.tasks.len();
            let container_done = c.tasks.iter().filter(|t| t.done).count();
            total += container_total;
            done += container_done;
            percent(container_done, container_total)
        })
        .collect();

    ProgressReport {
        overall_progress: percent(done, total),
        per_container_progress,
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * done as f64 / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::ingest::ingest;
    use crate::roadmap::update::set_task_done;

    #[test]
    fn test_empty_roadmap_is_zero() {
        let roadmap = Roadmap {
            goal: String::new(),
            containers: Vec::new(),
        };
        let report = compute_progress(&roadmap);
        assert_eq!(report.overall_progress, 0);
        assert!(report.per_container_progress.is_empty());
    }

    #[test]
    fn test_container_with_no_tasks_is_zero() {
        let roadmap = ingest(r#"{"weeks":[{"title":"W1","tasks":[]}]}"#).unwrap();
        let report = compute_progress(&roadmap);
        assert_eq!(report.overall_progress, 0);
        assert_eq!(report.per_container_progress, vec![0]);
    }

    #[test]
    fn test_all_done_is_one_hundred() {
        let roadmap = ingest(
            r#"{"milestones":[
                {"title":"M1","tasks":[{"title":"A","done":true},{"title":"B","done":true}]},
                {"title":"M2","tasks":[{"title":"C","done":true}]}
            ]}"#,
        )
        .unwrap();
        let report = compute_progress(&roadmap);
        assert_eq!(report.overall_progress, 100);
        assert_eq!(report.per_container_progress, vec![100, 100]);
    }

    #[test]
    fn test_percentages_stay_in_bounds() {
        let roadmap = ingest(
            r#"{"milestones":[
                {"title":"M1","tasks":[{"title":"A","done":true},{"title":"B"},{"title":"C"}]},
                {"title":"M2","tasks":[]},
                {"title":"M3","tasks":[{"title":"D","done":true}]}
            ]}"#,
        )
        .unwrap();
        let report = compute_progress(&roadmap);
        assert!(report.overall_progress <= 100);
        assert!(report.per_container_progress.iter().all(|&p| p <= 100));
        // 2 of 4 tasks done overall
        assert_eq!(report.overall_progress, 50);
        assert_eq!(report.per_container_progress, vec![33, 0, 100]);
    }

    #[test]
    fn test_one_of_four_after_single_toggle() {
        let mut roadmap = ingest(
            r#"{"milestones":[
                {"title":"M1","tasks":["A","B"]},
                {"title":"M2","tasks":["C","D"]}
            ]}"#,
        )
        .unwrap();
        set_task_done(&mut roadmap, 0, 0, true).unwrap();
        let report = compute_progress(&roadmap);
        assert_eq!(report.overall_progress, 25);
        assert_eq!(report.per_container_progress, vec![50, 0]);
    }
}

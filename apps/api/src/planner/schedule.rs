//! Playlist-to-schedule packing.
//!
//! Fetching playlist metadata is the caller's concern; this module only
//! turns an ordered list of videos plus a daily time budget into day
//! buckets. Order is preserved — a playlist is meant to be watched in
//! sequence, so no bin-packing optimization applies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct VideoEntry {
    pub title: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct ViewingSchedule {
    pub days: Vec<Vec<String>>,
    pub total_minutes: u32,
}

/// Greedily fills each day up to `daily_minutes`, starting a new day when
/// the next video doesn't fit. A video longer than the daily budget gets a
/// day of its own rather than being split.
pub fn pack_schedule(videos: &[VideoEntry], daily_minutes: u32) -> ViewingSchedule {
    let mut days: Vec<Vec<String>> = Vec::new();
    let mut current_day: Vec<String> = Vec::new();
    let mut time_left = daily_minutes as i64;
    let mut total_minutes = 0u32;

    for video in videos {
        // durations come from untrusted JSON; saturate rather than overflow
        total_minutes = total_minutes.saturating_add(video.duration_minutes);
        let entry = format!("{} ({} min)", video.title, video.duration_minutes);
        if i64::from(video.duration_minutes) <= time_left {
            current_day.push(entry);
            time_left -= i64::from(video.duration_minutes);
        } else {
            if !current_day.is_empty() {
                days.push(current_day);
            }
            current_day = vec![entry];
            time_left = i64::from(daily_minutes) - i64::from(video.duration_minutes);
        }
    }
    if !current_day.is_empty() {
        days.push(current_day);
    }

    ViewingSchedule {
        days,
        total_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str, minutes: u32) -> VideoEntry {
        VideoEntry {
            title: title.into(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_videos_fill_days_in_order() {
        let videos = [video("a", 30), video("b", 25), video("c", 20)];
        let schedule = pack_schedule(&videos, 60);
        assert_eq!(schedule.days.len(), 2);
        assert_eq!(schedule.days[0], vec!["a (30 min)", "b (25 min)"]);
        assert_eq!(schedule.days[1], vec!["c (20 min)"]);
        assert_eq!(schedule.total_minutes, 75);
    }

    #[test]
    fn test_oversize_video_gets_its_own_day() {
        let videos = [video("short", 10), video("marathon", 90), video("next", 10)];
        let schedule = pack_schedule(&videos, 60);
        assert_eq!(schedule.days.len(), 3);
        assert_eq!(schedule.days[1], vec!["marathon (90 min)"]);
        // the over-budget day leaves no room; the next video starts a new day
        assert_eq!(schedule.days[2], vec!["next (10 min)"]);
    }

    #[test]
    fn test_empty_playlist_is_empty_schedule() {
        let schedule = pack_schedule(&[], 60);
        assert!(schedule.days.is_empty());
        assert_eq!(schedule.total_minutes, 0);
    }

    #[test]
    fn test_absurd_durations_saturate_instead_of_overflowing() {
        let videos = [video("a", u32::MAX), video("b", u32::MAX), video("c", 5)];
        let schedule = pack_schedule(&videos, 60);
        assert_eq!(schedule.total_minutes, u32::MAX);
        assert_eq!(schedule.days.len(), 3);
    }

    #[test]
    fn test_exact_fit_does_not_spill() {
        let videos = [video("a", 30), video("b", 30), video("c", 1)];
        let schedule = pack_schedule(&videos, 60);
        assert_eq!(schedule.days.len(), 2);
        assert_eq!(schedule.days[0].len(), 2);
    }
}

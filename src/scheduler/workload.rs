//! Daily workload per worker.
//!
//! Summarizes how much of each workday a worker has booked. The result
//! feeds load heatmaps; mapping utilization to colors is left to the
//! renderer.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Booked minutes | Task time inside the workday window, by start date |
//! | Task count | Tasks starting on that date |
//! | Utilization | Booked minutes / workday span (may exceed 1.0 when tasks overlap) |

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::models::{Task, TimeWindow, WorkdayCalendar};

/// Load of one worker on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyLoad {
    /// Minutes booked inside the work window.
    pub booked_minutes: i64,
    /// Number of tasks starting on this date.
    pub task_count: usize,
    /// Fraction of the workday booked.
    pub utilization: f64,
}

/// Per-worker, per-date load summary.
#[derive(Debug, Clone, Default)]
pub struct WorkloadSummary {
    /// Load keyed by (worker ID, date).
    pub by_day: BTreeMap<(String, NaiveDate), DailyLoad>,
}

impl WorkloadSummary {
    /// Computes daily loads for all tasks.
    ///
    /// Each task counts toward the date it starts on. Time outside that
    /// date's work window is not counted.
    pub fn calculate(tasks: &[Task], calendar: &WorkdayCalendar) -> Self {
        let span_minutes = calendar.span().num_minutes();
        let mut by_day: BTreeMap<(String, NaiveDate), DailyLoad> = BTreeMap::new();

        for task in tasks {
            let date = task.start.date();
            let booked = overlap_duration(&task.window(), &calendar.window(date))
                .map(|d| d.num_minutes())
                .unwrap_or(0);

            let load = by_day
                .entry((task.employee_id.clone(), date))
                .or_insert(DailyLoad {
                    booked_minutes: 0,
                    task_count: 0,
                    utilization: 0.0,
                });
            load.booked_minutes += booked;
            load.task_count += 1;
        }

        if span_minutes > 0 {
            for load in by_day.values_mut() {
                load.utilization = load.booked_minutes as f64 / span_minutes as f64;
            }
        }

        Self { by_day }
    }

    /// Load for a worker on a date, if any task starts then.
    pub fn load_for(&self, employee_id: &str, date: NaiveDate) -> Option<&DailyLoad> {
        self.by_day.get(&(employee_id.to_string(), date))
    }

    /// Utilization for a worker on a date (0.0 when idle).
    pub fn utilization_for(&self, employee_id: &str, date: NaiveDate) -> f64 {
        self.load_for(employee_id, date)
            .map(|l| l.utilization)
            .unwrap_or(0.0)
    }

    /// The most loaded (worker, date), ties broken by key order.
    pub fn busiest(&self) -> Option<(&str, NaiveDate, &DailyLoad)> {
        let mut best: Option<(&(String, NaiveDate), &DailyLoad)> = None;
        for (key, load) in &self.by_day {
            match best {
                Some((_, b)) if b.booked_minutes >= load.booked_minutes => {}
                _ => best = Some((key, load)),
            }
        }
        best.map(|((worker, date), load)| (worker.as_str(), *date, load))
    }
}

/// Computes overlap duration between two time windows.
fn overlap_duration(a: &TimeWindow, b: &TimeWindow) -> Option<Duration> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    if end > start {
        Some(end - start)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_workload_basic() {
        let tasks = vec![
            Task::new("A", "E1", at(4, 9, 0), at(4, 12, 0)),
            Task::new("B", "E1", at(4, 13, 0), at(4, 14, 30)),
            Task::new("C", "E2", at(4, 9, 0), at(4, 18, 0)),
        ];
        let summary = WorkloadSummary::calculate(&tasks, &WorkdayCalendar::default());

        let e1 = summary.load_for("E1", date(4)).unwrap();
        assert_eq!(e1.booked_minutes, 270);
        assert_eq!(e1.task_count, 2);
        assert!((e1.utilization - 0.5).abs() < 1e-10); // 270 / 540

        assert!((summary.utilization_for("E2", date(4)) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_workload_clips_to_window() {
        let tasks = vec![Task::new("A", "E1", at(7, 8, 0), at(7, 10, 0))];
        let summary = WorkloadSummary::calculate(&tasks, &WorkdayCalendar::default());
        assert_eq!(summary.load_for("E1", date(7)).unwrap().booked_minutes, 60);
    }

    #[test]
    fn test_workload_idle_day() {
        let summary = WorkloadSummary::calculate(&[], &WorkdayCalendar::default());
        assert!(summary.load_for("E1", date(4)).is_none());
        assert!((summary.utilization_for("E1", date(4)) - 0.0).abs() < 1e-10);
        assert!(summary.busiest().is_none());
    }

    #[test]
    fn test_workload_overlap_exceeds_one() {
        let tasks = vec![
            Task::new("A", "E1", at(4, 9, 0), at(4, 18, 0)),
            Task::new("B", "E1", at(4, 9, 0), at(4, 13, 30)),
        ];
        let summary = WorkloadSummary::calculate(&tasks, &WorkdayCalendar::default());
        assert!((summary.utilization_for("E1", date(4)) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_busiest() {
        let tasks = vec![
            Task::new("A", "E1", at(4, 9, 0), at(4, 10, 0)),
            Task::new("B", "E2", at(5, 9, 0), at(5, 13, 0)),
            Task::new("C", "E1", at(6, 9, 0), at(6, 11, 0)),
        ];
        let summary = WorkloadSummary::calculate(&tasks, &WorkdayCalendar::default());
        let (worker, day, load) = summary.busiest().unwrap();
        assert_eq!(worker, "E2");
        assert_eq!(day, date(5));
        assert_eq!(load.booked_minutes, 240);
    }
}

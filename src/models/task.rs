//! Task (work assignment) model.
//!
//! A task is a time-bound assignment of one worker to one site. Timing is
//! authoritative in `start`/`end`; duration is always derived from them.
//! Lane fields are transient output of the layout pass.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeWindow;

/// Category of field work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// New equipment or fixture installation.
    #[default]
    Installation,
    /// Scheduled upkeep.
    Maintenance,
    /// Inspection or audit visit.
    Inspection,
    /// Corrective work on a fault.
    Repair,
    /// Delivery or pickup run.
    Delivery,
}

impl TaskType {
    /// All categories, in display order.
    pub const ALL: [TaskType; 5] = [
        TaskType::Installation,
        TaskType::Maintenance,
        TaskType::Inspection,
        TaskType::Repair,
        TaskType::Delivery,
    ];

    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Installation => "installation",
            TaskType::Maintenance => "maintenance",
            TaskType::Inspection => "inspection",
            TaskType::Repair => "repair",
            TaskType::Delivery => "delivery",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_max_parallel() -> usize {
    1
}

/// A scheduled work assignment.
///
/// # Lane Fields
/// `parallel_index` and `max_parallel` are recomputed on every layout pass
/// and carry no meaning outside the pass that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier. Immutable after creation.
    pub id: String,
    /// Assigned worker (lookup reference into the roster).
    pub employee_id: String,
    /// Site reference.
    pub site_id: String,
    /// Site display name (denormalized for rendering).
    pub site_name: String,
    /// Short description.
    pub title: String,
    /// Work category.
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Priority (lower = more urgent).
    pub priority: i32,
    /// Start (inclusive).
    pub start: NaiveDateTime,
    /// End (exclusive), strictly after `start`.
    pub end: NaiveDateTime,
    /// Lane within the worker's overlap cluster.
    #[serde(default)]
    pub parallel_index: usize,
    /// Lane count of the largest overlap cluster this task belongs to.
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,
}

impl Task {
    /// Creates a task for a worker over `[start, end)`.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            site_id: String::new(),
            site_name: String::new(),
            title: String::new(),
            task_type: TaskType::default(),
            priority: 0,
            start,
            end,
            parallel_index: 0,
            max_parallel: 1,
        }
    }

    /// Sets the site reference and its display name.
    pub fn with_site(mut self, site_id: impl Into<String>, site_name: impl Into<String>) -> Self {
        self.site_id = site_id.into();
        self.site_name = site_name.into();
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the work category.
    pub fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// `end - start`.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration().num_minutes() as f64 / 60.0
    }

    /// The task's interval as a window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Whether the half-open intervals of two tasks intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.window().overlaps(&other.window())
    }

    /// Whether `end` is strictly after `start`.
    pub fn has_valid_interval(&self) -> bool {
        self.end > self.start
    }

    /// Moves both ends by `delta`.
    pub fn shift_by(&mut self, delta: Duration) {
        self.start += delta;
        self.end += delta;
    }

    /// Moves the task to begin at `start`, keeping its duration.
    pub fn move_to(&mut self, start: NaiveDateTime) {
        let duration = self.duration();
        self.start = start;
        self.end = start + duration;
    }

    /// Resets lane fields to a single-lane layout.
    pub fn clear_lane(&mut self) {
        self.parallel_index = 0;
        self.max_parallel = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1", "E1", at(9, 0), at(11, 30))
            .with_site("S1", "North Depot")
            .with_title("Replace pump")
            .with_type(TaskType::Repair)
            .with_priority(1);

        assert_eq!(task.id, "T1");
        assert_eq!(task.employee_id, "E1");
        assert_eq!(task.site_id, "S1");
        assert_eq!(task.site_name, "North Depot");
        assert_eq!(task.title, "Replace pump");
        assert_eq!(task.task_type, TaskType::Repair);
        assert_eq!(task.priority, 1);
        assert_eq!(task.parallel_index, 0);
        assert_eq!(task.max_parallel, 1);
    }

    #[test]
    fn test_task_duration() {
        let task = Task::new("T1", "E1", at(9, 0), at(11, 30));
        assert_eq!(task.duration(), Duration::minutes(150));
        assert!((task.duration_hours() - 2.5).abs() < 1e-10);
        assert!(task.has_valid_interval());

        let bad = Task::new("T2", "E1", at(11, 0), at(11, 0));
        assert!(!bad.has_valid_interval());
    }

    #[test]
    fn test_shift_and_move_preserve_duration() {
        let mut task = Task::new("T1", "E1", at(9, 0), at(10, 15));
        task.shift_by(Duration::minutes(45));
        assert_eq!(task.start, at(9, 45));
        assert_eq!(task.end, at(11, 0));

        task.move_to(at(14, 0));
        assert_eq!(task.start, at(14, 0));
        assert_eq!(task.end, at(15, 15));
    }

    #[test]
    fn test_task_overlap() {
        let a = Task::new("A", "E1", at(9, 0), at(11, 0));
        let b = Task::new("B", "E1", at(10, 0), at(12, 0));
        let c = Task::new("C", "E1", at(11, 0), at(12, 0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_task_serde_shape() {
        let task = Task::new("T1", "E1", at(9, 0), at(10, 0)).with_type(TaskType::Inspection);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["employeeId"], "E1");
        assert_eq!(json["type"], "inspection");
        assert_eq!(json["maxParallel"], 1);

        let raw = r#"{
            "id": "T9", "employeeId": "E2", "siteId": "S1", "siteName": "Yard",
            "title": "Check", "type": "maintenance", "priority": 3,
            "start": "2024-03-04T09:00:00", "end": "2024-03-04T10:00:00"
        }"#;
        let parsed: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.task_type, TaskType::Maintenance);
        assert_eq!(parsed.parallel_index, 0);
        assert_eq!(parsed.max_parallel, 1);
        assert_eq!(parsed.duration(), Duration::hours(1));
    }

    #[test]
    fn test_task_type_labels() {
        assert_eq!(TaskType::ALL.len(), 5);
        assert_eq!(TaskType::Delivery.to_string(), "delivery");
    }
}

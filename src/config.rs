//! Board configuration.
//!
//! Loaded from JSON; every field is optional and falls back to the
//! built-in defaults (09:00-18:00 workday, priority 1 and below urgent).

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::WorkdayCalendar;

/// Default urgency threshold. Tasks with `priority <= 1` are urgent.
pub const DEFAULT_URGENT_PRIORITY: i32 = 1;

/// Settings for a [`ScheduleBoard`](crate::scheduler::ScheduleBoard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Daily work window.
    pub calendar: WorkdayCalendar,
    /// Tasks at or below this priority are resolved against the
    /// worker's other tasks when saved.
    pub urgent_priority: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            calendar: WorkdayCalendar::default(),
            urgent_priority: DEFAULT_URGENT_PRIORITY,
        }
    }
}

impl BoardConfig {
    /// Sets the workday calendar.
    pub fn with_calendar(mut self, calendar: WorkdayCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the urgency threshold.
    pub fn with_urgent_priority(mut self, priority: i32) -> Self {
        self.urgent_priority = priority;
        self
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Example
    /// ```
    /// use crew_schedule::config::BoardConfig;
    ///
    /// let config = BoardConfig::from_json(r#"{ "calendar": { "startHour": 8 } }"#).unwrap();
    /// assert_eq!(config.calendar.start_hour, 8);
    /// assert_eq!(config.calendar.end_hour, 18);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.calendar.validate().map_err(ScheduleError::Invalid)?;
        Ok(config)
    }

    /// Whether a task with this priority counts as urgent.
    pub fn is_urgent(&self, priority: i32) -> bool {
        priority <= self.urgent_priority
    }
}

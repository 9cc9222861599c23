//! Workday calendar and time window models.
//!
//! Defines the fixed daily work window (opening/closing hour) shared by
//! every worker, and the rollover rule applied when a shifted task no
//! longer fits before closing.
//!
//! # Time Model
//! All timestamps are local wall-clock `NaiveDateTime` values with minute
//! precision. The calendar carries no time zone; the consumer decides what
//! the wall clock means.
//!
//! # Closing Boundary
//! A task ending exactly at the closing instant fits the workday. Only an
//! end strictly after closing (on the start's calendar day) triggers rollover.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Default opening hour (09:00).
pub const DEFAULT_WORK_START_HOUR: u32 = 9;
/// Default closing hour (18:00).
pub const DEFAULT_WORK_END_HOUR: u32 = 18;

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Length of this window.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely inside this window.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// The daily work window policy.
///
/// Stateless apart from its two hours; every worker shares the same window.
/// Deserializes with defaults so a partial config only overrides what it names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkdayCalendar {
    /// Opening hour (0-23).
    pub start_hour: u32,
    /// Closing hour (1-24), strictly after `start_hour`.
    pub end_hour: u32,
}

impl Default for WorkdayCalendar {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_WORK_START_HOUR,
            end_hour: DEFAULT_WORK_END_HOUR,
        }
    }
}

impl WorkdayCalendar {
    /// Creates a calendar with custom hours. Call [`validate`](Self::validate)
    /// before use if the hours come from untrusted input.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Checks `start_hour < end_hour <= 24`.
    pub fn validate(&self) -> ValidationResult {
        if self.start_hour < self.end_hour && self.end_hour <= 24 {
            Ok(())
        } else {
            Err(vec![ValidationError::new(
                ValidationErrorKind::InvalidWorkday,
                format!(
                    "Workday {:02}:00-{:02}:00 is not a valid window",
                    self.start_hour, self.end_hour
                ),
            )])
        }
    }

    /// Length of one workday.
    pub fn span(&self) -> Duration {
        Duration::hours(i64::from(self.end_hour) - i64::from(self.start_hour))
    }

    /// Opening instant on `date`.
    pub fn opening(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(self.start_hour))
    }

    /// Closing instant on `date`.
    pub fn closing(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(self.end_hour))
    }

    /// The work window on `date`.
    pub fn window(&self, date: NaiveDate) -> TimeWindow {
        TimeWindow::new(self.opening(date), self.closing(date))
    }

    /// Whether `[start, end)` ends no later than closing on `start`'s day.
    pub fn fits(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        end <= self.closing(start.date())
    }

    /// Applies the rollover rule to a task starting at `start`.
    ///
    /// Returns `start` unchanged when the task fits before closing on its
    /// day. Otherwise returns the next day's opening; the caller keeps the
    /// duration and recomputes the end from the new start.
    ///
    /// # Example
    /// ```
    /// use chrono::{Duration, NaiveDate};
    /// use crew_schedule::models::WorkdayCalendar;
    ///
    /// let cal = WorkdayCalendar::default();
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    /// let late = day.and_hms_opt(17, 0, 0).unwrap();
    ///
    /// // Ends exactly at 18:00: stays.
    /// assert_eq!(cal.rollover(late, Duration::hours(1)), late);
    /// // Ends at 18:30: moves to 09:00 next day.
    /// let next = cal.rollover(late, Duration::minutes(90));
    /// let opening = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// assert_eq!(next, opening);
    /// ```
    pub fn rollover(&self, start: NaiveDateTime, duration: Duration) -> NaiveDateTime {
        if self.fits(start, start + duration) {
            start
        } else {
            self.opening(start.date() + Duration::days(1))
        }
    }

    /// Consecutive calendar dates starting at `reference`.
    ///
    /// The caller supplies the reference date, so the visible window does
    /// not depend on the wall clock.
    pub fn timeline(&self, reference: NaiveDate, days: u32) -> Vec<NaiveDate> {
        reference.iter_days().take(days as usize).collect()
    }
}

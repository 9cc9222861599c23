//! Conflict shift resolver.
//!
//! # Algorithm
//!
//! 1. Take the worker's tasks, drop any task sharing the changed task's ID,
//!    append the changed task (insert-or-replace).
//! 2. Stable-sort by start.
//! 3. Walk adjacent pairs left to right. When `current.end > next.start`,
//!    push `next` forward by the overlap. If the pushed task now ends after
//!    closing, move it to the next day's opening with its duration intact.
//!    The walk reads the already-shifted `next` on the following step, so a
//!    run of overlaps is resolved in one pass.
//! 4. Return the other workers' tasks unchanged, followed by the resolved run.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk, where n = tasks.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Roster, Task, WorkdayCalendar};
use crate::validation::{validate_task, ValidationError, ValidationErrorKind};

/// Pushes overlapping tasks of one worker forward in time.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crew_schedule::models::Task;
/// use crew_schedule::scheduler::ConflictResolver;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
///
/// let existing = vec![Task::new("A", "E1", at(9), at(11))];
/// let changed = Task::new("B", "E1", at(10), at(12));
///
/// let resolved = ConflictResolver::default().resolve(&existing, "E1", &changed);
/// let b = resolved.iter().find(|t| t.id == "B").unwrap();
/// assert_eq!(b.start, at(11));
/// assert_eq!(b.end, at(13));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictResolver {
    calendar: WorkdayCalendar,
}

impl ConflictResolver {
    /// Creates a resolver using the given workday window.
    pub fn new(calendar: WorkdayCalendar) -> Self {
        Self { calendar }
    }

    /// The workday window used for rollover.
    pub fn calendar(&self) -> &WorkdayCalendar {
        &self.calendar
    }

    /// Inserts or replaces `changed` in `employee_id`'s tasks and shifts
    /// overlaps forward.
    ///
    /// Tasks of other workers are returned untouched. Any copy of `changed`
    /// filed under a different worker is dropped so a reassigned task
    /// appears once.
    pub fn resolve(&self, tasks: &[Task], employee_id: &str, changed: &Task) -> Vec<Task> {
        let (mut run, others): (Vec<Task>, Vec<Task>) = tasks
            .iter()
            .filter(|t| t.id != changed.id)
            .cloned()
            .partition(|t| t.employee_id == employee_id);

        run.push(changed.clone());
        run.sort_by_key(|t| t.start);

        for i in 1..run.len() {
            let current_end = run[i - 1].end;
            let next = &mut run[i];
            if current_end <= next.start {
                continue;
            }

            let shift = current_end - next.start;
            next.shift_by(shift);
            debug!(
                task = %next.id,
                employee = employee_id,
                shift_minutes = shift.num_minutes(),
                "shifted overlapping task"
            );

            let duration = next.duration();
            let start = self.calendar.rollover(next.start, duration);
            if start != next.start {
                next.move_to(start);
                debug!(task = %next.id, start = %next.start, "rolled task to next workday");
                if !self.calendar.fits(next.start, next.end) {
                    warn!(
                        task = %next.id,
                        hours = next.duration_hours(),
                        "task is longer than a workday"
                    );
                }
            }
        }

        let mut resolved = others;
        resolved.extend(run);
        resolved
    }

    /// Validates `changed` before resolving.
    ///
    /// Fails fast, leaving nothing modified, when the task has an invalid
    /// interval, references an unknown worker or site, exceeds a workday,
    /// or belongs to a worker other than `employee_id`.
    pub fn try_resolve(
        &self,
        tasks: &[Task],
        employee_id: &str,
        changed: &Task,
        roster: &Roster,
    ) -> Result<Vec<Task>> {
        let mut errors = validate_task(changed, roster, &self.calendar)
            .err()
            .unwrap_or_default();
        if changed.employee_id != employee_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::WorkerMismatch,
                format!(
                    "Task '{}' belongs to '{}', not '{}'",
                    changed.id, changed.employee_id, employee_id
                ),
            ));
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }
        Ok(self.resolve(tasks, employee_id, changed))
    }
}

/// Resolves conflicts with the default 09:00-18:00 workday.
///
/// See [`ConflictResolver::resolve`].
pub fn resolve_conflicts(tasks: &[Task], employee_id: &str, changed: &Task) -> Vec<Task> {
    ConflictResolver::default().resolve(tasks, employee_id, changed)
}

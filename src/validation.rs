//! Input validation for crew schedules.
//!
//! Checks task records and reference data at the boundary, so the
//! resolver and layout passes can stay total. Detects:
//! - Duplicate IDs
//! - Empty or inverted intervals
//! - Unknown worker and site references
//! - Tasks longer than one workday

use crate::models::{Roster, Task, WorkdayCalendar};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task's end is not strictly after its start.
    InvalidInterval,
    /// A task references a worker missing from the roster.
    UnknownWorker,
    /// A task references a site missing from the roster.
    UnknownSite,
    /// A task cannot fit inside a single workday.
    ExceedsWorkday,
    /// The worker a change is resolved for differs from the task's worker.
    WorkerMismatch,
    /// The workday hours do not form a window.
    InvalidWorkday,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates roster reference data.
///
/// Checks that worker IDs and site IDs are each unique.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let mut worker_ids = HashSet::new();
    for w in &roster.workers {
        if !worker_ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }
    }

    let mut site_ids = HashSet::new();
    for s in &roster.sites {
        if !site_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate site ID: {}", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single task against the roster and workday.
///
/// Checks:
/// 1. `end > start`
/// 2. Duration does not exceed the workday span
/// 3. The worker exists in the roster
/// 4. The site exists in the roster (an empty site ID is allowed)
pub fn validate_task(task: &Task, roster: &Roster, calendar: &WorkdayCalendar) -> ValidationResult {
    let mut errors = Vec::new();
    check_task(task, roster, calendar, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full task collection.
///
/// Runs [`validate_task`] on every task and additionally checks that task
/// IDs are unique.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(
    tasks: &[Task],
    roster: &Roster,
    calendar: &WorkdayCalendar,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        check_task(task, roster, calendar, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_task(
    task: &Task,
    roster: &Roster,
    calendar: &WorkdayCalendar,
    errors: &mut Vec<ValidationError>,
) {
    if !task.has_valid_interval() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInterval,
            format!(
                "Task '{}' ends at {} which is not after its start {}",
                task.id, task.end, task.start
            ),
        ));
    } else if task.duration() > calendar.span() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ExceedsWorkday,
            format!(
                "Task '{}' lasts {}h, longer than the {}h workday",
                task.id,
                task.duration_hours(),
                calendar.span().num_hours()
            ),
        ));
    }

    if !roster.has_worker(&task.employee_id) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownWorker,
            format!(
                "Task '{}' references unknown worker '{}'",
                task.id, task.employee_id
            ),
        ));
    }

    if !task.site_id.is_empty() && roster.site(&task.site_id).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownSite,
            format!(
                "Task '{}' references unknown site '{}'",
                task.id, task.site_id
            ),
        ));
    }
}

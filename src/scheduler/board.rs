//! Schedule board: the owned task collection and the commands that edit it.
//!
//! The board sequences edits the way an interactive timeline issues them:
//! saves from the task form, deletes, and drag gestures. Conflict
//! resolution runs only when an urgent task is saved and once when a drag
//! ends; live drag moves never resolve.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::{layout_by_worker, ConflictResolver, WorkloadSummary};
use crate::config::BoardConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Roster, Task};
use crate::validation::{validate_roster, validate_task};

#[derive(Debug, Clone)]
struct DragSession {
    /// The task as it was when the gesture began.
    original: Task,
}

/// Task collection for one crew, with its roster and workday policy.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crew_schedule::config::BoardConfig;
/// use crew_schedule::models::{Roster, Task, Worker};
/// use crew_schedule::scheduler::ScheduleBoard;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
///
/// let roster = Roster::new().with_worker(Worker::new("E1"));
/// let mut board = ScheduleBoard::new(roster, BoardConfig::default()).unwrap();
///
/// board.save_task(Task::new("A", "E1", at(9), at(11)).with_priority(3)).unwrap();
/// board.save_task(Task::new("B", "E1", at(10), at(12)).with_priority(1)).unwrap();
///
/// // B is urgent, so it was resolved against A.
/// assert_eq!(board.task("B").unwrap().start, at(11));
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    roster: Roster,
    config: BoardConfig,
    resolver: ConflictResolver,
    tasks: Vec<Task>,
    drag: Option<DragSession>,
}

impl ScheduleBoard {
    /// Creates an empty board after validating the roster and config.
    pub fn new(roster: Roster, config: BoardConfig) -> Result<Self> {
        config.calendar.validate()?;
        validate_roster(&roster)?;
        Ok(Self {
            roster,
            config,
            resolver: ConflictResolver::new(config.calendar),
            tasks: Vec::new(),
            drag: None,
        })
    }

    /// The injected reference data.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Active configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// All tasks, in board order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by ID.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// A worker's tasks, sorted by start.
    pub fn tasks_for_worker(&self, employee_id: &str) -> Vec<&Task> {
        let mut run: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.employee_id == employee_id)
            .collect();
        run.sort_by_key(|t| t.start);
        run
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Creates or replaces a task.
    ///
    /// Urgent tasks (see [`BoardConfig::is_urgent`]) are resolved against
    /// the worker's other tasks. Other tasks are replaced in place, or
    /// appended when new, without resolution.
    ///
    /// Saving the task currently being dragged is rejected; end or cancel
    /// the drag first.
    pub fn save_task(&mut self, task: Task) -> Result<()> {
        if let Some(session) = self.drag.as_ref().filter(|d| d.original.id == task.id) {
            return Err(ScheduleError::DragInProgress(session.original.id.clone()));
        }
        validate_task(&task, &self.roster, &self.config.calendar)?;

        if self.config.is_urgent(task.priority) {
            info!(task = %task.id, employee = %task.employee_id, "resolving urgent task");
            self.tasks = self.resolver.resolve(&self.tasks, &task.employee_id, &task);
        } else if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            debug!(task = %task.id, "replaced task");
            *slot = task;
        } else {
            debug!(task = %task.id, "added task");
            self.tasks.push(task);
        }
        Ok(())
    }

    /// Deletes a task, returning it if it existed.
    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        if self.drag.as_ref().is_some_and(|d| d.original.id == id) {
            self.drag = None;
        }
        info!(task = id, "removed task");
        Some(self.tasks.remove(index))
    }

    /// Starts dragging a task.
    pub fn begin_drag(&mut self, id: &str) -> Result<()> {
        if let Some(session) = &self.drag {
            return Err(ScheduleError::DragInProgress(session.original.id.clone()));
        }
        let original = self
            .task(id)
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownTask(id.to_string()))?;
        debug!(task = id, "drag started");
        self.drag = Some(DragSession { original });
        Ok(())
    }

    /// Moves the dragged task to `start`, optionally onto another worker's
    /// row. Duration is kept. No conflict resolution happens here.
    pub fn drag_to(&mut self, start: NaiveDateTime, employee_id: Option<&str>) -> Result<()> {
        let id = self
            .drag
            .as_ref()
            .map(|d| d.original.id.clone())
            .ok_or(ScheduleError::NoActiveDrag)?;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ScheduleError::UnknownTask(id))?;

        task.move_to(start);
        if let Some(employee_id) = employee_id {
            task.employee_id = employee_id.to_string();
        }
        Ok(())
    }

    /// Finishes the drag and resolves conflicts once for the task's worker.
    ///
    /// If the dropped position fails validation (for example an unknown
    /// worker row), the task is restored and the error returned.
    pub fn end_drag(&mut self) -> Result<()> {
        let session = self.drag.take().ok_or(ScheduleError::NoActiveDrag)?;
        let dropped = self
            .task(&session.original.id)
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownTask(session.original.id.clone()))?;

        match self
            .resolver
            .try_resolve(&self.tasks, &dropped.employee_id, &dropped, &self.roster)
        {
            Ok(resolved) => {
                info!(task = %dropped.id, employee = %dropped.employee_id, "drag resolved");
                self.tasks = resolved;
                Ok(())
            }
            Err(err) => {
                self.restore(session.original);
                Err(err)
            }
        }
    }

    /// Abandons the drag and puts the task back where it started.
    pub fn cancel_drag(&mut self) -> Result<()> {
        let session = self.drag.take().ok_or(ScheduleError::NoActiveDrag)?;
        debug!(task = %session.original.id, "drag cancelled");
        self.restore(session.original);
        Ok(())
    }

    fn restore(&mut self, original: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == original.id) {
            *slot = original;
        }
    }

    /// Lane layout for every worker with tasks.
    pub fn lanes(&self) -> BTreeMap<String, Vec<Task>> {
        layout_by_worker(&self.tasks)
    }

    /// Daily load summary for every worker with tasks.
    pub fn workload(&self) -> WorkloadSummary {
        WorkloadSummary::calculate(&self.tasks, &self.config.calendar)
    }
}

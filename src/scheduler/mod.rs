//! Conflict resolution, lane layout, and the schedule board.
//!
//! # Algorithms
//!
//! `ConflictResolver` inserts or replaces one task in a worker's run and
//! pushes overlapping tasks forward, rolling a task to the next workday
//! when it would end after closing.
//!
//! `compute_parallel_layout` assigns render lanes to concurrent tasks of
//! one worker using forward-scan overlap clusters.
//!
//! # Board
//!
//! `ScheduleBoard` owns the task collection and sequences saves, deletes,
//! and drag gestures. `WorkloadSummary` reports daily booked time per
//! worker.

mod board;
mod layout;
mod resolver;
mod workload;

pub use board::ScheduleBoard;
pub use layout::{compute_parallel_layout, layout_by_worker};
pub use resolver::{resolve_conflicts, ConflictResolver};
pub use workload::{DailyLoad, WorkloadSummary};

//! Scheduling engine for field crews.
//!
//! Assigns time-bound tasks to workers across a multi-day calendar bounded
//! by fixed daily work hours, and lays out concurrent tasks in lanes for
//! rendering.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TaskType`, `Worker`, `Site`,
//!   `Roster`, `WorkdayCalendar`, `TimeWindow`
//! - **`scheduler`**: `ConflictResolver`, `compute_parallel_layout`,
//!   `WorkloadSummary`, `ScheduleBoard`
//! - **`validation`**: Boundary checks (intervals, references, duplicate IDs)
//! - **`config`**: `BoardConfig`, loadable from JSON
//! - **`error`**: `ScheduleError`
//!
//! # Architecture
//!
//! The resolver and layout passes are pure functions over task slices;
//! they never read the clock or shared state. Rendering, drag capture,
//! and task forms live in the embedding application and call in through
//! `ScheduleBoard` or the free functions.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};

//! Crew scheduling domain models.
//!
//! Provides the data types the engine reads and writes: tasks with their
//! timing and lane fields, the read-only crew/site roster, and the
//! workday calendar policy.
//!
//! # Domain Mappings
//!
//! | crew-schedule | Field Service | Facilities | Logistics |
//! |---------------|---------------|------------|-----------|
//! | Task | Work Order | Job Ticket | Delivery Slot |
//! | Worker | Technician | Caretaker | Driver |
//! | Site | Customer Site | Building | Drop Point |
//! | WorkdayCalendar | Shift Hours | Service Hours | Dock Hours |

mod calendar;
mod roster;
mod task;

pub use calendar::{
    TimeWindow, WorkdayCalendar, DEFAULT_WORK_END_HOUR, DEFAULT_WORK_START_HOUR,
};
pub use roster::{Roster, Site, Worker};
pub use task::{Task, TaskType};

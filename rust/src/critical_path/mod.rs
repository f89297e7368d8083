//! Critical Path Method scheduling.
//!
//! The engine derives a dependency-respecting order from a [`TaskRegistry`],
//! propagates earliest times forward along it and latest times backward,
//! seeded by the project's earliest completion. Zero-slack tasks form the
//! critical path.
//!
//! [`TaskRegistry`]: crate::registry::TaskRegistry

mod calendar;
mod engine;
mod topology;
mod types;

pub use calendar::{project_dates, DatedTiming};
pub use engine::{analyze, ScheduleEngine};
pub use types::{Pass, ScheduleReport, TaskTiming, SLACK_EPSILON};

//! Error types shared by the task registry and the schedule engine.

use thiserror::Error;

use crate::critical_path::Pass;

/// Errors raised while building a registry or computing a schedule.
///
/// Every variant is a usage or data error: nothing here is transient, and a
/// failing operation never leaves partially written results behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),
    #[error("Task {task} depends on unknown task {dependency}")]
    UnknownDependency { task: String, dependency: String },
    #[error("Task {0} depends on itself")]
    SelfDependency(String),
    #[error("Task {task} lists dependency {dependency} more than once")]
    DuplicateDependency { task: String, dependency: String },
    #[error("Task {task} has invalid duration {duration}")]
    InvalidDuration { task: String, duration: f64 },
    #[error("Circular dependency detected at task {0}")]
    CyclicDependency(String),
    #[error("The {requested} pass requires the {required} pass to run first")]
    PassOrder { requested: Pass, required: Pass },
    #[error("The {0} pass has not been run")]
    NotComputed(Pass),
    #[error("Schedule has no tasks")]
    EmptySchedule,
    #[error("Task not found: {0}")]
    TaskNotFound(String),
    #[error("Offset {offset} for task {task} does not fit on the calendar")]
    CalendarOverflow { task: String, offset: f64 },
}

impl From<ScheduleError> for pyo3::PyErr {
    fn from(err: ScheduleError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

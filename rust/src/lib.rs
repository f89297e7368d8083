//! Critical Path Method (CPM) scheduling bounds for dependent tasks.
//!
//! This module computes earliest/latest start and finish times for every task
//! of an acyclic dependency graph, plus the project's completion times, and
//! exposes the same API to Python.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod critical_path;
mod error;
mod interner;
pub mod logging;
mod models;
pub mod registry;

pub use config::{MissingDependencyPolicy, SchedulingConfig};
pub use critical_path::{
    analyze, project_dates, DatedTiming, Pass, ScheduleEngine, ScheduleReport, TaskTiming,
};
pub use error::ScheduleError;
pub use models::Task;
pub use registry::TaskRegistry;

/// Run both CPM passes over a task list.
///
/// # Arguments
/// * `tasks` - Task definitions; ids must be unique
/// * `config` - Scheduling configuration (defaults when omitted)
///
/// # Returns
/// * ScheduleReport with per-task bounds, completion times and critical tasks
///
/// # Raises
/// * ValueError for duplicate ids, invalid dependencies, cycles, or an empty task list
#[pyfunction]
#[pyo3(signature = (tasks, config=None))]
fn run_critical_path(
    tasks: Vec<Task>,
    config: Option<SchedulingConfig>,
) -> PyResult<ScheduleReport> {
    let config = config.unwrap_or_default();
    Ok(analyze(tasks, &config)?)
}

/// The workflow_cpm Python module.
#[pymodule]
fn workflow_cpm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Task>()?;
    m.add_class::<TaskTiming>()?;
    m.add_class::<DatedTiming>()?;
    m.add_class::<ScheduleReport>()?;

    // Config types
    m.add_class::<SchedulingConfig>()?;
    m.add_class::<MissingDependencyPolicy>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(run_critical_path, m)?)?;

    Ok(())
}

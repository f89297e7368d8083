//! Calendar projection of computed bounds.

use chrono::{Days, NaiveDate};
use pyo3::prelude::*;

use crate::error::ScheduleError;

use super::types::ScheduleReport;

/// A task's bounds as calendar dates.
#[pyclass(frozen)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatedTiming {
    #[pyo3(get)]
    pub task_id: String,
    #[pyo3(get)]
    pub earliest_start: NaiveDate,
    #[pyo3(get)]
    pub earliest_finish: NaiveDate,
    #[pyo3(get)]
    pub latest_start: NaiveDate,
    #[pyo3(get)]
    pub latest_finish: NaiveDate,
}

#[pymethods]
impl DatedTiming {
    fn __repr__(&self) -> String {
        format!(
            "DatedTiming(task_id={:?}, earliest={}..{}, latest={}..{})",
            self.task_id,
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish
        )
    }
}

fn offset_date(start: NaiveDate, offset: f64, task_id: &str) -> Result<NaiveDate, ScheduleError> {
    let overflow = || ScheduleError::CalendarOverflow {
        task: task_id.to_string(),
        offset,
    };
    if !offset.is_finite() || offset > u32::MAX as f64 {
        return Err(overflow());
    }
    // Ceiling rounds fractional days up to whole days; tiny negative noise clamps to day zero.
    let days = offset.ceil().max(0.0) as u64;
    start.checked_add_days(Days::new(days)).ok_or_else(overflow)
}

/// Map each task's offsets to dates, treating one time unit as one day.
pub fn project_dates(
    report: &ScheduleReport,
    start: NaiveDate,
) -> Result<Vec<DatedTiming>, ScheduleError> {
    report
        .timings
        .iter()
        .map(|t| {
            Ok(DatedTiming {
                task_id: t.task_id.clone(),
                earliest_start: offset_date(start, t.earliest_start, &t.task_id)?,
                earliest_finish: offset_date(start, t.earliest_finish, &t.task_id)?,
                latest_start: offset_date(start, t.latest_start, &t.task_id)?,
                latest_finish: offset_date(start, t.latest_finish, &t.task_id)?,
            })
        })
        .collect()
}

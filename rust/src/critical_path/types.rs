//! Types for critical path analysis.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use pyo3::prelude::*;

use super::calendar::{project_dates, DatedTiming};

/// Slack below this magnitude counts as zero.
pub const SLACK_EPSILON: f64 = 1e-9;

/// The two propagation passes, in the order they must run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// Forward pass: earliest start/finish.
    Earliest,
    /// Backward pass: latest start/finish.
    Latest,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Earliest => write!(f, "earliest"),
            Pass::Latest => write!(f, "latest"),
        }
    }
}

/// Start/finish pair produced by one pass for one task.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Window {
    pub start: f64,
    pub finish: f64,
}

/// Per-task timing after both passes.
#[pyclass(frozen)]
#[derive(Clone, Debug, PartialEq)]
pub struct TaskTiming {
    #[pyo3(get)]
    pub task_id: String,
    /// Earliest possible start time (from forward pass).
    #[pyo3(get)]
    pub earliest_start: f64,
    /// Earliest possible finish time (from forward pass).
    #[pyo3(get)]
    pub earliest_finish: f64,
    /// Latest allowable start time (from backward pass).
    #[pyo3(get)]
    pub latest_start: f64,
    /// Latest allowable finish time (from backward pass).
    #[pyo3(get)]
    pub latest_finish: f64,
    /// Slack = latest_start - earliest_start.
    #[pyo3(get)]
    pub slack: f64,
}

impl TaskTiming {
    pub fn is_critical(&self) -> bool {
        self.slack.abs() < SLACK_EPSILON
    }
}

#[pymethods]
impl TaskTiming {
    #[pyo3(name = "is_critical")]
    fn py_is_critical(&self) -> bool {
        self.is_critical()
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskTiming(task_id={:?}, es={}, ef={}, ls={}, lf={}, slack={})",
            self.task_id,
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish,
            self.slack
        )
    }
}

/// Everything one analysis pass produces, detached from the engine.
#[pyclass(frozen)]
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleReport {
    /// Task ids in topological order (dependencies first).
    #[pyo3(get)]
    pub order: Vec<String>,
    /// Timings in topological order.
    pub timings: Vec<TaskTiming>,
    #[pyo3(get)]
    pub earliest_completion: f64,
    #[pyo3(get)]
    pub latest_completion: f64,
    /// Zero-slack task ids in topological order.
    #[pyo3(get)]
    pub critical_tasks: Vec<String>,
    /// Sum of all task durations.
    #[pyo3(get)]
    pub total_work: f64,
}

impl ScheduleReport {
    pub fn timing(&self, task_id: &str) -> Option<&TaskTiming> {
        self.timings.iter().find(|t| t.task_id == task_id)
    }
}

#[pymethods]
impl ScheduleReport {
    #[getter(timings)]
    fn py_timings(&self) -> HashMap<String, TaskTiming> {
        self.timings
            .iter()
            .map(|t| (t.task_id.clone(), t.clone()))
            .collect()
    }

    #[pyo3(name = "timing")]
    fn py_timing(&self, task_id: &str) -> Option<TaskTiming> {
        self.timing(task_id).cloned()
    }

    /// Project every task's bounds onto the calendar, one time unit per day.
    fn dated(&self, start_date: NaiveDate) -> PyResult<Vec<DatedTiming>> {
        Ok(project_dates(self, start_date)?)
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleReport(tasks={}, earliest_completion={}, latest_completion={}, critical={})",
            self.order.len(),
            self.earliest_completion,
            self.latest_completion,
            self.critical_tasks.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(id: &str, es: f64, ls: f64, duration: f64) -> TaskTiming {
        TaskTiming {
            task_id: id.to_string(),
            earliest_start: es,
            earliest_finish: es + duration,
            latest_start: ls,
            latest_finish: ls + duration,
            slack: ls - es,
        }
    }

    #[test]
    fn test_task_timing_critical() {
        assert!(timing("b", 3.0, 3.0, 2.0).is_critical());
        assert!(!timing("c", 3.0, 4.0, 1.0).is_critical());
        // Rounding noise from float subtraction still counts as zero slack.
        assert!(timing("d", 0.1 + 0.2, 0.3, 1.0).is_critical());
    }

    #[test]
    fn test_report_timing_lookup() {
        let report = ScheduleReport {
            order: vec!["a".to_string(), "b".to_string()],
            timings: vec![timing("a", 0.0, 0.0, 1.0), timing("b", 1.0, 1.0, 1.0)],
            earliest_completion: 2.0,
            latest_completion: 2.0,
            critical_tasks: vec!["a".to_string(), "b".to_string()],
            total_work: 2.0,
        };
        assert_eq!(report.timing("b").map(|t| t.earliest_start), Some(1.0));
        assert!(report.timing("zzz").is_none());
    }

    #[test]
    fn test_pass_display() {
        assert_eq!(Pass::Earliest.to_string(), "earliest");
        assert_eq!(Pass::Latest.to_string(), "latest");
    }
}

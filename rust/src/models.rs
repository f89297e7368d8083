//! Core data types for the schedule engine.

use pyo3::prelude::*;

/// A task definition: how long it takes and which tasks must finish first.
///
/// Tasks are immutable once constructed; a new registry is built to change
/// the task set.
#[pyclass(frozen)]
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    #[pyo3(get)]
    pub id: String,
    /// Time units needed once started (finite, non-negative).
    #[pyo3(get)]
    pub duration: f64,
    /// Ids of tasks that must finish before this one may start.
    #[pyo3(get)]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new<I, S>(id: impl Into<String>, duration: f64, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            duration,
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (id, duration, dependencies=None))]
    fn py_new(id: String, duration: f64, dependencies: Option<Vec<String>>) -> Self {
        Self {
            id,
            duration,
            dependencies: dependencies.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(id={:?}, duration={}, deps={:?})",
            self.id, self.duration, self.dependencies
        )
    }
}

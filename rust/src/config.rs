//! Configuration types for registry construction and schedule analysis.

use pyo3::prelude::*;

use crate::logging::VERBOSITY_SILENT;

/// How a dependency id that names no registered task is handled.
#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingDependencyPolicy {
    /// Skip the dependency: it contributes zero to earliest/latest aggregates.
    #[default]
    Ignore,
    /// Fail registry construction with `UnknownDependency`.
    Reject,
}

/// Configuration for a critical path analysis.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SchedulingConfig {
    /// Treatment of dependency ids absent from the task set
    #[pyo3(get, set)]
    pub missing_dependencies: MissingDependencyPolicy,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            missing_dependencies: MissingDependencyPolicy::Ignore,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl SchedulingConfig {
    /// Default configuration with the strict missing-dependency policy.
    pub fn strict() -> Self {
        Self {
            missing_dependencies: MissingDependencyPolicy::Reject,
            ..Self::default()
        }
    }
}

#[pymethods]
impl SchedulingConfig {
    #[new]
    #[pyo3(signature = (missing_dependencies=None, verbosity=None))]
    fn py_new(missing_dependencies: Option<MissingDependencyPolicy>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            missing_dependencies: missing_dependencies.unwrap_or(defaults.missing_dependencies),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SchedulingConfig(missing_dependencies={:?}, verbosity={})",
            self.missing_dependencies, self.verbosity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SchedulingConfig::default();
        assert_eq!(config.missing_dependencies, MissingDependencyPolicy::Ignore);
        assert_eq!(config.verbosity, VERBOSITY_SILENT);
    }

    #[test]
    fn test_strict_config() {
        let config = SchedulingConfig::strict();
        assert_eq!(config.missing_dependencies, MissingDependencyPolicy::Reject);
        assert_eq!(config.verbosity, VERBOSITY_SILENT);
    }
}

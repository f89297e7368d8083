//! Critical path calculation using forward and backward passes.

use crate::config::SchedulingConfig;
use crate::error::ScheduleError;
use crate::interner::TaskIdInt;
use crate::models::Task;
use crate::registry::TaskRegistry;
use crate::{log_changes, log_checks};

use super::topology::topological_order;
use super::types::{Pass, ScheduleReport, TaskTiming, Window};

/// Runs CPM over a fixed registry.
///
/// Results are held in vectors indexed by the registry's integer task ids.
/// The forward pass must run before the backward pass; rerunning the forward
/// pass recomputes it from scratch and discards any backward results, since
/// those were seeded from the previous earliest finishes.
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    registry: TaskRegistry,
    config: SchedulingConfig,
    /// Topological order captured by the last forward pass.
    order: Option<Vec<TaskIdInt>>,
    earliest: Option<Vec<Window>>,
    latest: Option<Vec<Window>>,
}

impl ScheduleEngine {
    pub fn new(registry: TaskRegistry) -> Self {
        Self::with_config(registry, SchedulingConfig::default())
    }

    pub fn with_config(registry: TaskRegistry, config: SchedulingConfig) -> Self {
        Self {
            registry,
            config,
            order: None,
            earliest: None,
            latest: None,
        }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Tasks ordered so that each follows all of its dependencies.
    pub fn topological_order(&self) -> Result<Vec<&Task>, ScheduleError> {
        let order = topological_order(&self.registry, self.config.verbosity)?;
        Ok(order.into_iter().map(|id| self.registry.task_at(id)).collect())
    }

    /// Forward pass: earliest start is the latest earliest finish among
    /// known dependencies (0 when there are none).
    pub fn compute_earliest_times(&mut self) -> Result<(), ScheduleError> {
        let verbosity = self.config.verbosity;
        let order = topological_order(&self.registry, verbosity)?;
        let mut earliest = vec![Window::default(); self.registry.len()];

        for &id in &order {
            let task = self.registry.task_at(id);
            // Dependencies precede `id` in the order, so their windows are final.
            let start = self
                .registry
                .resolved_deps(id)
                .iter()
                .map(|&dep| earliest[dep as usize].finish)
                .fold(0.0, f64::max);
            let finish = start + task.duration;
            earliest[id as usize] = Window { start, finish };
            log_checks!(verbosity, "{}: es={} ef={}", task.id, start, finish);
        }

        log_changes!(
            verbosity,
            "Forward pass: {} tasks, earliest completion {}",
            order.len(),
            max_finish(&earliest)
        );

        self.order = Some(order);
        self.earliest = Some(earliest);
        self.latest = None;
        Ok(())
    }

    /// Backward pass, seeded with the maximum earliest finish: a task must
    /// finish before the earliest latest start among its dependents.
    pub fn compute_latest_times(&mut self) -> Result<(), ScheduleError> {
        let (Some(order), Some(earliest)) = (&self.order, &self.earliest) else {
            return Err(ScheduleError::PassOrder {
                requested: Pass::Latest,
                required: Pass::Earliest,
            });
        };
        let verbosity = self.config.verbosity;
        let max_eft = max_finish(earliest);

        let mut latest: Vec<Window> = self
            .registry
            .iter()
            .map(|task| Window {
                start: max_eft - task.duration,
                finish: max_eft,
            })
            .collect();

        // Reverse topological order resolves every dependent before its dependencies.
        for &id in order.iter().rev() {
            let task = self.registry.task_at(id);
            let finish = self
                .registry
                .resolved_dependents(id)
                .iter()
                .map(|&dependent| latest[dependent as usize].start)
                .fold(max_eft, f64::min);
            let start = finish - task.duration;
            latest[id as usize] = Window { start, finish };
            log_checks!(verbosity, "{}: ls={} lf={}", task.id, start, finish);
        }

        log_changes!(verbosity, "Backward pass: seeded at {}", max_eft);

        self.latest = Some(latest);
        Ok(())
    }

    /// Maximum earliest finish over all tasks.
    pub fn earliest_completion_time(&self) -> Result<f64, ScheduleError> {
        self.ensure_not_empty()?;
        Ok(max_finish(self.windows(Pass::Earliest)?))
    }

    /// Maximum latest finish over all tasks.
    pub fn latest_completion_time(&self) -> Result<f64, ScheduleError> {
        self.ensure_not_empty()?;
        Ok(max_finish(self.windows(Pass::Latest)?))
    }

    pub fn earliest_start(&self, id: &str) -> Result<f64, ScheduleError> {
        Ok(self.window(Pass::Earliest, id)?.start)
    }

    pub fn earliest_finish(&self, id: &str) -> Result<f64, ScheduleError> {
        Ok(self.window(Pass::Earliest, id)?.finish)
    }

    pub fn latest_start(&self, id: &str) -> Result<f64, ScheduleError> {
        Ok(self.window(Pass::Latest, id)?.start)
    }

    pub fn latest_finish(&self, id: &str) -> Result<f64, ScheduleError> {
        Ok(self.window(Pass::Latest, id)?.finish)
    }

    /// Latest start minus earliest start.
    pub fn slack(&self, id: &str) -> Result<f64, ScheduleError> {
        Ok(self.timing(id)?.slack)
    }

    pub fn is_critical(&self, id: &str) -> Result<bool, ScheduleError> {
        Ok(self.timing(id)?.is_critical())
    }

    /// All four bounds and slack for one task.
    pub fn timing(&self, id: &str) -> Result<TaskTiming, ScheduleError> {
        let int = self.lookup(id)?;
        self.timing_at(int)
    }

    /// Ids of zero-slack tasks, in topological order.
    pub fn critical_tasks(&self) -> Result<Vec<&str>, ScheduleError> {
        let mut critical = Vec::new();
        for &id in self.computed_order()? {
            if self.timing_at(id)?.is_critical() {
                critical.push(self.registry.task_at(id).id.as_str());
            }
        }
        Ok(critical)
    }

    /// Sum of all task durations.
    pub fn total_work(&self) -> f64 {
        self.registry.iter().map(|t| t.duration).sum()
    }

    /// Snapshot of both passes as owned data.
    pub fn report(&self) -> Result<ScheduleReport, ScheduleError> {
        let earliest_completion = self.earliest_completion_time()?;
        let latest_completion = self.latest_completion_time()?;

        let order = self.computed_order()?;
        let timings = order
            .iter()
            .map(|&id| self.timing_at(id))
            .collect::<Result<Vec<_>, _>>()?;
        let critical_tasks = timings
            .iter()
            .filter(|t| t.is_critical())
            .map(|t| t.task_id.clone())
            .collect();

        Ok(ScheduleReport {
            order: timings.iter().map(|t| t.task_id.clone()).collect(),
            timings,
            earliest_completion,
            latest_completion,
            critical_tasks,
            total_work: self.total_work(),
        })
    }

    fn ensure_not_empty(&self) -> Result<(), ScheduleError> {
        if self.registry.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }
        Ok(())
    }

    fn lookup(&self, id: &str) -> Result<TaskIdInt, ScheduleError> {
        self.registry
            .id_of(id)
            .ok_or_else(|| ScheduleError::TaskNotFound(id.to_string()))
    }

    fn computed_order(&self) -> Result<&[TaskIdInt], ScheduleError> {
        self.order
            .as_deref()
            .ok_or(ScheduleError::NotComputed(Pass::Earliest))
    }

    fn windows(&self, pass: Pass) -> Result<&[Window], ScheduleError> {
        let windows = match pass {
            Pass::Earliest => &self.earliest,
            Pass::Latest => &self.latest,
        };
        windows.as_deref().ok_or(ScheduleError::NotComputed(pass))
    }

    fn window(&self, pass: Pass, id: &str) -> Result<Window, ScheduleError> {
        let int = self.lookup(id)?;
        Ok(self.windows(pass)?[int as usize])
    }

    fn timing_at(&self, id: TaskIdInt) -> Result<TaskTiming, ScheduleError> {
        let early = self.windows(Pass::Earliest)?[id as usize];
        let late = self.windows(Pass::Latest)?[id as usize];
        Ok(TaskTiming {
            task_id: self.registry.task_at(id).id.clone(),
            earliest_start: early.start,
            earliest_finish: early.finish,
            latest_start: late.start,
            latest_finish: late.finish,
            slack: late.start - early.start,
        })
    }
}

fn max_finish(windows: &[Window]) -> f64 {
    windows.iter().map(|w| w.finish).fold(0.0, f64::max)
}

/// Build a registry and run both passes in one call.
///
/// # Returns
/// * `Ok(ScheduleReport)` with every task's bounds
/// * `Err(ScheduleError)` for invalid tasks, cycles, or an empty task set
pub fn analyze(tasks: Vec<Task>, config: &SchedulingConfig) -> Result<ScheduleReport, ScheduleError> {
    let registry = TaskRegistry::with_config(tasks, config)?;
    let mut engine = ScheduleEngine::with_config(registry, config.clone());
    engine.compute_earliest_times()?;
    engine.compute_latest_times()?;
    engine.report()
}

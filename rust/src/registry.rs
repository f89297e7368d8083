//! Immutable, validated collection of task definitions.

use rustc_hash::FxHashSet;

use crate::config::{MissingDependencyPolicy, SchedulingConfig};
use crate::error::ScheduleError;
use crate::interner::{TaskIdInt, TaskIdInterner};
use crate::models::Task;

/// Tasks indexed by id, with dependency edges resolved to integer ids.
///
/// Iteration order is input order. Dependency ids that name no task are kept
/// out of the resolved edges (and reported by `unresolved_dependencies`)
/// unless the configuration rejects them outright.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    index: TaskIdInterner,
    /// Resolved dependencies, in listed order, indexed by task ID.
    deps: Vec<Vec<TaskIdInt>>,
    /// Reverse edges, in input order of the dependent, indexed by task ID.
    dependents: Vec<Vec<TaskIdInt>>,
    /// (task, missing dependency id) pairs skipped under the Ignore policy.
    unresolved: Vec<(TaskIdInt, String)>,
}

impl TaskRegistry {
    /// Build a registry with the default configuration.
    pub fn new(tasks: Vec<Task>) -> Result<Self, ScheduleError> {
        Self::with_config(tasks, &SchedulingConfig::default())
    }

    pub fn with_config(tasks: Vec<Task>, config: &SchedulingConfig) -> Result<Self, ScheduleError> {
        let mut index = TaskIdInterner::with_capacity(tasks.len());
        for task in &tasks {
            if !task.duration.is_finite() || task.duration < 0.0 {
                return Err(ScheduleError::InvalidDuration {
                    task: task.id.clone(),
                    duration: task.duration,
                });
            }
            if index.insert_unique(&task.id).is_none() {
                return Err(ScheduleError::DuplicateTaskId(task.id.clone()));
            }
        }

        let n = tasks.len();
        let mut deps: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<TaskIdInt>> = vec![Vec::new(); n];
        let mut unresolved = Vec::new();

        for (idx, task) in tasks.iter().enumerate() {
            let id = idx as TaskIdInt;
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for dep in &task.dependencies {
                if *dep == task.id {
                    return Err(ScheduleError::SelfDependency(task.id.clone()));
                }
                if !seen.insert(dep.as_str()) {
                    return Err(ScheduleError::DuplicateDependency {
                        task: task.id.clone(),
                        dependency: dep.clone(),
                    });
                }
                match index.get(dep) {
                    Some(dep_id) => {
                        deps[idx].push(dep_id);
                        dependents[dep_id as usize].push(id);
                    }
                    None => match config.missing_dependencies {
                        MissingDependencyPolicy::Ignore => unresolved.push((id, dep.clone())),
                        MissingDependencyPolicy::Reject => {
                            return Err(ScheduleError::UnknownDependency {
                                task: task.id.clone(),
                                dependency: dep.clone(),
                            });
                        }
                    },
                }
            }
        }

        Ok(Self {
            tasks,
            index,
            deps,
            dependents,
            unresolved,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.index.get(id).map(|int| &self.tasks[int as usize])
    }

    /// All task ids in input order.
    pub fn all_ids(&self) -> Vec<&str> {
        self.index.names().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Tasks that list `id` as a dependency, or `None` for an unknown id.
    pub fn dependents_of(&self, id: &str) -> Option<Vec<&str>> {
        let int = self.index.get(id)?;
        Some(
            self.dependents[int as usize]
                .iter()
                .map(|&d| self.tasks[d as usize].id.as_str())
                .collect(),
        )
    }

    /// Every `(task id, missing dependency id)` pair that was skipped.
    pub fn unresolved_dependencies(&self) -> Vec<(&str, &str)> {
        self.unresolved
            .iter()
            .map(|(task, dep)| (self.tasks[*task as usize].id.as_str(), dep.as_str()))
            .collect()
    }

    pub(crate) fn id_of(&self, id: &str) -> Option<TaskIdInt> {
        self.index.get(id)
    }

    pub(crate) fn task_at(&self, id: TaskIdInt) -> &Task {
        &self.tasks[id as usize]
    }

    pub(crate) fn resolved_deps(&self, id: TaskIdInt) -> &[TaskIdInt] {
        &self.deps[id as usize]
    }

    pub(crate) fn resolved_dependents(&self, id: TaskIdInt) -> &[TaskIdInt] {
        &self.dependents[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, duration: f64, deps: &[&str]) -> Task {
        Task::new(id, duration, deps.iter().copied())
    }

    #[test]
    fn test_preserves_input_order() {
        let registry = TaskRegistry::new(vec![
            make_task("c", 1.0, &[]),
            make_task("a", 2.0, &["c"]),
            make_task("b", 3.0, &["a", "c"]),
        ])
        .unwrap();

        assert_eq!(registry.all_ids(), vec!["c", "a", "b"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("a").map(|t| t.duration), Some(2.0));
        assert!(registry.get("zzz").is_none());
        assert_eq!(registry.dependents_of("c"), Some(vec!["a", "b"]));
        assert_eq!(registry.dependents_of("b"), Some(vec![]));
        assert_eq!(registry.dependents_of("zzz"), None);
    }

    #[test]
    fn test_duplicate_task_id() {
        let result = TaskRegistry::new(vec![make_task("A", 1.0, &[]), make_task("A", 2.0, &[])]);
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::DuplicateTaskId("A".to_string())
        );
    }

    #[test]
    fn test_invalid_durations() {
        for duration in [-1.0, f64::NAN, f64::INFINITY] {
            let result = TaskRegistry::new(vec![make_task("a", duration, &[])]);
            assert!(matches!(
                result,
                Err(ScheduleError::InvalidDuration { ref task, .. }) if task == "a"
            ));
        }
    }

    #[test]
    fn test_self_dependency() {
        let result = TaskRegistry::new(vec![make_task("a", 1.0, &["a"])]);
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::SelfDependency("a".to_string())
        );
    }

    #[test]
    fn test_duplicate_dependency() {
        let result = TaskRegistry::new(vec![
            make_task("a", 1.0, &[]),
            make_task("b", 1.0, &["a", "a"]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::DuplicateDependency {
                task: "b".to_string(),
                dependency: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_dependency_ignored_by_default() {
        let registry =
            TaskRegistry::new(vec![make_task("a", 1.0, &["ghost"]), make_task("b", 1.0, &["a"])])
                .unwrap();
        assert_eq!(registry.unresolved_dependencies(), vec![("a", "ghost")]);
        assert_eq!(registry.resolved_deps(0), &[] as &[TaskIdInt]);
        assert_eq!(registry.resolved_deps(1), &[0]);
    }

    #[test]
    fn test_missing_dependency_rejected_when_strict() {
        let result = TaskRegistry::with_config(
            vec![make_task("a", 1.0, &["ghost"])],
            &SchedulingConfig::strict(),
        );
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::UnknownDependency {
                task: "a".to_string(),
                dependency: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_forward_reference_resolves() {
        // Dependencies may name tasks listed later in the input.
        let registry = TaskRegistry::with_config(
            vec![make_task("b", 1.0, &["a"]), make_task("a", 1.0, &[])],
            &SchedulingConfig::strict(),
        )
        .unwrap();
        assert_eq!(registry.id_of("a"), Some(1));
        assert_eq!(registry.resolved_deps(0), &[1]);
        assert_eq!(registry.resolved_dependents(1), &[0]);
        assert_eq!(registry.task_at(1).id, "a");
    }

    #[test]
    fn test_empty_registry() {
        let registry = TaskRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.all_ids().is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}

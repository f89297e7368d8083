//! Dependency-respecting task ordering.

use crate::error::ScheduleError;
use crate::interner::TaskIdInt;
use crate::log_debug;
use crate::registry::TaskRegistry;

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Order tasks so that every task follows all of its dependencies.
///
/// Depth-first from each task in registry order, visiting dependencies in the
/// order they are listed and emitting a task once all of them are emitted.
/// Uses an explicit stack so deep chains cannot exhaust the call stack.
/// Unresolved dependency ids never appear as edges here, so they are skipped.
///
/// # Returns
/// * `Ok(order)` with every task exactly once
/// * `Err(ScheduleError::CyclicDependency)` naming the task that closed a cycle
pub(crate) fn topological_order(
    registry: &TaskRegistry,
    verbosity: u8,
) -> Result<Vec<TaskIdInt>, ScheduleError> {
    let n = registry.len();
    let mut state = vec![VisitState::Unvisited; n];
    let mut order: Vec<TaskIdInt> = Vec::with_capacity(n);
    // Frames are (task, index of the next dependency to visit).
    let mut stack: Vec<(TaskIdInt, usize)> = Vec::new();

    for root in 0..n as TaskIdInt {
        if state[root as usize] != VisitState::Unvisited {
            continue;
        }
        state[root as usize] = VisitState::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (task, cursor) = *frame;
            let deps = registry.resolved_deps(task);

            if cursor < deps.len() {
                frame.1 += 1;
                let dep = deps[cursor];
                match state[dep as usize] {
                    VisitState::Unvisited => {
                        log_debug!(
                            verbosity,
                            "visit {} (required by {})",
                            registry.task_at(dep).id,
                            registry.task_at(task).id
                        );
                        state[dep as usize] = VisitState::InProgress;
                        stack.push((dep, 0));
                    }
                    VisitState::InProgress => {
                        return Err(ScheduleError::CyclicDependency(
                            registry.task_at(dep).id.clone(),
                        ));
                    }
                    VisitState::Done => {}
                }
            } else {
                stack.pop();
                state[task as usize] = VisitState::Done;
                order.push(task);
            }
        }
    }

    Ok(order)
}

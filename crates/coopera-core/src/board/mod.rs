//! Task Board Store
//!
//! The client's local copy of one team's tasks (`localTasks`), owned by the
//! board view and mutated only through the methods below. Columns are a pure
//! view over the stored order.
//!
//! Concurrent moves of the same task are last-writer-wins; there is no
//! per-task lock and no synchronization between browser tabs.

mod moves;
#[cfg(test)]
mod tests;

pub use moves::{move_task, MoveOutcome, PendingMove, TaskStatusGateway};

use std::cell::RefCell;

use chrono::{DateTime, Utc};

use crate::error::{ApiError, ApiResult};
use crate::model::{Column, Entity, Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Replace the whole local copy with a fresh server listing
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == task_id)
    }

    /// Append a task; an existing task with the same id is replaced in place
    pub fn add(&mut self, task: Task) {
        if !self.update(task.clone()) {
            self.tasks.push(task);
        }
    }

    /// Replace the task with the same id, keeping its position. Returns false if absent.
    pub fn update(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id() == task.id()) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Remove exactly one task; the others keep their order
    pub fn remove(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id() == task_id)?;
        Some(self.tasks.remove(index))
    }

    /// Tasks in one column, in board order
    pub fn column(&self, column: Column) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.column() == Some(column)).collect()
    }

    /// Task count per column, in `Column::ALL` order
    pub fn column_counts(&self) -> [(Column, usize); 4] {
        Column::ALL.map(|column| (column, self.column(column).len()))
    }

    /// Optimistically move a task, before the server has confirmed anything.
    ///
    /// A move onto the same column is a no-op and returns `Ok(None)`.
    pub fn begin_move(
        &mut self,
        task_id: TaskId,
        from: Column,
        to: Column,
        now: DateTime<Utc>,
    ) -> ApiResult<Option<PendingMove>> {
        if from == to {
            return Ok(None);
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id() == task_id)
            .ok_or_else(|| ApiError::validation(format!("Task {task_id} is not on this board")))?;

        let pending = PendingMove { task_id, from, to, previous_updated_at: task.updated_at };
        task.status = to.status();
        task.updated_at = now;
        Ok(Some(pending))
    }

    /// Undo a failed move. Skipped when the task has moved on since.
    pub fn rollback(&mut self, pending: &PendingMove) -> bool {
        match self.tasks.iter_mut().find(|t| t.id() == pending.task_id) {
            Some(task) if task.status == pending.to.status() => {
                task.status = pending.from.status();
                task.updated_at = pending.previous_updated_at;
                true
            }
            _ => false,
        }
    }
}

/// Access to a board that lives in some owner's state container
pub trait BoardHandle {
    /// Run `f` against the board; `None` once the owner has dropped it
    fn with_board<R>(&self, f: impl FnOnce(&mut TaskBoard) -> R) -> Option<R>;
}

impl BoardHandle for RefCell<TaskBoard> {
    fn with_board<R>(&self, f: impl FnOnce(&mut TaskBoard) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

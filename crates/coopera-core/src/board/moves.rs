//! Optimistic Status Transitions
//!
//! The local board is updated first, the status patch is sent second,
//! and a rejected patch rolls the local change back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};

use super::BoardHandle;
use crate::dto::UpdateTaskStatusRequest;
use crate::error::ApiResult;
use crate::model::{Column, TaskId, UserId};

/// Record of a locally applied move awaiting server confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove {
    pub task_id: TaskId,
    pub from: Column,
    pub to: Column,
    pub previous_updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Dropped onto its own column; nothing changed, nothing sent
    Unchanged,
    /// Applied locally and confirmed by the server
    Moved,
}

/// Where status changes are persisted
#[async_trait(?Send)]
pub trait TaskStatusGateway {
    async fn update_status(&self, request: &UpdateTaskStatusRequest) -> ApiResult<()>;
}

/// Move a task between columns with optimistic update and rollback.
///
/// There is no retry; on failure the card returns to its previous column
/// and the error is returned for the caller to surface.
pub async fn move_task<B, G>(
    board: &B,
    gateway: &G,
    current_user_id: UserId,
    task_id: TaskId,
    from: Column,
    to: Column,
    now: DateTime<Utc>,
) -> ApiResult<MoveOutcome>
where
    B: BoardHandle,
    G: TaskStatusGateway + ?Sized,
{
    let started = board.with_board(|b| b.begin_move(task_id, from, to, now)).transpose()?;
    let Some(pending) = started.flatten() else {
        return Ok(MoveOutcome::Unchanged);
    };

    let request = UpdateTaskStatusRequest::new(task_id, current_user_id, &to.status());
    match gateway.update_status(&request).await {
        Ok(()) => {
            info!("[BOARD] task {} moved {:?} -> {:?}", task_id, from, to);
            Ok(MoveOutcome::Moved)
        }
        Err(err) => {
            let reverted = board.with_board(|b| b.rollback(&pending)).unwrap_or(false);
            warn!("[BOARD] move of task {} failed ({}), reverted={}", task_id, err, reverted);
            Err(err)
        }
    }
}

//! Task wire shapes.

use serde::{Deserialize, Serialize};

use super::{format_timestamp, parse_timestamp};
use crate::error::ApiError;
use crate::model::{MemberId, Task, TaskId, TaskStatus, TeamId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: TaskId,
    pub team_id: TeamId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub points: i64,
    pub status: String,
    /// Absent, `null` and `0` all mean unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_member: Option<MemberId>,
    pub created_by_user: UserId,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    pub team_id: TeamId,
    pub title: String,
    pub description: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_member: Option<MemberId>,
    pub created_by_user: UserId,
}

/// Full edit of a task's content; `assigned_to_member = 0` unassigns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTaskRequest {
    pub task_id: TaskId,
    pub current_user_id: UserId,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub assigned_to_member: MemberId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTaskStatusRequest {
    pub task_id: TaskId,
    pub current_user_id: UserId,
    pub status: String,
}

impl UpdateTaskStatusRequest {
    pub fn new(task_id: TaskId, current_user_id: UserId, status: &TaskStatus) -> Self {
        Self { task_id, current_user_id, status: status.as_str().to_string() }
    }
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            team_id: task.team_id,
            title: task.title.clone(),
            description: Some(task.description.clone()),
            points: i64::from(task.points),
            status: task.status.as_str().to_string(),
            assigned_to_member: task.assigned_to_member,
            created_by_user: task.created_by_user,
            created_at: format_timestamp(&task.created_at),
            updated_at: format_timestamp(&task.updated_at),
        }
    }
}

impl TryFrom<TaskDto> for Task {
    type Error = ApiError;

    fn try_from(dto: TaskDto) -> Result<Self, Self::Error> {
        let points = u32::try_from(dto.points)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| ApiError::decode(format!("task.points: expected a positive integer, got {}", dto.points)))?;

        Ok(Self {
            id: dto.id,
            team_id: dto.team_id,
            title: dto.title,
            description: dto.description.unwrap_or_default(),
            points,
            status: TaskStatus::parse(&dto.status),
            assigned_to_member: dto.assigned_to_member.filter(|id| *id != 0),
            created_by_user: dto.created_by_user,
            created_at: parse_timestamp("task.created_at", &dto.created_at)?,
            updated_at: parse_timestamp("task.updated_at", &dto.updated_at)?,
        })
    }
}

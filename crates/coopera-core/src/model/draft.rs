//! Form Drafts
//!
//! User input collected by forms, validated before any request is built.

use crate::dto::{CreateMembershipRequest, CreateTaskRequest, CreateTeamRequest, UpdateTaskRequest};
use crate::error::{ApiError, ApiResult};

use super::entity::{MemberId, TaskId, TeamId, UserId};
use super::team::MemberRole;
use super::task::Task;

/// Task form contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub points: u32,
    pub assigned_to_member: Option<MemberId>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self { title: String::new(), description: String::new(), points: 1, assigned_to_member: None }
    }
}

impl TaskDraft {
    /// Prefill the edit form from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            points: task.points,
            assigned_to_member: task.assigned_to_member,
        }
    }

    fn validate(&self) -> ApiResult<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::validation("Task title is required"));
        }
        if self.points < 1 {
            return Err(ApiError::validation("Points must be at least 1"));
        }
        Ok(title.to_string())
    }

    pub fn to_create_request(&self, team_id: TeamId, created_by_user: UserId) -> ApiResult<CreateTaskRequest> {
        let title = self.validate()?;
        Ok(CreateTaskRequest {
            team_id,
            title,
            description: self.description.trim().to_string(),
            points: self.points,
            assigned_to_member: self.assigned_to_member,
            created_by_user,
        })
    }

    pub fn to_update_request(&self, task_id: TaskId, current_user_id: UserId) -> ApiResult<UpdateTaskRequest> {
        let title = self.validate()?;
        Ok(UpdateTaskRequest {
            task_id,
            current_user_id,
            title,
            description: self.description.trim().to_string(),
            points: self.points,
            assigned_to_member: self.assigned_to_member.unwrap_or(0),
        })
    }
}

/// New team form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDraft {
    pub name: String,
}

impl TeamDraft {
    pub fn to_create_request(&self, created_by_user: UserId) -> ApiResult<CreateTeamRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Team name is required"));
        }
        Ok(CreateTeamRequest { name: name.to_string(), created_by_user })
    }
}

/// Invitation form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteDraft {
    /// Telegram username, with or without the leading `@`
    pub username: String,
    pub role: MemberRole,
}

impl InviteDraft {
    pub fn to_create_request(&self, team_id: TeamId, current_user_id: UserId) -> ApiResult<CreateMembershipRequest> {
        let username = self.username.trim().trim_start_matches('@');
        if username.is_empty() {
            return Err(ApiError::validation("Username is required"));
        }
        Ok(CreateMembershipRequest {
            team_id,
            username: username.to_string(),
            role: self.role.as_str().to_string(),
            current_user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_draft_requires_title() {
        let draft = TaskDraft { title: "   ".to_string(), ..Default::default() };
        assert_eq!(
            draft.to_create_request(1, 2),
            Err(ApiError::Validation("Task title is required".to_string()))
        );
    }

    #[test]
    fn test_task_draft_requires_points() {
        let draft = TaskDraft { title: "Ship it".to_string(), points: 0, ..Default::default() };
        assert!(matches!(draft.to_create_request(1, 2), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_task_draft_update_unassigns_with_zero() {
        let draft = TaskDraft { title: " Ship it ".to_string(), points: 2, ..Default::default() };
        let request = draft.to_update_request(9, 4).unwrap();
        assert_eq!(request.title, "Ship it");
        assert_eq!(request.assigned_to_member, 0);
    }

    #[test]
    fn test_invite_strips_at_sign() {
        let draft = InviteDraft { username: "@carol".to_string(), role: MemberRole::Manager };
        let request = draft.to_create_request(3, 1).unwrap();
        assert_eq!(request.username, "carol");
        assert_eq!(request.role, "manager");
    }

    #[test]
    fn test_team_draft_requires_name() {
        assert!(TeamDraft::default().to_create_request(1).is_err());
        assert_eq!(TeamDraft { name: " Ops ".to_string() }.to_create_request(1).unwrap().name, "Ops");
    }
}

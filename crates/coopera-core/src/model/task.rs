//! Task Entity
//!
//! A unit of work on a team's kanban board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, MemberId, TaskId, TeamId, UserId};

/// Task status as reported by the backend
///
/// The backend does not restrict the value set, so unknown strings are kept
/// verbatim in `Other` instead of failing the whole task list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Open,
    Assigned,
    InProgress,
    InReview,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::InReview => "in_review",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "open" => TaskStatus::Open,
            "assigned" => TaskStatus::Assigned,
            "in_progress" => TaskStatus::InProgress,
            "in_review" => TaskStatus::InReview,
            "completed" => TaskStatus::Completed,
            other => TaskStatus::Other(other.to_string()),
        }
    }

    /// Board column holding tasks with this status
    pub fn column(&self) -> Option<Column> {
        match self {
            TaskStatus::Open => Some(Column::Open),
            TaskStatus::Assigned => Some(Column::Assigned),
            TaskStatus::InReview => Some(Column::InReview),
            TaskStatus::Completed => Some(Column::Completed),
            TaskStatus::InProgress | TaskStatus::Other(_) => None,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        TaskStatus::parse(&s)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four fixed kanban columns, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Open,
    Assigned,
    InReview,
    Completed,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Open, Column::Assigned, Column::InReview, Column::Completed];

    pub fn status(&self) -> TaskStatus {
        match self {
            Column::Open => TaskStatus::Open,
            Column::Assigned => TaskStatus::Assigned,
            Column::InReview => TaskStatus::InReview,
            Column::Completed => TaskStatus::Completed,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Column::Open => "Open",
            Column::Assigned => "Assigned",
            Column::InReview => "In review",
            Column::Completed => "Completed",
        }
    }
}

/// A task belonging to one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub team_id: TeamId,
    pub title: String,
    pub description: String,
    /// Always at least 1
    pub points: u32,
    pub status: TaskStatus,
    /// Team-scoped member id of the assignee
    pub assigned_to_member: Option<MemberId>,
    pub created_by_user: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn column(&self) -> Option<Column> {
        self.status.column()
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to_member.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(TaskStatus::InReview.as_str(), "in_review");
        assert_eq!(TaskStatus::parse("completed"), TaskStatus::Completed);
        assert_eq!(TaskStatus::parse("blocked"), TaskStatus::Other("blocked".to_string()));
        assert_eq!(TaskStatus::parse("blocked").as_str(), "blocked");
    }

    #[test]
    fn test_status_serde_uses_wire_strings() {
        let json = serde_json::to_string(&TaskStatus::InReview).unwrap();
        assert_eq!(json, "\"in_review\"");
        let back: TaskStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(back, TaskStatus::Other("archived".to_string()));
    }

    #[test]
    fn test_columns_map_back_to_statuses() {
        for column in Column::ALL {
            assert_eq!(column.status().column(), Some(column));
        }
        assert_eq!(TaskStatus::InProgress.column(), None);
    }

    #[test]
    fn test_completed_flag_follows_status() {
        let stamp = chrono::Utc::now();
        let mut task = Task {
            id: 1,
            team_id: 1,
            title: "Ship".to_string(),
            description: String::new(),
            points: 2,
            status: TaskStatus::InReview,
            assigned_to_member: None,
            created_by_user: 1,
            created_at: stamp,
            updated_at: stamp,
        };
        assert!(!task.is_completed());
        task.status = TaskStatus::Completed;
        assert!(task.is_completed());
        assert_eq!(task.column(), Some(Column::Completed));
    }
}

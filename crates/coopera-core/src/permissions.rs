//! Edit Permissions
//!
//! Who may touch what inside a team. Managers may do everything; members may
//! move the tasks they own or are assigned to.

use crate::model::{MemberRole, Task, Team, UserId};

pub fn can_manage_team(team: &Team, username: &str) -> bool {
    team.role_of(username) == Some(MemberRole::Manager)
}

pub fn can_move_task(team: &Team, username: &str, user_id: UserId, task: &Task) -> bool {
    let Some(me) = team.member_by_username(username) else {
        return false;
    };
    if task.team_id != team.id {
        return false;
    }
    me.is_manager() || task.assigned_to_member == Some(me.member_id) || task.created_by_user == user_id
}

/// Editing content follows the same rule as moving
pub fn can_edit_task(team: &Team, username: &str, user_id: UserId, task: &Task) -> bool {
    can_move_task(team, username, user_id, task)
}

pub fn can_delete_task(team: &Team, username: &str, user_id: UserId, task: &Task) -> bool {
    can_manage_team(team, username) || (task.team_id == team.id && task.created_by_user == user_id)
}

/// What the current user may do with one card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardAccess {
    pub can_move: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl CardAccess {
    /// Nothing is allowed until both the team and the user are known
    pub fn resolve(team: Option<&Team>, user: Option<(&str, UserId)>, task: &Task) -> Self {
        match (team, user) {
            (Some(team), Some((username, user_id))) => Self {
                can_move: can_move_task(team, username, user_id, task),
                can_edit: can_edit_task(team, username, user_id, task),
                can_delete: can_delete_task(team, username, user_id, task),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, TaskStatus};
    use chrono::Utc;

    fn team() -> Team {
        Team {
            id: 1,
            name: "Core".to_string(),
            created_at: Utc::now(),
            created_by_user: 1,
            members: vec![
                Member { member_id: 10, username: "boss".to_string(), role: MemberRole::Manager },
                Member { member_id: 11, username: "dev".to_string(), role: MemberRole::Member },
            ],
        }
    }

    fn task(assignee: Option<u64>, creator: UserId) -> Task {
        Task {
            id: 5,
            team_id: 1,
            title: "t".to_string(),
            description: String::new(),
            points: 1,
            status: TaskStatus::Open,
            assigned_to_member: assignee,
            created_by_user: creator,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_manager_moves_anything() {
        assert!(can_move_task(&team(), "boss", 1, &task(None, 99)));
        assert!(can_manage_team(&team(), "boss"));
    }

    #[test]
    fn test_member_moves_own_tasks_only() {
        assert!(can_move_task(&team(), "dev", 2, &task(Some(11), 99)));
        assert!(can_move_task(&team(), "dev", 2, &task(None, 2)));
        assert!(!can_move_task(&team(), "dev", 2, &task(Some(10), 99)));
        assert!(!can_manage_team(&team(), "dev"));
        assert!(!can_delete_task(&team(), "dev", 2, &task(Some(11), 99)));
    }

    #[test]
    fn test_creator_deletes_own_task() {
        assert!(can_delete_task(&team(), "dev", 2, &task(None, 2)));
        assert!(can_delete_task(&team(), "dev", 2, &task(Some(10), 2)));
        assert!(!can_delete_task(&team(), "dev", 2, &task(Some(11), 3)));
    }

    #[test]
    fn test_card_access_waits_for_team_and_user() {
        let t = task(Some(11), 99);
        assert_eq!(CardAccess::resolve(None, Some(("dev", 2)), &t), CardAccess::default());
        assert_eq!(CardAccess::resolve(Some(&team()), None, &t), CardAccess::default());

        let loaded = CardAccess::resolve(Some(&team()), Some(("dev", 2)), &t);
        assert_eq!(loaded, CardAccess { can_move: true, can_edit: true, can_delete: false });
    }

    #[test]
    fn test_manage_follows_role_change() {
        let mut promoted = team();
        assert!(!can_manage_team(&promoted, "dev"));
        promoted.members[1].role = MemberRole::Manager;
        assert!(can_manage_team(&promoted, "dev"));
        assert!(CardAccess::resolve(Some(&promoted), Some(("dev", 2)), &task(None, 99)).can_delete);
    }

    #[test]
    fn test_outsider_moves_nothing() {
        assert!(!can_move_task(&team(), "stranger", 3, &task(None, 3)));
    }
}

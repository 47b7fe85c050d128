//! Statistics Aggregation
//!
//! Derives team-wide and personal numbers from the tasks of every team a user belongs to.
//! All functions are pure.
//!
//! Statuses are grouped into three buckets: `open`, "in progress"
//! (`assigned`, `in_progress`, `in_review`) and `completed`. Any other status
//! belongs to no bucket but still counts towards totals and points.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{MemberId, MemberRole, Task, TaskStatus, Team, TeamId, UserTeam};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Open,
    InProgress,
    Completed,
}

pub fn bucket(status: &TaskStatus) -> Option<StatusBucket> {
    match status {
        TaskStatus::Completed => Some(StatusBucket::Completed),
        TaskStatus::Assigned | TaskStatus::InProgress | TaskStatus::InReview => Some(StatusBucket::InProgress),
        TaskStatus::Open => Some(StatusBucket::Open),
        TaskStatus::Other(_) => None,
    }
}

/// Percentage of completed tasks, 0 for an empty set
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Mean points per task, 0 for an empty set
pub fn average_points(total_points: u64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    total_points as f64 / total as f64
}

/// The user's share of all completed work across their teams, in percent
pub fn efficiency(personal_completed: usize, overall_completed: usize) -> f64 {
    completion_rate(personal_completed, overall_completed)
}

/// Render a percentage with one decimal, e.g. `33.3%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Task counts per bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total_points: u64,
}

impl StatusBreakdown {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut breakdown = Self::default();
        for task in tasks {
            breakdown.total += 1;
            breakdown.total_points += u64::from(task.points);
            match bucket(&task.status) {
                Some(StatusBucket::Open) => breakdown.open += 1,
                Some(StatusBucket::InProgress) => breakdown.in_progress += 1,
                Some(StatusBucket::Completed) => breakdown.completed += 1,
                None => {}
            }
        }
        breakdown
    }

    pub fn completion_rate(&self) -> f64 {
        completion_rate(self.completed, self.total)
    }

    pub fn average_points(&self) -> f64 {
        average_points(self.total_points, self.total)
    }
}

/// The current user's member id in each of their teams
///
/// Member ids are team-scoped, so "assigned to me" must be decided per team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberIndex {
    by_team: HashMap<TeamId, MemberId>,
}

impl MemberIndex {
    pub fn for_user<'a>(username: &str, teams: impl IntoIterator<Item = &'a Team>) -> Self {
        let by_team = teams
            .into_iter()
            .filter_map(|team| team.member_by_username(username).map(|m| (team.id, m.member_id)))
            .collect();
        Self { by_team }
    }

    pub fn member_id(&self, team_id: TeamId) -> Option<MemberId> {
        self.by_team.get(&team_id).copied()
    }

    pub fn is_assigned(&self, task: &Task) -> bool {
        match (self.member_id(task.team_id), task.assigned_to_member) {
            (Some(mine), Some(assignee)) => mine == assignee,
            _ => false,
        }
    }

    pub fn assigned_tasks<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.is_assigned(t)).collect()
    }
}

/// Numbers for one team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatistics {
    pub team_id: TeamId,
    pub team_name: String,
    pub role: MemberRole,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
    pub my_tasks: usize,
    pub my_completed_tasks: usize,
    pub my_completion_rate: f64,
}

/// Everything shown on the statistics page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStatistics {
    pub overall: StatusBreakdown,
    pub personal: StatusBreakdown,
    pub completion_rate: f64,
    pub personal_completion_rate: f64,
    pub average_points: f64,
    pub personal_average_points: f64,
    pub efficiency: f64,
    pub per_team: Vec<TeamStatistics>,
}

impl UserStatistics {
    /// `assigned_tasks` is the subset of `all_tasks` assigned to the user
    pub fn compute(all_tasks: &[Task], assigned_tasks: &[&Task], teams: &[UserTeam]) -> Self {
        let overall = StatusBreakdown::from_tasks(all_tasks);
        let personal = StatusBreakdown::from_tasks(assigned_tasks.iter().copied());

        let per_team = teams
            .iter()
            .map(|team| {
                let team_all = StatusBreakdown::from_tasks(all_tasks.iter().filter(|t| t.team_id == team.id));
                let team_mine = StatusBreakdown::from_tasks(
                    assigned_tasks.iter().copied().filter(|t| t.team_id == team.id),
                );
                TeamStatistics {
                    team_id: team.id,
                    team_name: team.name.clone(),
                    role: team.role,
                    total_tasks: team_all.total,
                    completed_tasks: team_all.completed,
                    completion_rate: team_all.completion_rate(),
                    my_tasks: team_mine.total,
                    my_completed_tasks: team_mine.completed,
                    my_completion_rate: team_mine.completion_rate(),
                }
            })
            .collect();

        Self {
            completion_rate: overall.completion_rate(),
            personal_completion_rate: personal.completion_rate(),
            average_points: overall.average_points(),
            personal_average_points: personal.average_points(),
            efficiency: efficiency(personal.completed, overall.completed),
            overall,
            personal,
            per_team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;
    use chrono::{TimeZone, Utc};

    fn make_task(id: u64, team_id: TeamId, status: &str, points: u32, assignee: Option<MemberId>) -> Task {
        let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Task {
            id,
            team_id,
            title: format!("Task {}", id),
            description: String::new(),
            points,
            status: TaskStatus::parse(status),
            assigned_to_member: assignee,
            created_by_user: 1,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn make_team(id: TeamId, members: &[(MemberId, &str)]) -> Team {
        Team {
            id,
            name: format!("Team {}", id),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            created_by_user: 1,
            members: members
                .iter()
                .map(|(member_id, username)| Member {
                    member_id: *member_id,
                    username: username.to_string(),
                    role: MemberRole::Member,
                })
                .collect(),
        }
    }

    #[test]
    fn test_rate_guards() {
        assert_eq!(completion_rate(0, 0), 0.0);
        assert_eq!(completion_rate(4, 4), 100.0);
        assert_eq!(average_points(0, 0), 0.0);
        assert_eq!(efficiency(3, 0), 0.0);
        assert_eq!(efficiency(1, 4), 25.0);
    }

    #[test]
    fn test_in_review_counts_as_in_progress() {
        let tasks = vec![make_task(1, 1, "in_review", 2, None)];
        let breakdown = StatusBreakdown::from_tasks(&tasks);
        assert_eq!(breakdown.in_progress, 1);
        assert_eq!(breakdown.completed, 0);
        assert_eq!(breakdown.open, 0);
    }

    #[test]
    fn test_unknown_status_counted_only_in_totals() {
        let tasks = vec![make_task(1, 1, "blocked", 4, None), make_task(2, 1, "completed", 2, None)];
        let breakdown = StatusBreakdown::from_tasks(&tasks);
        assert_eq!(breakdown.total, 2);
        assert_eq!(breakdown.open + breakdown.in_progress + breakdown.completed, 1);
        assert_eq!(breakdown.total_points, 6);
        assert_eq!(breakdown.completion_rate(), 50.0);
    }

    #[test]
    fn test_overall_scenario() {
        let tasks = vec![
            make_task(1, 1, "open", 5, None),
            make_task(2, 1, "completed", 10, None),
            make_task(3, 1, "assigned", 3, None),
        ];
        let stats = UserStatistics::compute(&tasks, &[], &[]);
        assert_eq!(format_percent(stats.completion_rate), "33.3%");
        assert_eq!(stats.overall.total_points, 18);
        assert_eq!(stats.average_points, 6.0);
        assert_eq!(stats.efficiency, 0.0);
    }

    #[test]
    fn test_member_ids_are_team_scoped() {
        let teams = vec![make_team(1, &[(7, "alice"), (42, "bob")]), make_team(2, &[(42, "alice")])];
        let index = MemberIndex::for_user("alice", &teams);

        assert_eq!(index.member_id(1), Some(7));
        assert_eq!(index.member_id(2), Some(42));
        assert!(index.is_assigned(&make_task(1, 2, "open", 1, Some(42))));
        assert!(!index.is_assigned(&make_task(2, 1, "open", 1, Some(42))));
        assert!(!index.is_assigned(&make_task(3, 3, "open", 1, Some(7))));
        assert!(!index.is_assigned(&make_task(4, 1, "open", 1, None)));
    }

    #[test]
    fn test_personal_and_per_team_numbers() {
        let teams = vec![make_team(1, &[(7, "alice")]), make_team(2, &[(42, "alice"), (43, "bob")])];
        let tasks = vec![
            make_task(1, 1, "completed", 3, Some(7)),
            make_task(2, 1, "open", 1, None),
            make_task(3, 2, "completed", 5, Some(43)),
            make_task(4, 2, "in_review", 2, Some(42)),
        ];
        let index = MemberIndex::for_user("alice", &teams);
        let mine = index.assigned_tasks(&tasks);
        let user_teams = vec![
            UserTeam { id: 1, name: "Team 1".to_string(), role: MemberRole::Manager },
            UserTeam { id: 2, name: "Team 2".to_string(), role: MemberRole::Member },
        ];

        let stats = UserStatistics::compute(&tasks, &mine, &user_teams);
        assert_eq!(stats.personal.total, 2);
        assert_eq!(stats.personal.completed, 1);
        assert_eq!(stats.personal_completion_rate, 50.0);
        assert_eq!(stats.efficiency, 50.0);

        let team_two = &stats.per_team[1];
        assert_eq!(team_two.team_id, 2);
        assert_eq!(team_two.total_tasks, 2);
        assert_eq!(team_two.completed_tasks, 1);
        assert_eq!(team_two.my_tasks, 1);
        assert_eq!(team_two.my_completed_tasks, 0);
        assert_eq!(team_two.my_completion_rate, 0.0);
        assert_eq!(stats.per_team[0].role, MemberRole::Manager);
    }
}

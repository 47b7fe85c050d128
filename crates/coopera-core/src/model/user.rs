//! User Entity
//!
//! A Telegram-authenticated user together with the teams they belong to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, TeamId, UserId};
use super::team::MemberRole;

/// Summary of one team membership as listed on the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTeam {
    pub id: TeamId,
    pub name: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub telegram_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub teams: Vec<UserTeam>,
}

impl User {
    pub fn role_in(&self, team_id: TeamId) -> Option<MemberRole> {
        self.teams.iter().find(|t| t.id == team_id).map(|t| t.role)
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

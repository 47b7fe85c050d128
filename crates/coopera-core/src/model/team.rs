//! Team Entity
//!
//! A team with its member list. Roles are scoped to the team.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, MemberId, TeamId, UserId};

/// Role of a member inside one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Can manage members, rename or delete the team and touch every task
    Manager,
    #[default]
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Manager => "manager",
            MemberRole::Member => "member",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "manager" => Some(MemberRole::Manager),
            "member" => Some(MemberRole::Member),
            _ => None,
        }
    }
}

/// A user's membership record inside a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub username: String,
    pub role: MemberRole,
}

impl Member {
    pub fn is_manager(&self) -> bool {
        self.role == MemberRole::Manager
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> Self::Id {
        self.member_id
    }
}

/// A team and its members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// User id of the creator; expected to be among the members, not verified
    pub created_by_user: UserId,
    pub members: Vec<Member>,
}

impl Team {
    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.member_id == member_id)
    }

    pub fn member_by_username(&self, username: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.username == username)
    }

    /// Role of `username` in this team, `None` for outsiders
    pub fn role_of(&self, username: &str) -> Option<MemberRole> {
        self.member_by_username(username).map(|m| m.role)
    }

    pub fn managers(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_manager())
    }
}

impl Entity for Team {
    type Id = TeamId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(member_id: MemberId, username: &str, role: MemberRole) -> Member {
        Member { member_id, username: username.to_string(), role }
    }

    #[test]
    fn test_member_lookup() {
        let team = Team {
            id: 1,
            name: "Core".to_string(),
            created_at: Utc::now(),
            created_by_user: 10,
            members: vec![
                member(7, "alice", MemberRole::Manager),
                member(8, "bob", MemberRole::Member),
            ],
        };

        assert_eq!(team.member(8).map(|m| m.username.as_str()), Some("bob"));
        assert_eq!(team.role_of("alice"), Some(MemberRole::Manager));
        assert_eq!(team.role_of("carol"), None);
        assert_eq!(team.managers().count(), 1);
    }

    #[test]
    fn test_role_strings() {
        assert_eq!(MemberRole::Manager.as_str(), "manager");
        assert_eq!(MemberRole::parse("member"), Some(MemberRole::Member));
        assert_eq!(MemberRole::parse("owner"), None);
    }
}
